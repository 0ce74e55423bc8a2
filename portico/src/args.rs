use std::path::PathBuf;

use clap::Parser;

/// Portico response boundary
#[derive(Debug, Parser)]
#[command(name = "portico", about = "Unified response envelopes and centralized failure translation")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "portico.toml", env = "PORTICO_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PORTICO_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
