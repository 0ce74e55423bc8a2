mod catalog;
mod health;
mod respond;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Extension, Router};
use portico_config::Config;
use portico_translate::{FaultTranslator, Translate, TranslatorRegistry};
use tower_http::trace::TraceLayer;

pub use respond::{ApiFailure, ApiSuccess};

/// Build the translator registry from declared priorities
///
/// Every name in the priority table must be a known translator; the
/// built-in `fault` translator covers the typed failure condition.
///
/// # Errors
///
/// Returns an error if the table names an unknown translator or two
/// names share a priority value
pub fn build_registry(config: &portico_config::TranslateConfig) -> anyhow::Result<TranslatorRegistry> {
    let mut entries: Vec<(i32, Box<dyn Translate>)> = Vec::new();

    for (name, priority) in &config.priority {
        match name.as_str() {
            "fault" => entries.push((*priority, Box::new(FaultTranslator))),
            other => anyhow::bail!("unknown translator in priority table: `{other}`"),
        }
    }

    Ok(TranslatorRegistry::new(entries)?)
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    registry: Arc<TranslatorRegistry>,
}

impl Server {
    /// Build the server from configuration
    ///
    /// The translator registry is assembled from the declared priority
    /// table and exposed to mounted routes as an [`Extension`].
    ///
    /// # Errors
    ///
    /// Returns an error if the translator priority table is invalid
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let registry = Arc::new(build_registry(&config.translate)?);

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Read-only catalog listing
        if config.server.catalog.enabled {
            app = app.route(&config.server.catalog.path, axum::routing::get(catalog::catalog_handler));
        }

        Ok(Self {
            router: app,
            listen_address,
            registry,
        })
    }

    /// Shared translator registry backing this server
    #[must_use]
    pub fn registry(&self) -> Arc<TranslatorRegistry> {
        Arc::clone(&self.registry)
    }

    /// Mount application routes alongside the operational endpoints
    ///
    /// Application handlers return envelopes via [`ApiSuccess`] and
    /// [`ApiFailure`]; handlers that need to translate arbitrary raised
    /// conditions extract the registry from the request extensions.
    #[must_use]
    pub fn with_routes(mut self, routes: Router) -> Self {
        self.router = self.router.merge(routes);
        self
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Apply middleware to the fully merged router
    ///
    /// Layered last so routes mounted via `with_routes` see it too;
    /// `Router::layer` only wraps routes registered before the call.
    fn finish(self) -> Router {
        self.router
            .layer(TraceLayer::new_for_http())
            .layer(Extension(self.registry))
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.finish()
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.finish())
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
