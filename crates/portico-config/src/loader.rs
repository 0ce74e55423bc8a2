use std::collections::HashMap;
use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw)?;
        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if translator priorities collide or endpoint
    /// paths are malformed
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_translator_priorities()?;
        self.validate_endpoint_paths()?;
        Ok(())
    }

    /// Translator dispatch must be deterministic: every declared priority
    /// value belongs to exactly one translator name
    fn validate_translator_priorities(&self) -> anyhow::Result<()> {
        let mut by_priority: HashMap<i32, &str> = HashMap::new();

        for (name, priority) in &self.translate.priority {
            if let Some(previous) = by_priority.insert(*priority, name) {
                anyhow::bail!(
                    "translators `{previous}` and `{name}` share priority {priority}; dispatch order must be unambiguous"
                );
            }
        }

        Ok(())
    }

    fn validate_endpoint_paths(&self) -> anyhow::Result<()> {
        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }
        if !self.server.catalog.path.starts_with('/') {
            anyhow::bail!("server.catalog.path must start with '/'");
        }
        if self.server.health.enabled
            && self.server.catalog.enabled
            && self.server.health.path == self.server.catalog.path
        {
            anyhow::bail!("health and catalog endpoints cannot share a path");
        }
        Ok(())
    }
}
