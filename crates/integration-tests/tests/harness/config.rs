//! TOML config builder for tests

use portico_config::Config;

/// Builds a [`Config`] from TOML fragments
pub struct ConfigBuilder {
    health_enabled: bool,
    health_path: String,
    catalog_enabled: bool,
    catalog_path: String,
    priorities: Vec<(String, i32)>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            health_enabled: true,
            health_path: "/health".to_owned(),
            catalog_enabled: true,
            catalog_path: "/catalog".to_owned(),
            priorities: vec![("fault".to_owned(), 0)],
        }
    }

    pub fn without_health(mut self) -> Self {
        self.health_enabled = false;
        self
    }

    pub fn without_catalog(mut self) -> Self {
        self.catalog_enabled = false;
        self
    }

    pub fn health_path(mut self, path: &str) -> Self {
        self.health_path = path.to_owned();
        self
    }

    pub fn catalog_path(mut self, path: &str) -> Self {
        self.catalog_path = path.to_owned();
        self
    }

    pub fn priorities(mut self, priorities: &[(&str, i32)]) -> Self {
        self.priorities = priorities.iter().map(|(name, p)| ((*name).to_owned(), *p)).collect();
        self
    }

    pub fn build(self) -> Config {
        let mut toml = String::new();

        toml.push_str(&format!(
            "[server.health]\nenabled = {}\npath = \"{}\"\n\n",
            self.health_enabled, self.health_path
        ));
        toml.push_str(&format!(
            "[server.catalog]\nenabled = {}\npath = \"{}\"\n\n",
            self.catalog_enabled, self.catalog_path
        ));

        toml.push_str("[translate.priority]\n");
        for (name, priority) in &self.priorities {
            toml.push_str(&format!("{name} = {priority}\n"));
        }

        Config::from_toml(&toml).expect("harness config must be valid")
    }
}
