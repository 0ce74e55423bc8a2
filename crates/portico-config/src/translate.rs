use std::collections::BTreeMap;

use serde::Deserialize;

/// Translator priority declarations
///
/// Maps a translator name to its dispatch priority. Lower values are
/// consulted first. Ordering between translators is always taken from
/// here, never from registration order; validation rejects two names
/// sharing a priority value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateConfig {
    #[serde(default = "default_priorities")]
    pub priority: BTreeMap<String, i32>,
}

impl TranslateConfig {
    /// Declared priority for a translator name
    #[must_use]
    pub fn priority_of(&self, name: &str) -> Option<i32> {
        self.priority.get(name).copied()
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            priority: default_priorities(),
        }
    }
}

fn default_priorities() -> BTreeMap<String, i32> {
    // The built-in typed-fault translator runs first unless overridden
    BTreeMap::from([("fault".to_string(), 0)])
}
