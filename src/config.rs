use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the items store lives.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file; `None` opens an in-memory database
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn file(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Some(db_path.into()),
        }
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_in_memory() {
        assert!(StoreConfig::default().is_in_memory());
        assert_eq!(StoreConfig::in_memory(), StoreConfig::default());
    }

    #[test]
    fn deserializes_from_host_config() {
        let config: StoreConfig = serde_json::from_str(r#"{"db_path": "data/items.db"}"#).unwrap();
        assert_eq!(config, StoreConfig::file("data/items.db"));
        assert_eq!(config.db_path(), Some(Path::new("data/items.db")));

        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_in_memory());
    }
}
