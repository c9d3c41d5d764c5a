use crate::error::{Result, SupzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Image reference assigned to suppliers added without a selected image.
/// Kept as a named constant (and a config key) rather than an inline
/// literal; renderers treat the `builtin://` scheme as "draw the stock
/// silhouette".
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "builtin://supplier-placeholder";

/// Configuration for supz, stored as config.json in the user config dir.
///
/// Supplier records themselves are never persisted; this file only holds
/// settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupzConfig {
    /// URI used when a supplier is committed without an image
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

impl Default for SupzConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl SupzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SupzError::Io)?;
        let config: SupzConfig =
            serde_json::from_str(&content).map_err(SupzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SupzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SupzError::Serialization)?;
        fs::write(config_path, content).map_err(SupzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = SupzConfig::default();
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = env::temp_dir().join("supz_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = SupzConfig::load(&temp_dir).unwrap();
        assert_eq!(config, SupzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = env::temp_dir().join("supz_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let config = SupzConfig {
            placeholder_image: "file:///srv/assets/blank.png".to_string(),
        };
        config.save(&temp_dir).unwrap();

        let loaded = SupzConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded.placeholder_image, "file:///srv/assets/blank.png");

        // Cleanup
        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = SupzConfig {
            placeholder_image: "builtin://other".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SupzConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
