//! Configuration structures and loading logic.

use crate::config::size::ImageSize;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub targeted_user: UserConfig,

    #[serde(default)]
    pub my_account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// User targeting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// List of usernames to download from.
    #[serde(default)]
    pub usernames: Vec<String>,
}

/// Account credentials configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Twitter API bearer token.
    #[serde(default)]
    pub bearer_token: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory downloads are placed under.
    #[serde(default = "default_download_directory")]
    pub download_directory: PathBuf,

    /// Skip individual duplicates instead of stopping at the first one.
    #[serde(default)]
    pub complete: bool,

    /// Image size variant to request.
    #[serde(default)]
    pub image_size: ImageSize,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to log skipped duplicates.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: default_download_directory(),
            complete: false,
            image_size: ImageSize::default(),
            show_downloads: true,
            show_skipped_downloads: true,
        }
    }
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("artists")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.targeted_user.usernames.is_empty());
        assert_eq!(config.options.download_directory, PathBuf::from("artists"));
        assert!(!config.options.complete);
        assert_eq!(config.options.image_size, ImageSize::Large);
        assert!(config.options.show_downloads);
    }

    #[test]
    fn test_load_full_config() {
        let toml = r#"
            [targeted_user]
            usernames = ["alice", "bob"]

            [my_account]
            bearer_token = "AAAA"

            [options]
            download_directory = "/tmp/media"
            complete = true
            image_size = "orig"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.targeted_user.usernames, vec!["alice", "bob"]);
        assert_eq!(config.my_account.bearer_token, "AAAA");
        assert_eq!(
            config.options.download_directory,
            PathBuf::from("/tmp/media")
        );
        assert!(config.options.complete);
        assert_eq!(config.options.image_size, ImageSize::Orig);
    }
}
