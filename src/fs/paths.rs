//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Get the directory a user's downloads are placed in.
pub fn get_user_folder(config: &Config, username: &str) -> PathBuf {
    config.options.download_directory.join(username)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
