//! Download state tracking.

use std::path::{Path, PathBuf};

/// Per-user download state.
#[derive(Debug, Default)]
pub struct DownloadState {
    // User info
    pub username: Option<String>,
    pub user_id: Option<String>,

    // Paths
    pub base_path: Option<PathBuf>,

    // Statistics
    pub total_bytes: u64,
    pub file_count: u64,
    pub skipped_count: u64,

    /// Whether the run stopped at previously downloaded content.
    pub stopped_early: bool,
}

impl DownloadState {
    /// Create a new download state for a user.
    pub fn new(username: String, user_id: String) -> Self {
        Self {
            username: Some(username),
            user_id: Some(user_id),
            ..Default::default()
        }
    }

    /// Get the user ID or return an error.
    pub fn user_id(&self) -> crate::error::Result<&str> {
        self.user_id
            .as_deref()
            .ok_or_else(|| crate::error::Error::Api("User ID not set".into()))
    }

    /// Get the download directory or return an error.
    pub fn base_path(&self) -> crate::error::Result<&Path> {
        self.base_path
            .as_deref()
            .ok_or_else(|| crate::error::Error::Api("Download path not set".into()))
    }

    /// Record a completed file download.
    pub fn add_download(&mut self, bytes: u64) {
        self.total_bytes += bytes;
        self.file_count += 1;
    }

    /// Record a skipped duplicate.
    pub fn increment_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Total downloaded size in megabytes.
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Global statistics across all users.
#[derive(Debug, Default)]
pub struct GlobalState {
    pub total_bytes: u64,
    pub file_count: u64,
    pub skipped_count: u64,
    pub users_processed: u64,
    pub users_failed: u64,
}

impl GlobalState {
    /// Add statistics from a user's download state.
    pub fn add_user_stats(&mut self, state: &DownloadState) {
        self.total_bytes += state.total_bytes;
        self.file_count += state.file_count;
        self.skipped_count += state.skipped_count;
        self.users_processed += 1;
    }

    /// Mark a user as failed.
    pub fn mark_user_failed(&mut self) {
        self.users_failed += 1;
    }

    /// Total downloaded size in megabytes.
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}
