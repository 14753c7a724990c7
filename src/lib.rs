//! Twitter Downloader - image archiver for Twitter timelines
//!
//! This library provides functionality for downloading the images attached
//! to a Twitter user's tweets.
//!
//! # Features
//!
//! - Username resolution via the v2 users-by-usernames lookup
//! - Cursor-based timeline pagination, newest to oldest
//! - Incremental downloads that stop at the first already-downloaded file
//! - Complete mode that re-walks all pages and skips duplicates individually
//! - Selectable image size variants (large, medium, small, orig, thumb)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use twitter_downloader::{Config, TwitterApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = TwitterApi::new(config.my_account.bearer_token.clone())?;
//!
//!     let user = api.resolve_user("alice").await?;
//!     println!("{} resolved to id {}", user.username, user.id);
//!
//!     // ... download logic
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{Timeline, TwitterApi};
pub use config::{Config, ImageSize};
pub use download::{
    download_media_batch, download_user_media, BatchOutcome, DownloadState, GlobalState,
};
pub use error::{Error, Result};
