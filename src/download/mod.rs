//! Download module for content downloading.
//!
//! This module provides:
//! - Download state tracking
//! - Timeline walking
//! - Media file downloading

pub mod media;
pub mod state;
pub mod timeline;

pub use media::{download_media_batch, BatchOutcome};
pub use state::{DownloadState, GlobalState};
pub use timeline::download_user_media;
