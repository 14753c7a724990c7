//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename derivation from media URLs

pub mod naming;
pub mod paths;

pub use naming::{filename_from_url, sanitize_filename};
pub use paths::{ensure_dir, get_user_folder};
