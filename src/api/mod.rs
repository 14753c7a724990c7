//! Twitter API module.
//!
//! This module provides:
//! - HTTP client for the Twitter v2 REST API
//! - Cursor-based timeline pagination
//! - API response types

pub mod client;
pub mod pagination;
pub mod types;

pub use client::{TwitterApi, PAGE_SIZE};
pub use pagination::Timeline;
pub use types::*;
