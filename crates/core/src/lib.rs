//! Core types and shared functionality for linkhub.
//!
//! This crate provides:
//! - URL canonicalization and the dedup hash of the canonical form
//! - Content type detection for saved links
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod content_type;
pub mod error;
pub mod hash;
pub mod normalize;

pub use config::{AppConfig, ConfigError};
pub use content_type::{ContentType, detect_content_type};
pub use error::Error;
pub use hash::{is_url_hash, url_hash};
pub use normalize::{NormalizeError, NormalizedUrl, normalize_url, normalize_url_opt};
