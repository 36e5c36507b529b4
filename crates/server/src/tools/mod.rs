//! MCP tool implementations.
//!
//! This module contains all tools exposed by the linkhub server.

pub mod url_batch_normalize;
pub mod url_hash_check;
pub mod url_normalize;

pub use url_batch_normalize::UrlBatchNormalizeParams;
pub use url_hash_check::UrlHashCheckParams;
pub use url_normalize::UrlNormalizeParams;
