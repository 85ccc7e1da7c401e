//! Shared helpers for HTTP handlers.

/// Record ID path extractor
pub mod path;
/// JSON object body extractor
pub mod payload;
