//! Utility functions and helpers for server operations.
//!
//! Parsing and rendering of the calendar and monetary values accepted in request payloads
//! and returned in resource projections.

pub mod money;
pub mod time;
