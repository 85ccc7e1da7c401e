//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application
//! state handed to every handler, database model type aliases, and the resource kinds and
//! typed field values that flow between the resource protocol and the repositories.

/// Shared handler state
pub mod app;
pub mod db;
pub mod resource;
