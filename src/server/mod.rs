//! Server application core modules.
//!
//! This module contains all server-side functionality for the Airdesk reservation API:
//! HTTP routing and OpenAPI documentation, the generic resource update protocol shared by
//! passengers, countries, bookings and tickets, and the database access layer beneath it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Environment configuration
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
/// Database connection and migrations
pub mod startup;
pub mod util;
