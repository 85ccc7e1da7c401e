//! Test fixture modules for database records and request payloads.
//!
//! - `factory` - JSON request payloads for the resource endpoints
//! - `reference` - external reference data (countries, airports, flights, travel classes)
//! - `reservation` - passengers, bookings and tickets

pub mod factory;
pub mod reference;
pub mod reservation;
