//! Data transfer objects shared by the HTTP API and its consumers.

pub mod api;
pub mod booking;
pub mod country;
pub mod passenger;
pub mod ticket;
