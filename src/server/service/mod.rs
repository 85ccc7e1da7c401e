//! Service layer for business logic.
//!
//! The resource update protocol lives in [`resource`]; the remaining modules declare each
//! resource's writable fields and projection and bind them to their repository.

/// Booking fields and projection
pub mod booking;
/// Country fields and projection
pub mod country;
/// Passenger fields and projection
pub mod passenger;
pub mod resource;
/// Ticket fields, projection and the denormalized listing
pub mod ticket;
