//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures outside the data layer do not need to reach
//! into the generated `entity` crate directly.

/// Type alias for the passenger database model.
///
/// # Fields (from `entity::passenger::Model`)
/// - `id` - Primary key
/// - `first_name` / `last_name` - Passenger name
/// - `email` - Unique contact email
/// - `phone` - Optional phone number
/// - `passport_number` - Travel document number
/// - `date_of_birth` - Calendar date of birth
pub type PassengerModel = entity::passenger::Model;

/// Type alias for the booking database model.
///
/// # Fields (from `entity::booking::Model`)
/// - `id` - Primary key
/// - `booking_reference` - Human readable booking reference
/// - `status` - Booking status, `Pending` unless supplied
/// - `total_amount` - Monetary total with two fractional digits
/// - `booking_date` - Timestamp the booking was made
/// - `booker_id` - Foreign key to the passenger who made the booking
pub type BookingModel = entity::booking::Model;

/// Type alias for the ticket database model.
///
/// # Fields (from `entity::ticket::Model`)
/// - `id` - Primary key
/// - `seat_number` - Optional assigned seat
/// - `price` - Monetary price with two fractional digits
/// - `booking_id` - Foreign key to the booking
/// - `flight_id` - Foreign key to the flight
/// - `passenger_id` - Foreign key to the travelling passenger
/// - `travel_class_id` - Foreign key to the travel class
pub type TicketModel = entity::ticket::Model;

/// Type alias for the flight reference model.
pub type FlightModel = entity::flight::Model;

/// Type alias for the travel class reference model.
pub type TravelClassModel = entity::travel_class::Model;

/// A ticket together with every record it references.
///
/// Produced by the ticket listing query, which loads related records in batches rather
/// than one query per ticket.
#[derive(Clone, Debug)]
pub struct TicketWithReferences {
    /// The ticket itself
    pub ticket: TicketModel,
    /// Booking the ticket belongs to
    pub booking: Option<BookingModel>,
    /// Flight the ticket is for
    pub flight: Option<FlightModel>,
    /// Travelling passenger
    pub passenger: Option<PassengerModel>,
    /// Travel class of the seat
    pub travel_class: Option<TravelClassModel>,
}
