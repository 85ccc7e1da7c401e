use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A ticket record as stored
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TicketDto {
    pub id: i32,
    pub seat_number: Option<String>,
    /// Decimal amount rendered with two fractional digits, e.g. `199.99`
    pub price: String,
    pub booking_id: i32,
    pub flight_id: i32,
    pub passenger_id: i32,
    pub travel_class_id: i32,
}

/// A ticket joined with its booking, flight, passenger and travel class for listing
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TicketSummaryDto {
    pub id: i32,
    pub seat_number: Option<String>,
    pub price: String,
    /// Reference of the booking the ticket belongs to
    pub booking_ref: String,
    pub flight_number: String,
    /// Passenger first and last name separated by a space
    pub passenger_name: String,
    /// Travel class name
    #[serde(rename = "class")]
    pub travel_class: String,
}
