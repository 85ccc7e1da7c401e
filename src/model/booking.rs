use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A booking record
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BookingDto {
    pub id: i32,
    pub booking_reference: String,
    pub status: String,
    /// Decimal amount rendered with two fractional digits, e.g. `250.00`
    pub total_amount: String,
    /// Formatted as `YYYY-MM-DD HH:MM:SS`
    pub booking_date: String,
    /// Passenger who made the booking
    pub booker_id: i32,
}
