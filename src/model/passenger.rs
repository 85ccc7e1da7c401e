use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A passenger record
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PassengerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub passport_number: String,
    /// Formatted as `YYYY-MM-DD`
    pub date_of_birth: String,
}
