use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A country record
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    pub code: String,
}

/// Country update acknowledgement, echoing the stored name and code
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CountryUpdatedDto {
    pub status: String,
    pub id: i32,
    pub name: String,
    pub code: String,
}

impl From<CountryDto> for CountryUpdatedDto {
    fn from(country: CountryDto) -> Self {
        Self {
            status: "Updated".to_string(),
            id: country.id,
            name: country.name,
            code: country.code,
        }
    }
}
