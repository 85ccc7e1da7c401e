use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Acknowledgement returned after a record was created or updated
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MutationDto {
    /// `Created` or `Updated`
    pub status: String,
    /// Identifier of the affected record
    pub id: i32,
}

impl MutationDto {
    pub fn created(id: i32) -> Self {
        Self {
            status: "Created".to_string(),
            id,
        }
    }

    pub fn updated(id: i32) -> Self {
        Self {
            status: "Updated".to_string(),
            id,
        }
    }
}

/// Acknowledgement returned after a record was deleted
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeletedDto {
    /// Always `Deleted`
    pub status: String,
}

impl Default for DeletedDto {
    fn default() -> Self {
        Self {
            status: "Deleted".to_string(),
        }
    }
}
