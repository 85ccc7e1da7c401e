use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::resource::ResourceKind};

/// Client errors raised by the resource update protocol.
///
/// The `Display` output of each variant is the exact message returned to the client in the
/// `error` field of the response body.
#[derive(Error, Debug, PartialEq)]
pub enum ResourceError {
    /// Request body was not a JSON object.
    #[error("Request body must be a JSON object")]
    MalformedBody,
    /// The `{id}` path segment is not a valid record ID.
    #[error("Invalid ID")]
    InvalidId,
    /// One or more required fields were absent, null or empty on create.
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// A present field could not be parsed as its declared type.
    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),
    /// The addressed record, or a record referenced by a create payload, does not exist.
    #[error("{kind} not found")]
    NotFound {
        /// Kind of the missing record
        kind: ResourceKind,
        /// ID that was looked up
        id: i32,
    },
    /// A unique field collides with an existing record.
    #[error("{kind} with this {field} already exists")]
    Conflict {
        /// Kind of the record being written
        kind: ResourceKind,
        /// The unique field that collides
        field: &'static str,
    },
    /// The record is still referenced by other records and cannot be deleted.
    #[error("Cannot delete {} because it is linked to other data", .kind.label())]
    Referenced {
        /// Kind of the record being deleted
        kind: ResourceKind,
        /// ID of the record being deleted
        id: i32,
    },
}

impl ResourceError {
    /// HTTP status returned for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody
            | Self::InvalidId
            | Self::MissingFields(_)
            | Self::InvalidField(_)
            | Self::Referenced { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { kind, id } | Self::Referenced { kind, id } => {
                tracing::debug!(kind = %kind, id = %id, "{}", self);
            }
            _ => tracing::debug!("{}", self),
        }

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
