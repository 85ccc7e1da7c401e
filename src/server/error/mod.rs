//! Error types for the Airdesk server application.
//!
//! Domain specific errors live in their own modules: configuration problems found at
//! startup and client errors raised by the resource update protocol. All of them implement
//! `IntoResponse` so handlers can propagate them with `?`.

/// Configuration errors
pub mod config;
/// Resource protocol errors
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError},
};

/// Main error type for the Airdesk server application.
///
/// Aggregates domain errors and external library errors so the `?` operator converts them
/// automatically. The `IntoResponse` implementation maps client errors to their own status
/// codes and everything else to a logged 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Client error raised by the resource update protocol.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Internal error indicating a bug in Airdesk's code or inconsistent stored data.
    #[error("Internal error with Airdesk's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 / 404 / 409 - For resource protocol errors, with their message as the body
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client so implementation details do not leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
