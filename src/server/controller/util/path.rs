use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::{resource::ResourceError, Error};

/// Record ID taken from the `{id}` path segment.
///
/// Segments that are not an integer in the `i32` range are rejected with a JSON error
/// instead of axum's plain text rejection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Invalid record ID in path: {}", rejection);

                ResourceError::InvalidId
            })?;

        Ok(Self(id))
    }
}
