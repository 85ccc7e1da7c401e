use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::server::{
    error::{resource::ResourceError, Error},
    service::resource::payload::Payload,
};

/// Extracts the request body as a JSON object.
///
/// The body is parsed regardless of the `Content-Type` header. Bodies that cannot be read,
/// are not valid JSON, or are valid JSON but not an object are rejected as malformed.
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Failed to read request body: {}", rejection);

            ResourceError::MalformedBody
        })?;

        let value: Value = serde_json::from_slice(&body).map_err(|err| {
            tracing::debug!("Request body is not valid JSON: {}", err);

            ResourceError::MalformedBody
        })?;

        Ok(Payload::try_from(value)?)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::FromRequest,
        http::{header, Request},
    };
    use serde_json::json;

    use crate::server::{
        error::{resource::ResourceError, Error},
        service::resource::payload::Payload,
    };

    fn request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/passengers")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    /// Tests extracting a JSON object body
    async fn extracts_json_object() {
        let payload = Payload::from_request(request(r#"{"name":"France"}"#), &())
            .await
            .unwrap();

        assert_eq!(payload.get("name"), Some(&json!("France")));
    }

    #[tokio::test]
    /// Tests that the body is parsed without a content type header
    async fn ignores_missing_content_type() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/countries")
            .body(Body::from(r#"{"code":"FR"}"#))
            .unwrap();

        let payload = Payload::from_request(req, &()).await.unwrap();

        assert_eq!(payload.get("code"), Some(&json!("FR")));
    }

    #[tokio::test]
    /// Tests rejection of bodies that are not JSON objects
    ///
    /// 400 bad request
    async fn rejects_non_object_bodies() {
        for body in ["", "not json", "[1,2,3]", "42", "null", r#""text""#] {
            let result = Payload::from_request(request(body), &()).await;

            assert!(
                matches!(result, Err(Error::ResourceError(ResourceError::MalformedBody))),
                "body {body:?} should be rejected"
            );
        }
    }
}
