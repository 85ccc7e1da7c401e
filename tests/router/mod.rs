//! Tests driving the full router with `tower::ServiceExt::oneshot`.
//!
//! Verifies route registration, method routing for updates, body extraction and the
//! OpenAPI document.

use airdesk::server::router::routes;
use airdesk_test_utils::prelude::*;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::{body_json, TestContextExt};

async fn app() -> Result<(TestContext, Router), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let router = routes().with_state(test.into_app_state());

    Ok((test, router))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Tests the create then get round trip over HTTP.
///
/// Expected: 201 with ID 1, then 200 with the stored country
#[tokio::test]
async fn creates_and_reads_country() -> Result<(), TestError> {
    let (_test, app) = app().await?;

    let created = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/countries",
            json!({ "name": "France", "code": "FR" }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(created).await,
        json!({ "status": "Created", "id": 1 })
    );

    let fetched = app
        .oneshot(empty_request(Method::GET, "/api/countries/1"))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(
        body_json(fetched).await,
        json!({ "id": 1, "name": "France", "code": "FR" })
    );

    Ok(())
}

/// Tests that both PUT and PATCH reach the update handler.
///
/// Expected: 200 for each, with the last change stored
#[tokio::test]
async fn routes_put_and_patch_to_update() -> Result<(), TestError> {
    let (test, app) = app().await?;
    test.reference().insert_mock_country("France", "FR").await?;

    let put = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/countries/1",
            json!({ "code": "FRA" }),
        ))
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::OK);

    let patch = app
        .oneshot(json_request(
            Method::PATCH,
            "/api/countries/1",
            json!({ "name": "République française" }),
        ))
        .await
        .unwrap();
    assert_eq!(patch.status(), StatusCode::OK);
    assert_eq!(
        body_json(patch).await,
        json!({ "status": "Updated", "id": 1, "name": "République française", "code": "FRA" })
    );

    Ok(())
}

/// Tests bodies that are not JSON objects.
///
/// Expected: 400 with the malformed body message, on create and on update
#[tokio::test]
async fn rejects_malformed_bodies() -> Result<(), TestError> {
    let (test, app) = app().await?;
    test.reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;

    let not_json = Request::builder()
        .method(Method::POST)
        .uri("/api/passengers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ first_name: Jane"))
        .unwrap();
    let array = json_request(Method::PATCH, "/api/passengers/1", json!(["Jane"]));

    for request in [not_json, array] {
        let resp = app.clone().oneshot(request).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Request body must be a JSON object" })
        );
    }

    Ok(())
}

/// Tests every collection route with an empty database.
///
/// Expected: 200 with an empty list for each resource
#[tokio::test]
async fn lists_are_empty_initially() -> Result<(), TestError> {
    let (_test, app) = app().await?;

    for uri in [
        "/api/passengers",
        "/api/countries",
        "/api/bookings",
        "/api/tickets",
    ] {
        let resp = app
            .clone()
            .oneshot(empty_request(Method::GET, uri))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        assert_eq!(body_json(resp).await, json!([]), "GET {uri}");
    }

    Ok(())
}

/// Tests that deleting an unknown record is reported per resource.
///
/// Expected: 404 with the resource's not found message
#[tokio::test]
async fn delete_unknown_is_not_found() -> Result<(), TestError> {
    let (_test, app) = app().await?;

    for (uri, message) in [
        ("/api/passengers/5", "Passenger not found"),
        ("/api/countries/5", "Country not found"),
        ("/api/bookings/5", "Booking not found"),
        ("/api/tickets/5", "Ticket not found"),
    ] {
        let resp = app
            .clone()
            .oneshot(empty_request(Method::DELETE, uri))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "DELETE {uri}");
        assert_eq!(body_json(resp).await, json!({ "error": message }));
    }

    Ok(())
}

/// Tests that a non-integer or out of range ID is rejected on every record route.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn rejects_invalid_record_ids() -> Result<(), TestError> {
    let (_test, app) = app().await?;

    for uri in ["/api/passengers/abc", "/api/tickets/99999999999"] {
        for request in [
            empty_request(Method::GET, uri),
            empty_request(Method::DELETE, uri),
            json_request(Method::PATCH, uri, json!({ "phone": "555" })),
        ] {
            let method = request.method().clone();
            let resp = app.clone().oneshot(request).await.unwrap();

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
            assert_eq!(body_json(resp).await, json!({ "error": "Invalid ID" }));
        }
    }

    Ok(())
}

/// Tests the generated OpenAPI document.
///
/// Expected: 200 with every resource path documented
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let (_test, app) = app().await?;

    let resp = app
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let document = body_json(resp).await;
    for path in [
        "/api/passengers",
        "/api/passengers/{id}",
        "/api/countries",
        "/api/countries/{id}",
        "/api/bookings",
        "/api/bookings/{id}",
        "/api/tickets",
        "/api/tickets/{id}",
    ] {
        assert!(
            document["paths"].get(path).is_some(),
            "{path} missing from OpenAPI document"
        );
    }
    assert!(document["paths"]["/api/tickets/{id}"].get("patch").is_some());

    Ok(())
}
