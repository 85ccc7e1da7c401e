//! Tests for the passenger endpoints.

use airdesk::server::controller::{
    passenger::{
        create_passenger, delete_passenger, get_passenger, list_passengers, update_passenger,
    },
    util::path::RecordId,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use super::*;

/// Tests creating a passenger.
///
/// Expected: 201 with the Created envelope
#[tokio::test]
async fn create_returns_created_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = create_passenger(
        State(test.into_app_state()),
        payload(factory::passenger_payload("jane@example.com")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await, json!({ "status": "Created", "id": 1 }));

    Ok(())
}

/// Tests creating a passenger with an email already in use.
///
/// Expected: 409 with the conflict message
#[tokio::test]
async fn create_with_duplicate_email_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    test.reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;

    let result = create_passenger(
        State(test.into_app_state()),
        payload(factory::passenger_payload("jane@example.com")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Passenger with this email already exists" })
    );

    Ok(())
}

/// Tests creating a passenger with missing fields.
///
/// Expected: 400 listing the missing fields
#[tokio::test]
async fn create_with_missing_fields_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = create_passenger(
        State(test.into_app_state()),
        payload(json!({ "first_name": "Jane", "last_name": "Doe", "email": "jane@example.com" })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Missing required field(s): passport_number, date_of_birth" })
    );

    Ok(())
}

/// Tests getting a stored passenger.
///
/// Expected: 200 with the passenger projection
#[tokio::test]
async fn get_returns_projection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let passenger = test
        .reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;

    let result = get_passenger(State(test.into_app_state()), RecordId(passenger.id)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "id": passenger.id,
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@example.com",
            "phone": null,
            "passport_number": "X1234567",
            "date_of_birth": "1990-04-12",
        })
    );

    Ok(())
}

/// Tests getting a passenger that does not exist.
///
/// Expected: 404 with the not found message
#[tokio::test]
async fn get_unknown_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let result = get_passenger(State(test.into_app_state()), RecordId(12)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Passenger not found" }));

    Ok(())
}

/// Tests listing passengers.
///
/// Expected: 200 with every passenger
#[tokio::test]
async fn list_returns_all_passengers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    test.reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;
    test.reservation()
        .insert_mock_passenger("john@example.com")
        .await?;

    let result = list_passengers(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let emails: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["email"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(emails, vec!["jane@example.com", "john@example.com"]);

    Ok(())
}

/// Tests updating a passenger with an unparseable date.
///
/// Expected: 400 naming the invalid field
#[tokio::test]
async fn update_with_invalid_date_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let passenger = test
        .reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;

    let result = update_passenger(
        State(test.into_app_state()),
        RecordId(passenger.id),
        payload(json!({ "date_of_birth": "31/12/1990" })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Invalid value for field: date_of_birth" })
    );

    Ok(())
}

/// Tests updating a passenger.
///
/// Expected: 200 with the Updated envelope
#[tokio::test]
async fn update_returns_updated_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let passenger = test
        .reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;

    let result = update_passenger(
        State(test.into_app_state()),
        RecordId(passenger.id),
        payload(json!({ "last_name": "Smith" })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "status": "Updated", "id": passenger.id })
    );

    Ok(())
}

/// Tests deleting a passenger who made a booking.
///
/// Expected: 400 with the integrity message
#[tokio::test]
async fn delete_referenced_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let passenger = test
        .reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;
    test.reservation()
        .insert_mock_booking(passenger.id, "ABC123")
        .await?;

    let result = delete_passenger(State(test.into_app_state()), RecordId(passenger.id)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Cannot delete passenger because it is linked to other data" })
    );

    Ok(())
}

/// Tests deleting an unreferenced passenger.
///
/// Expected: 200 with the Deleted envelope
#[tokio::test]
async fn delete_returns_deleted_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let passenger = test
        .reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;

    let result = delete_passenger(State(test.into_app_state()), RecordId(passenger.id)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "Deleted" }));

    Ok(())
}
