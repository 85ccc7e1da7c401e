//! Tests for the booking endpoints.

use airdesk::server::controller::{
    booking::{
        create_booking, get_booking, list_bookings, update_booking,
    },
    util::path::RecordId,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use super::*;

/// Tests creating a booking with only its required fields.
///
/// Expected: 201, then a projection with the Pending status and formatted amount
#[tokio::test]
async fn create_applies_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let passenger = test
        .reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;

    let created = create_booking(
        State(test.into_app_state()),
        payload(factory::booking_payload(passenger.id)),
    )
    .await
    .into_response();
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_json(created).await["id"].as_i64().unwrap() as i32;

    let fetched = get_booking(State(test.into_app_state()), RecordId(id))
        .await
        .into_response();
    let body = body_json(fetched).await;

    assert_eq!(body["booking_reference"], "ABC123");
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["total_amount"], "250.00");
    assert_eq!(body["booker_id"], passenger.id);
    assert_eq!(body["booking_date"].as_str().unwrap().len(), 19);

    Ok(())
}

/// Tests creating a booking for a passenger that does not exist.
///
/// Expected: 404 for the passenger and no booking stored
#[tokio::test]
async fn create_with_unknown_booker_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let resp = create_booking(
        State(test.into_app_state()),
        payload(factory::booking_payload(404)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Passenger not found" }));

    let listed = list_bookings(State(test.into_app_state()))
        .await
        .into_response();
    assert_eq!(body_json(listed).await, json!([]));

    Ok(())
}

/// Tests updating only a booking's status.
///
/// Expected: 200 with the status changed and every other field unchanged
#[tokio::test]
async fn update_status_changes_only_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let passenger = test
        .reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;
    let booking = test
        .reservation()
        .insert_mock_booking(passenger.id, "ABC123")
        .await?;

    let before = body_json(
        get_booking(State(test.into_app_state()), RecordId(booking.id))
            .await
            .into_response(),
    )
    .await;

    let resp = update_booking(
        State(test.into_app_state()),
        RecordId(booking.id),
        payload(json!({ "status": "Cancelled" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let mut after = body_json(
        get_booking(State(test.into_app_state()), RecordId(booking.id))
            .await
            .into_response(),
    )
    .await;

    assert_eq!(after["status"], "Cancelled");
    after["status"] = before["status"].clone();
    assert_eq!(after, before);

    Ok(())
}
