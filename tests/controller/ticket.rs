//! Tests for the ticket endpoints.

use airdesk::server::controller::{
    ticket::{
        create_ticket, delete_ticket, get_ticket, list_tickets, update_ticket,
    },
    util::path::RecordId,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use super::*;

/// Tests the joined ticket listing.
///
/// Expected: 200 with labels from the related records
#[tokio::test]
async fn list_joins_related_labels() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let (ticket, _, _, _, _) = test
        .reservation()
        .insert_mock_ticket_with_references("jane@example.com")
        .await?;

    let resp = list_tickets(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([{
            "id": ticket.id,
            "seat_number": "12A",
            "price": "199.99",
            "booking_ref": "ABC123",
            "flight_number": "AF1234",
            "passenger_name": "Jane Doe",
            "class": "Economy",
        }])
    );

    Ok(())
}

/// Tests getting a ticket as stored.
///
/// Expected: 200 with the reference IDs
#[tokio::test]
async fn get_returns_reference_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let (ticket, booking, passenger, flight, travel_class) = test
        .reservation()
        .insert_mock_ticket_with_references("jane@example.com")
        .await?;

    let resp = get_ticket(State(test.into_app_state()), RecordId(ticket.id))
        .await
        .into_response();

    assert_eq!(
        body_json(resp).await,
        json!({
            "id": ticket.id,
            "seat_number": "12A",
            "price": "199.99",
            "booking_id": booking.id,
            "flight_id": flight.id,
            "passenger_id": passenger.id,
            "travel_class_id": travel_class.id,
        })
    );

    Ok(())
}

/// Tests creating a ticket whose travel class does not exist.
///
/// Expected: 404 for the travel class
#[tokio::test]
async fn create_with_unknown_travel_class_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_flight("AF1234")
        .build()
        .await?;
    let passenger = test
        .reservation()
        .insert_mock_passenger("jane@example.com")
        .await?;
    let booking = test
        .reservation()
        .insert_mock_booking(passenger.id, "ABC123")
        .await?;

    let resp = create_ticket(
        State(test.into_app_state()),
        payload(factory::ticket_payload(booking.id, 1, passenger.id, 9)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Travel class not found" })
    );

    Ok(())
}

/// Tests moving a ticket to a flight that does not exist.
///
/// Expected: 200, with the stored flight kept
#[tokio::test]
async fn update_with_unknown_flight_keeps_existing_flight() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let (ticket, _, _, flight, _) = test
        .reservation()
        .insert_mock_ticket_with_references("jane@example.com")
        .await?;

    let resp = update_ticket(
        State(test.into_app_state()),
        RecordId(ticket.id),
        payload(json!({ "flight_id": 999 })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "status": "Updated", "id": ticket.id })
    );

    let fetched = get_ticket(State(test.into_app_state()), RecordId(ticket.id))
        .await
        .into_response();
    assert_eq!(body_json(fetched).await["flight_id"], flight.id);

    Ok(())
}

/// Tests deleting a ticket.
///
/// Expected: 200, then 404 when getting it again
#[tokio::test]
async fn delete_then_get_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let (ticket, _, _, _, _) = test
        .reservation()
        .insert_mock_ticket_with_references("jane@example.com")
        .await?;

    let resp = delete_ticket(State(test.into_app_state()), RecordId(ticket.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched = get_ticket(State(test.into_app_state()), RecordId(ticket.id))
        .await
        .into_response();
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(fetched).await, json!({ "error": "Ticket not found" }));

    Ok(())
}
