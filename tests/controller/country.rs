//! Tests for the country endpoints.

use airdesk::server::controller::{
    country::{
        create_country, delete_country, get_country, list_countries, update_country,
    },
    util::path::RecordId,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use super::*;

/// Tests creating and reading back a country.
///
/// Expected: 201 with ID 1, then 200 with the stored name and code
#[tokio::test]
async fn create_then_get_returns_same_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let created = create_country(
        State(test.into_app_state()),
        payload(factory::country_payload("France", "FR")),
    )
    .await
    .into_response();
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(created).await,
        json!({ "status": "Created", "id": 1 })
    );

    let fetched = get_country(State(test.into_app_state()), RecordId(1))
        .await
        .into_response();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(
        body_json(fetched).await,
        json!({ "id": 1, "name": "France", "code": "FR" })
    );

    Ok(())
}

/// Tests that a country update echoes the stored name and code.
///
/// Expected: 200 with the new name and the unchanged code
#[tokio::test]
async fn update_echoes_name_and_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_country("Frnace", "FR")
        .build()
        .await?;

    let resp = update_country(
        State(test.into_app_state()),
        RecordId(1),
        payload(json!({ "name": "France" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "status": "Updated", "id": 1, "name": "France", "code": "FR" })
    );

    Ok(())
}

/// Tests an update with an empty payload.
///
/// Expected: 200 with every field unchanged
#[tokio::test]
async fn empty_update_changes_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_country("France", "FR")
        .build()
        .await?;

    let resp = update_country(State(test.into_app_state()), RecordId(1), payload(json!({})))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "status": "Updated", "id": 1, "name": "France", "code": "FR" })
    );

    Ok(())
}

/// Tests updating a country that does not exist.
///
/// Expected: 404 with the not found message
#[tokio::test]
async fn update_unknown_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let resp = update_country(
        State(test.into_app_state()),
        RecordId(3),
        payload(json!({ "name": "France" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Country not found" }));

    Ok(())
}

/// Tests deleting a country referenced by an airport.
///
/// Expected: 400 with the integrity message and the country still listed
#[tokio::test]
async fn delete_country_with_airport_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_country("France", "FR")
        .build()
        .await?;
    test.reference().insert_mock_airport(1).await?;

    let resp = delete_country(State(test.into_app_state()), RecordId(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Cannot delete country because it is linked to other data" })
    );

    let listed = list_countries(State(test.into_app_state()))
        .await
        .into_response();
    assert_eq!(
        body_json(listed).await,
        json!([{ "id": 1, "name": "France", "code": "FR" }])
    );

    Ok(())
}

/// Tests deleting an unreferenced country.
///
/// Expected: 200 and the country no longer listed
#[tokio::test]
async fn delete_unreferenced_country_removes_it() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_country("France", "FR")
        .with_mock_country("Japan", "JP")
        .build()
        .await?;

    let resp = delete_country(State(test.into_app_state()), RecordId(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "Deleted" }));

    let listed = list_countries(State(test.into_app_state()))
        .await
        .into_response();
    assert_eq!(
        body_json(listed).await,
        json!([{ "id": 2, "name": "Japan", "code": "JP" }])
    );

    Ok(())
}
