use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, MutationDto},
        passenger::PassengerDto,
    },
    server::{
        controller::util::path::RecordId,
        error::Error,
        model::app::AppState,
        service::{passenger::PassengerService, resource::payload::Payload},
    },
};

/// OpenAPI tag grouping the passenger endpoints
pub static PASSENGER_TAG: &str = "passenger";

/// List every passenger ordered by ID
#[utoipa::path(
    get,
    path = "/api/passengers",
    tag = PASSENGER_TAG,
    responses(
        (status = 200, description = "All passengers", body = Vec<PassengerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_passengers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    let passengers = passenger_service.list().await?;

    Ok((StatusCode::OK, Json(passengers)))
}

/// Get a single passenger
#[utoipa::path(
    get,
    path = "/api/passengers/{id}",
    tag = PASSENGER_TAG,
    params(("id" = i32, Path, description = "Passenger ID")),
    responses(
        (status = 200, description = "The passenger", body = PassengerDto),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_passenger(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    let passenger = passenger_service.get(id).await?;

    Ok((StatusCode::OK, Json(passenger)))
}

/// Create a passenger
///
/// Requires `first_name`, `last_name`, `email`, `passport_number` and `date_of_birth`
/// (`YYYY-MM-DD`); `phone` is optional. Emails are unique across passengers.
#[utoipa::path(
    post,
    path = "/api/passengers",
    tag = PASSENGER_TAG,
    request_body(content = Object, description = "Passenger fields"),
    responses(
        (status = 201, description = "Passenger created", body = MutationDto),
        (status = 400, description = "Missing or invalid fields, or body is not a JSON object", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_passenger(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    let passenger = passenger_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(MutationDto::created(passenger.id))))
}

/// Update any subset of a passenger's fields
#[utoipa::path(
    method(put, patch),
    path = "/api/passengers/{id}",
    tag = PASSENGER_TAG,
    params(("id" = i32, Path, description = "Passenger ID")),
    request_body(content = Object, description = "Fields to change"),
    responses(
        (status = 200, description = "Passenger updated", body = MutationDto),
        (status = 400, description = "Invalid field value, or body is not a JSON object", body = ErrorDto),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_passenger(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    payload: Payload,
) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    let passenger = passenger_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(MutationDto::updated(passenger.id))))
}

/// Delete a passenger who has no bookings or tickets
#[utoipa::path(
    delete,
    path = "/api/passengers/{id}",
    tag = PASSENGER_TAG,
    params(("id" = i32, Path, description = "Passenger ID")),
    responses(
        (status = 200, description = "Passenger deleted", body = DeletedDto),
        (status = 400, description = "Passenger is referenced by bookings or tickets", body = ErrorDto),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_passenger(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    passenger_service.delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto::default())))
}
