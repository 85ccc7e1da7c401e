use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, MutationDto},
        booking::BookingDto,
    },
    server::{
        controller::util::path::RecordId,
        error::Error,
        model::app::AppState,
        service::{booking::BookingService, resource::payload::Payload},
    },
};

/// OpenAPI tag grouping the booking endpoints
pub static BOOKING_TAG: &str = "booking";

/// List every booking ordered by ID
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "All bookings", body = Vec<BookingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bookings(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.db);

    let bookings = booking_service.list().await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Get a single booking
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.db);

    let booking = booking_service.get(id).await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Create a booking
///
/// Requires `booker_id`, `booking_reference` and `total_amount`. `status` defaults to
/// `Pending` and `booking_date` to the current time.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body(content = Object, description = "Booking fields"),
    responses(
        (status = 201, description = "Booking created", body = MutationDto),
        (status = 400, description = "Missing or invalid fields, or body is not a JSON object", body = ErrorDto),
        (status = 404, description = "Booker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.db);

    let booking = booking_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(MutationDto::created(booking.id))))
}

/// Update any subset of a booking's fields
#[utoipa::path(
    method(put, patch),
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body(content = Object, description = "Fields to change"),
    responses(
        (status = 200, description = "Booking updated", body = MutationDto),
        (status = 400, description = "Invalid field value, or body is not a JSON object", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    payload: Payload,
) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.db);

    let booking = booking_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(MutationDto::updated(booking.id))))
}

/// Delete a booking that has no tickets
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = DeletedDto),
        (status = 400, description = "Booking is referenced by tickets", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.db);

    booking_service.delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto::default())))
}
