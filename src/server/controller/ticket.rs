use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, MutationDto},
        ticket::{TicketDto, TicketSummaryDto},
    },
    server::{
        controller::util::path::RecordId,
        error::Error,
        model::app::AppState,
        service::{resource::payload::Payload, ticket::TicketService},
    },
};

/// OpenAPI tag grouping the ticket endpoints
pub static TICKET_TAG: &str = "ticket";

/// List every ticket with its booking reference, flight number, passenger name and class
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "All tickets", body = Vec<TicketSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tickets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(&state.db);

    let tickets = ticket_service.list_summaries().await?;

    Ok((StatusCode::OK, Json(tickets)))
}

/// Get a single ticket as stored
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "The ticket", body = TicketDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(&state.db);

    let ticket = ticket_service.get(id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Create a ticket
///
/// Requires `booking_id`, `flight_id`, `passenger_id`, `travel_class_id` and `price`; every
/// referenced record must exist. `seat_number` is optional.
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = TICKET_TAG,
    request_body(content = Object, description = "Ticket fields"),
    responses(
        (status = 201, description = "Ticket created", body = MutationDto),
        (status = 400, description = "Missing or invalid fields, or body is not a JSON object", body = ErrorDto),
        (status = 404, description = "A referenced record was not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(&state.db);

    let ticket = ticket_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(MutationDto::created(ticket.id))))
}

/// Update any subset of a ticket's fields
///
/// References to records that do not exist are ignored and the stored reference is kept.
#[utoipa::path(
    method(put, patch),
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body(content = Object, description = "Fields to change"),
    responses(
        (status = 200, description = "Ticket updated", body = MutationDto),
        (status = 400, description = "Invalid field value, or body is not a JSON object", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    payload: Payload,
) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(&state.db);

    let ticket = ticket_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(MutationDto::updated(ticket.id))))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket deleted", body = DeletedDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(&state.db);

    ticket_service.delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto::default())))
}
