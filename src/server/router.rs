//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every resource endpoint with its OpenAPI specification via
//! utoipa and serves Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// For each of `passengers`, `countries`, `bookings` and `tickets`:
/// - `GET /api/<resource>` - List records
/// - `POST /api/<resource>` - Create a record
/// - `GET /api/<resource>/{id}` - Get a record
/// - `PUT | PATCH /api/<resource>/{id}` - Update a record
/// - `DELETE /api/<resource>/{id}` - Delete a record
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Airdesk", description = "Airdesk reservation API"), tags(
        (name = controller::passenger::PASSENGER_TAG, description = "Passenger API routes"),
        (name = controller::country::COUNTRY_TAG, description = "Country API routes"),
        (name = controller::booking::BOOKING_TAG, description = "Booking API routes"),
        (name = controller::ticket::TICKET_TAG, description = "Ticket API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::passenger::list_passengers,
            controller::passenger::create_passenger
        ))
        .routes(routes!(
            controller::passenger::get_passenger,
            controller::passenger::update_passenger,
            controller::passenger::delete_passenger
        ))
        .routes(routes!(
            controller::country::list_countries,
            controller::country::create_country
        ))
        .routes(routes!(
            controller::country::get_country,
            controller::country::update_country,
            controller::country::delete_country
        ))
        .routes(routes!(
            controller::booking::list_bookings,
            controller::booking::create_booking
        ))
        .routes(routes!(
            controller::booking::get_booking,
            controller::booking::update_booking,
            controller::booking::delete_booking
        ))
        .routes(routes!(
            controller::ticket::list_tickets,
            controller::ticket::create_ticket
        ))
        .routes(routes!(
            controller::ticket::get_ticket,
            controller::ticket::update_ticket,
            controller::ticket::delete_ticket
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
