use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, MutationDto},
        country::{CountryDto, CountryUpdatedDto},
    },
    server::{
        controller::util::path::RecordId,
        data::country::CountryRepository,
        error::Error,
        model::app::AppState,
        service::{
            country::CountryService,
            resource::{payload::Payload, Resource},
        },
    },
};

/// OpenAPI tag grouping the country endpoints
pub static COUNTRY_TAG: &str = "country";

/// List every country ordered by ID
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "All countries", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_countries(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let countries = country_service.list().await?;

    Ok((StatusCode::OK, Json(countries)))
}

/// Get a single country
#[utoipa::path(
    get,
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "The country", body = CountryDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let country = country_service.get(id).await?;

    Ok((StatusCode::OK, Json(country)))
}

/// Create a country from its `name` and `code`
#[utoipa::path(
    post,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    request_body(content = Object, description = "Country fields"),
    responses(
        (status = 201, description = "Country created", body = MutationDto),
        (status = 400, description = "Missing fields, or body is not a JSON object", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let country = country_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(MutationDto::created(country.id))))
}

/// Update a country's name or code
///
/// The response echoes the stored name and code after the update.
#[utoipa::path(
    method(put, patch),
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    request_body(content = Object, description = "Fields to change"),
    responses(
        (status = 200, description = "Country updated", body = CountryUpdatedDto),
        (status = 400, description = "Body is not a JSON object", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    payload: Payload,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    let country = country_service.update(id, &payload).await?;

    Ok((
        StatusCode::OK,
        Json(CountryUpdatedDto::from(CountryRepository::to_dto(country))),
    ))
}

/// Delete a country that has no airports
#[utoipa::path(
    delete,
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Country deleted", body = DeletedDto),
        (status = 400, description = "Country is referenced by airports", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, Error> {
    let country_service = CountryService::new(&state.db);

    country_service.delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto::default())))
}
