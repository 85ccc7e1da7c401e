//! HTTP controller endpoints for the Airdesk web API.
//!
//! Each resource exposes the same five routes under `/api/<resource>`: list and create on
//! the collection, get, update (`PUT` or `PATCH`) and delete on `/{id}`. Handlers parse the
//! request, delegate to the resource service and shape the JSON response; all validation
//! lives in the service.

/// `/api/bookings` endpoints
pub mod booking;
/// `/api/countries` endpoints
pub mod country;
/// `/api/passengers` endpoints
pub mod passenger;
/// `/api/tickets` endpoints
pub mod ticket;
pub mod util;
