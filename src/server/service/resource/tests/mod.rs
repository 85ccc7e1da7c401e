//! Tests for the resource update protocol.
//!
//! Each operation has its own module. Tests run against every resource kind through the
//! same engine, using an in-memory SQLite database with foreign keys enforced.


use airdesk_test_utils::prelude::*;
use serde_json::Value;

use crate::server::{
    error::{resource::ResourceError, Error},
    model::resource::ResourceKind,
    service::{
        booking::BookingService, country::CountryService, passenger::PassengerService,
        resource::payload::Payload, ticket::TicketService,
    },
};

fn payload(value: Value) -> Payload {
    Payload::from(factory::as_object(value))
}

/// Unwraps the protocol error of a failed operation, panicking on success or other errors
fn resource_error<T: std::fmt::Debug>(result: Result<T, Error>) -> ResourceError {
    match result {
        Err(Error::ResourceError(err)) => err,
        other => panic!("expected resource error, got {:?}", other),
    }
}
