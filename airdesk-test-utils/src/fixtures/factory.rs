//! Request payload factories.
//!
//! Each function returns a JSON object with every required field of a resource populated
//! with standard test values, ready to be passed to a create operation.

use serde_json::{json, Value};

/// Create payload for a passenger with the given email.
pub fn passenger_payload(email: &str) -> Value {
    json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": email,
        "passport_number": "X1234567",
        "date_of_birth": "1990-04-12",
    })
}

/// Create payload for a country.
pub fn country_payload(name: &str, code: &str) -> Value {
    json!({
        "name": name,
        "code": code,
    })
}

/// Create payload for a booking made by the given passenger.
pub fn booking_payload(booker_id: i32) -> Value {
    json!({
        "booker_id": booker_id,
        "booking_reference": "ABC123",
        "total_amount": "250.00",
    })
}

/// Create payload for a ticket linking the given records.
pub fn ticket_payload(
    booking_id: i32,
    flight_id: i32,
    passenger_id: i32,
    travel_class_id: i32,
) -> Value {
    json!({
        "booking_id": booking_id,
        "flight_id": flight_id,
        "passenger_id": passenger_id,
        "travel_class_id": travel_class_id,
        "price": 199.99,
    })
}

/// Extract the JSON object map of a payload built by this module.
///
/// # Panics
/// Panics if the value is not a JSON object, which never happens for the factories above.
pub fn as_object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object payload, got {other}"),
    }
}
