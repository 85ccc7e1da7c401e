//! Resource kinds and the typed field values exchanged with repositories.
//!
//! Incoming payloads are validated against a resource descriptor and converted into a
//! [`Changes`] set: a mapping from column name to a typed [`FieldValue`]. Repositories only
//! ever see `Changes`, never raw JSON.

use std::{collections::BTreeMap, fmt};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Every kind of record the API can address, including the reference tables that
/// resources point at but which have no endpoints of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `/api/passengers`
    Passenger,
    /// `/api/countries`
    Country,
    /// `/api/bookings`
    Booking,
    /// `/api/tickets`
    Ticket,
    /// Reference table, no endpoints
    Airport,
    /// Reference table, no endpoints
    Flight,
    /// Reference table, no endpoints
    TravelClass,
}

impl ResourceKind {
    /// Capitalized name used at the start of client facing messages, e.g. `Passenger not found`
    pub fn name(self) -> &'static str {
        match self {
            Self::Passenger => "Passenger",
            Self::Country => "Country",
            Self::Booking => "Booking",
            Self::Ticket => "Ticket",
            Self::Airport => "Airport",
            Self::Flight => "Flight",
            Self::TravelClass => "Travel class",
        }
    }

    /// Lowercase name used inside sentences, e.g. `Cannot delete passenger because ...`
    pub fn label(self) -> &'static str {
        match self {
            Self::Passenger => "passenger",
            Self::Country => "country",
            Self::Booking => "booking",
            Self::Ticket => "ticket",
            Self::Airport => "airport",
            Self::Flight => "flight",
            Self::TravelClass => "travel class",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single validated field value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// Amount with two fractional digits
    Decimal(Decimal),
    /// Calendar date
    Date(NaiveDate),
    /// Timestamp without time zone
    DateTime(NaiveDateTime),
    /// Identifier of a referenced record
    Id(i32),
}

impl From<FieldValue> for sea_orm::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => text.into(),
            FieldValue::Decimal(amount) => amount.into(),
            FieldValue::Date(date) => date.into(),
            FieldValue::DateTime(date_time) => date_time.into(),
            FieldValue::Id(id) => id.into(),
        }
    }
}

/// Validated field values keyed by column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Changes {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Changes {
    /// Creates an empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value
    pub fn set(&mut self, field: &'static str, value: FieldValue) {
        self.values.insert(field, value);
    }

    /// Removes a field, returning its value if it was present
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.values.remove(field)
    }

    /// Returns the value of a field
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Returns whether a field is present
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Returns whether no field is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns a text field, `None` if absent or of another type
    pub fn text(&self, field: &str) -> Option<String> {
        match self.values.get(field) {
            Some(FieldValue::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    /// Returns a decimal field
    pub fn decimal(&self, field: &str) -> Option<Decimal> {
        match self.values.get(field) {
            Some(FieldValue::Decimal(amount)) => Some(*amount),
            _ => None,
        }
    }

    /// Returns a date field
    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        match self.values.get(field) {
            Some(FieldValue::Date(date)) => Some(*date),
            _ => None,
        }
    }

    /// Returns a timestamp field
    pub fn date_time(&self, field: &str) -> Option<NaiveDateTime> {
        match self.values.get(field) {
            Some(FieldValue::DateTime(date_time)) => Some(*date_time),
            _ => None,
        }
    }

    /// Returns a reference field
    pub fn id(&self, field: &str) -> Option<i32> {
        match self.values.get(field) {
            Some(FieldValue::Id(id)) => Some(*id),
            _ => None,
        }
    }
}
