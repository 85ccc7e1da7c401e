//! Request payloads and their conversion into typed changes.

use serde_json::{Map, Value};

use crate::server::{
    error::resource::ResourceError,
    model::resource::{Changes, FieldValue},
    service::resource::descriptor::{FieldSpec, FieldType, ResourceDescriptor},
    util::{money::parse_amount, time},
};

/// A request body that is known to be a JSON object.
///
/// A field counts as present when its key exists with a non-null value. On create an empty
/// string is treated as absent for required fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Returns the value of a present field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    /// Required fields of the descriptor which are absent, null or an empty string
    pub fn missing_required(&self, descriptor: &ResourceDescriptor) -> Vec<&'static str> {
        descriptor
            .required_fields()
            .filter(|spec| match self.get(spec.name) {
                None => true,
                Some(Value::String(text)) => text.is_empty(),
                Some(_) => false,
            })
            .map(|spec| spec.name)
            .collect()
    }

    /// Parses every present field declared by the descriptor
    ///
    /// Keys the descriptor does not declare are ignored. Fails on the first field, in
    /// declaration order, whose value cannot be parsed as its declared type.
    pub fn changes(&self, descriptor: &ResourceDescriptor) -> Result<Changes, ResourceError> {
        let mut changes = Changes::new();

        for spec in descriptor.fields {
            if let Some(value) = self.get(spec.name) {
                let parsed = parse_field(spec, value).ok_or(ResourceError::InvalidField(spec.name))?;
                changes.set(spec.name, parsed);
            }
        }

        Ok(changes)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Payload {
    type Error = ResourceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ResourceError::MalformedBody),
        }
    }
}

fn parse_field(spec: &FieldSpec, value: &Value) -> Option<FieldValue> {
    match spec.ty {
        FieldType::Text => match value {
            Value::String(text) => Some(FieldValue::Text(text.clone())),
            Value::Number(number) => Some(FieldValue::Text(number.to_string())),
            _ => None,
        },
        FieldType::Decimal => parse_amount(&scalar_text(value)?).map(FieldValue::Decimal),
        FieldType::Date => match value {
            Value::String(text) => time::parse_date(text).map(FieldValue::Date),
            _ => None,
        },
        FieldType::DateTime => match value {
            Value::String(text) => time::parse_date_time(text).map(FieldValue::DateTime),
            _ => None,
        },
        FieldType::Reference(_) => parse_id(value).map(FieldValue::Id),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn parse_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => number.as_i64().and_then(|id| i32::try_from(id).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
