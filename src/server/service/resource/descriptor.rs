//! Declarative field tables driving the resource update protocol.

use chrono::{SubsecRound, Utc};

use crate::server::model::resource::{Changes, FieldValue, ResourceKind};

/// How a field's JSON value is parsed and stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// String, or a number stored as its text
    Text,
    /// Monetary amount with two fractional digits
    Decimal,
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// Timestamp, `YYYY-MM-DD HH:MM:SS`
    DateTime,
    /// Identifier of a record of the given kind which must exist on create
    Reference(ResourceKind),
}

/// Value stored for an optional field omitted on create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldDefault {
    /// Left unset, stored as null
    Null,
    /// A fixed string
    Text(&'static str),
    /// The current UTC time truncated to whole seconds
    Now,
}

/// Whether a field must be supplied on create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// Must be present and non-empty on create
    Required,
    /// May be omitted, receiving the default
    Optional(FieldDefault),
}

/// A single writable field of a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Payload key and column name
    pub name: &'static str,
    /// How the value is parsed
    pub ty: FieldType,
    /// Whether the field is required on create
    pub presence: Presence,
    /// No two records may hold the same value
    pub unique: bool,
}

impl FieldSpec {
    /// A field that must be supplied on create
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            presence: Presence::Required,
            unique: false,
        }
    }

    /// A field that receives `default` when omitted on create
    pub const fn optional(name: &'static str, ty: FieldType, default: FieldDefault) -> Self {
        Self {
            name,
            ty,
            presence: Presence::Optional(default),
            unique: false,
        }
    }

    /// Marks the field unique across records
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Whether the field must be supplied on create
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

/// The writable fields of one resource kind.
#[derive(Clone, Copy, Debug)]
pub struct ResourceDescriptor {
    /// Kind named in messages
    pub kind: ResourceKind,
    /// Writable fields in declaration order
    pub fields: &'static [FieldSpec],
}

impl ResourceDescriptor {
    /// Fields required on create, in declaration order
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|spec| spec.is_required())
    }

    /// Fields whose values must be unique
    pub fn unique_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|spec| spec.unique)
    }

    /// Reference fields paired with the kind of record each points at
    pub fn references(&self) -> impl Iterator<Item = (&'static str, ResourceKind)> {
        self.fields.iter().filter_map(|spec| match spec.ty {
            FieldType::Reference(kind) => Some((spec.name, kind)),
            _ => None,
        })
    }

    /// Fills in defaults for optional fields absent from a create payload
    pub fn apply_defaults(&self, changes: &mut Changes) {
        for spec in self.fields {
            if changes.contains(spec.name) {
                continue;
            }

            match spec.presence {
                Presence::Optional(FieldDefault::Text(text)) => {
                    changes.set(spec.name, FieldValue::Text(text.to_string()))
                }
                Presence::Optional(FieldDefault::Now) => changes.set(
                    spec.name,
                    FieldValue::DateTime(Utc::now().naive_utc().trunc_subsecs(0)),
                ),
                Presence::Optional(FieldDefault::Null) | Presence::Required => {}
            }
        }
    }
}
