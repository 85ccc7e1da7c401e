//! Data access layer repositories.
//!
//! Each resource has a repository implementing [`RecordStore`], the small set of record
//! operations the resource update protocol is written against. The reference repository
//! answers existence checks for any [`ResourceKind`] a payload may point at.
//!
//! [`ResourceKind`]: crate::server::model::resource::ResourceKind

/// Booking repository
pub mod booking;
/// Country repository
pub mod country;
/// Passenger repository
pub mod passenger;
/// Existence checks for referenced records
pub mod reference;
/// Ticket repository
pub mod ticket;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityName, EntityTrait, QueryFilter,
};

use crate::server::model::resource::{Changes, FieldValue};

/// Record operations a resource repository provides to the resource update protocol.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The stored row
    type Model: Send + Sync;

    /// Finds a record by primary key
    async fn find(&self, id: i32) -> Result<Option<Self::Model>, DbErr>;

    /// Returns every record ordered by primary key
    async fn find_all(&self) -> Result<Vec<Self::Model>, DbErr>;

    /// Finds the first record whose `field` column equals `value`
    async fn find_one_by(&self, field: &str, value: FieldValue)
        -> Result<Option<Self::Model>, DbErr>;

    /// Inserts a record built from the given changes
    async fn insert(&self, changes: &Changes) -> Result<Self::Model, DbErr>;

    /// Applies the given changes to an existing record
    ///
    /// Returns the record untouched without querying the database when no column changed.
    async fn update(&self, model: Self::Model, changes: &Changes) -> Result<Self::Model, DbErr>;

    /// Deletes a record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr>;
}

/// Finds the first row of `E` whose column named `field` equals `value`.
pub(crate) async fn find_one_by_column<E, C>(
    db: &C,
    field: &str,
    value: FieldValue,
) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Column: std::str::FromStr,
    C: ConnectionTrait,
{
    let column: E::Column = field.parse().map_err(|_| {
        DbErr::Custom(format!(
            "Unknown column `{}` on table `{}`",
            field,
            E::default().table_name()
        ))
    })?;

    E::find()
        .filter(ColumnTrait::eq(&column, value))
        .one(db)
        .await
}
