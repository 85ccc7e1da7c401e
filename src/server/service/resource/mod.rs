//! The resource update protocol.
//!
//! Every resource exposes the same five operations: create, get, list, update and delete.
//! [`ResourceService`] implements them once, driven by the resource's
//! [`ResourceDescriptor`], on top of any repository implementing [`RecordStore`].
//!
//! # Create
//! 1. Required fields absent, null or empty fail with the full list of missing names.
//! 2. Present fields are parsed as their declared types.
//! 3. Every present reference must resolve to an existing record.
//! 4. Unique fields must not collide with an existing record.
//! 5. Optional fields left out receive their defaults and the record is inserted.
//!
//! # Update
//! Only fields present in the payload change; everything else keeps its stored value.
//! A reference that does not resolve is dropped from the update and the stored
//! reference is retained.
//!
//! # Delete
//! Deleting a record that other records still reference is rejected and leaves
//! everything untouched.

pub mod descriptor;
pub mod payload;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{reference::ReferenceRepository, RecordStore},
    error::{resource::ResourceError, Error},
    model::resource::ResourceKind,
    service::resource::{descriptor::ResourceDescriptor, payload::Payload},
};

/// A repository that can be driven by the resource update protocol.
pub trait Resource: RecordStore {
    /// Projection returned by get and list
    type Dto: Send;

    /// Writable fields of the resource
    const DESCRIPTOR: ResourceDescriptor;

    /// Primary key of a stored record
    fn id(model: &Self::Model) -> i32;

    /// Projects a stored record for the client
    fn to_dto(model: Self::Model) -> Self::Dto;
}

/// Create, get, list, update and delete for the resource backed by `R`.
pub struct ResourceService<'a, R> {
    store: R,
    references: ReferenceRepository<'a>,
}

impl<'a, R> ResourceService<'a, R>
where
    R: Resource + From<&'a DatabaseConnection>,
{
    /// Creates a new instance of [`ResourceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            store: R::from(db),
            references: ReferenceRepository::new(db),
        }
    }
}

impl<'a, R: Resource> ResourceService<'a, R> {
    fn kind(&self) -> ResourceKind {
        R::DESCRIPTOR.kind
    }

    /// The repository backing this service
    pub fn store(&self) -> &R {
        &self.store
    }

    /// Creates a record from a payload
    ///
    /// # Returns
    /// - `Ok(R::Model)` - The stored record
    /// - `Err(ResourceError::MissingFields)` - Required fields were absent, null or empty
    /// - `Err(ResourceError::InvalidField)` - A present field failed to parse
    /// - `Err(ResourceError::NotFound)` - A referenced record does not exist
    /// - `Err(ResourceError::Conflict)` - A unique field collides with an existing record
    pub async fn create(&self, payload: &Payload) -> Result<R::Model, Error> {
        let descriptor = R::DESCRIPTOR;

        let missing = payload.missing_required(&descriptor);
        if !missing.is_empty() {
            return Err(ResourceError::MissingFields(missing).into());
        }

        let mut changes = payload.changes(&descriptor)?;

        for (field, kind) in descriptor.references() {
            if let Some(id) = changes.id(field) {
                if !self.references.exists(kind, id).await? {
                    tracing::debug!(
                        field = field,
                        id = id,
                        "Rejected {} create referencing missing {}",
                        self.kind().label(),
                        kind.label()
                    );

                    return Err(ResourceError::NotFound { kind, id }.into());
                }
            }
        }

        for spec in descriptor.unique_fields() {
            if let Some(value) = changes.get(spec.name) {
                if self
                    .store
                    .find_one_by(spec.name, value.clone())
                    .await?
                    .is_some()
                {
                    return Err(ResourceError::Conflict {
                        kind: self.kind(),
                        field: spec.name,
                    }
                    .into());
                }
            }
        }

        descriptor.apply_defaults(&mut changes);

        let model = self
            .store
            .insert(&changes)
            .await
            .map_err(|err| self.write_error(err))?;

        tracing::info!(id = R::id(&model), "Created {}", self.kind().label());

        Ok(model)
    }

    /// Returns the projection of a single record
    ///
    /// # Returns
    /// - `Ok(R::Dto)` - The record's projection
    /// - `Err(ResourceError::NotFound)` - No record with this ID
    pub async fn get(&self, id: i32) -> Result<R::Dto, Error> {
        let model = self.find(id).await?;

        Ok(R::to_dto(model))
    }

    /// Returns the projection of every record ordered by ID
    pub async fn list(&self) -> Result<Vec<R::Dto>, Error> {
        let models = self.store.find_all().await?;

        Ok(models.into_iter().map(R::to_dto).collect())
    }

    /// Applies the fields present in a payload to an existing record
    ///
    /// A payload with no recognized fields leaves the record untouched and still
    /// succeeds.
    ///
    /// # Returns
    /// - `Ok(R::Model)` - The record after the update
    /// - `Err(ResourceError::NotFound)` - No record with this ID
    /// - `Err(ResourceError::InvalidField)` - A present field failed to parse
    /// - `Err(ResourceError::Conflict)` - The update would duplicate a unique field
    pub async fn update(&self, id: i32, payload: &Payload) -> Result<R::Model, Error> {
        let descriptor = R::DESCRIPTOR;
        let model = self.find(id).await?;

        let mut changes = payload.changes(&descriptor)?;

        for (field, kind) in descriptor.references() {
            if let Some(reference_id) = changes.id(field) {
                if !self.references.exists(kind, reference_id).await? {
                    tracing::warn!(
                        id = id,
                        field = field,
                        reference_id = reference_id,
                        "Ignoring {} update to missing {}, keeping stored reference",
                        self.kind().label(),
                        kind.label()
                    );

                    changes.remove(field);
                }
            }
        }

        if changes.is_empty() {
            return Ok(model);
        }

        let model = self
            .store
            .update(model, &changes)
            .await
            .map_err(|err| self.write_error(err))?;

        tracing::info!(id = id, fields = changes.len(), "Updated {}", self.kind().label());

        Ok(model)
    }

    /// Deletes a record
    ///
    /// # Returns
    /// - `Ok(())` - The record was deleted
    /// - `Err(ResourceError::NotFound)` - No record with this ID
    /// - `Err(ResourceError::Referenced)` - Other records still reference this one
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.find(id).await?;

        match self.store.delete(id).await {
            Ok(_) => {
                tracing::info!(id = id, "Deleted {}", self.kind().label());

                Ok(())
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                Err(ResourceError::Referenced {
                    kind: self.kind(),
                    id,
                }
                .into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find(&self, id: i32) -> Result<R::Model, Error> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| ResourceError::NotFound { kind: self.kind(), id }.into())
    }

    /// Maps constraint violations raised by the store on insert or update
    ///
    /// Unique violations that slipped past the pre-check, such as concurrent creates,
    /// become a conflict on the resource's unique field.
    fn write_error(&self, err: DbErr) -> Error {
        match (err.sql_err(), R::DESCRIPTOR.unique_fields().next()) {
            (Some(SqlErr::UniqueConstraintViolation(_)), Some(spec)) => ResourceError::Conflict {
                kind: self.kind(),
                field: spec.name,
            }
            .into(),
            _ => err.into(),
        }
    }
}

#[cfg(test)]
mod tests;
