use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::resource::ResourceKind;

/// Resolves references carried by resource payloads.
pub struct ReferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceRepository<'a> {
    /// Creates a new instance of [`ReferenceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns whether a record of the given kind exists with the given ID
    ///
    /// Covers every [`ResourceKind`], not only the kinds current descriptors reference, so a
    /// new reference field needs no change here.
    pub async fn exists(&self, kind: ResourceKind, id: i32) -> Result<bool, DbErr> {
        let exists = match kind {
            ResourceKind::Passenger => entity::prelude::Passenger::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            ResourceKind::Country => entity::prelude::Country::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            ResourceKind::Booking => entity::prelude::Booking::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            ResourceKind::Ticket => entity::prelude::Ticket::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            ResourceKind::Airport => entity::prelude::Airport::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            ResourceKind::Flight => entity::prelude::Flight::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            ResourceKind::TravelClass => entity::prelude::TravelClass::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
        };

        Ok(exists)
    }
}
