use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::{
    data::{find_one_by_column, RecordStore},
    model::resource::{Changes, FieldValue},
};

/// Reads and writes country records.
pub struct CountryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryRepository<'a> {
    /// Creates a new instance of [`CountryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl<'a> From<&'a DatabaseConnection> for CountryRepository<'a> {
    fn from(db: &'a DatabaseConnection) -> Self {
        Self::new(db)
    }
}

#[async_trait]
impl RecordStore for CountryRepository<'_> {
    type Model = entity::country::Model;

    async fn find(&self, id: i32) -> Result<Option<Self::Model>, DbErr> {
        entity::prelude::Country::find_by_id(id).one(self.db).await
    }

    async fn find_all(&self) -> Result<Vec<Self::Model>, DbErr> {
        entity::prelude::Country::find()
            .order_by_asc(entity::country::Column::Id)
            .all(self.db)
            .await
    }

    async fn find_one_by(
        &self,
        field: &str,
        value: FieldValue,
    ) -> Result<Option<Self::Model>, DbErr> {
        find_one_by_column::<entity::prelude::Country, _>(self.db, field, value).await
    }

    async fn insert(&self, changes: &Changes) -> Result<Self::Model, DbErr> {
        let mut country = entity::country::ActiveModel {
            ..Default::default()
        };
        apply_changes(&mut country, changes);

        country.insert(self.db).await
    }

    async fn update(&self, model: Self::Model, changes: &Changes) -> Result<Self::Model, DbErr> {
        let mut country = model.clone().into_active_model();
        apply_changes(&mut country, changes);

        if !country.is_changed() {
            return Ok(model);
        }

        country.update(self.db).await
    }

    async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Country::delete_by_id(id).exec(self.db).await
    }
}

fn apply_changes(country: &mut entity::country::ActiveModel, changes: &Changes) {
    if let Some(name) = changes.text("name") {
        country.name = ActiveValue::Set(name);
    }
    if let Some(code) = changes.text("code") {
        country.code = ActiveValue::Set(code);
    }
}
