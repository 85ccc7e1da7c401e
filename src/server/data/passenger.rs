use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::{
    data::{find_one_by_column, RecordStore},
    model::resource::{Changes, FieldValue},
};

/// Reads and writes passenger records.
pub struct PassengerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PassengerRepository<'a> {
    /// Creates a new instance of [`PassengerRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl<'a> From<&'a DatabaseConnection> for PassengerRepository<'a> {
    fn from(db: &'a DatabaseConnection) -> Self {
        Self::new(db)
    }
}

#[async_trait]
impl RecordStore for PassengerRepository<'_> {
    type Model = entity::passenger::Model;

    async fn find(&self, id: i32) -> Result<Option<Self::Model>, DbErr> {
        entity::prelude::Passenger::find_by_id(id).one(self.db).await
    }

    async fn find_all(&self) -> Result<Vec<Self::Model>, DbErr> {
        entity::prelude::Passenger::find()
            .order_by_asc(entity::passenger::Column::Id)
            .all(self.db)
            .await
    }

    async fn find_one_by(
        &self,
        field: &str,
        value: FieldValue,
    ) -> Result<Option<Self::Model>, DbErr> {
        find_one_by_column::<entity::prelude::Passenger, _>(self.db, field, value).await
    }

    async fn insert(&self, changes: &Changes) -> Result<Self::Model, DbErr> {
        let mut passenger = entity::passenger::ActiveModel {
            ..Default::default()
        };
        apply_changes(&mut passenger, changes);

        passenger.insert(self.db).await
    }

    async fn update(&self, model: Self::Model, changes: &Changes) -> Result<Self::Model, DbErr> {
        let mut passenger = model.clone().into_active_model();
        apply_changes(&mut passenger, changes);

        if !passenger.is_changed() {
            return Ok(model);
        }

        passenger.update(self.db).await
    }

    async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Passenger::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

fn apply_changes(passenger: &mut entity::passenger::ActiveModel, changes: &Changes) {
    if let Some(first_name) = changes.text("first_name") {
        passenger.first_name = ActiveValue::Set(first_name);
    }
    if let Some(last_name) = changes.text("last_name") {
        passenger.last_name = ActiveValue::Set(last_name);
    }
    if let Some(email) = changes.text("email") {
        passenger.email = ActiveValue::Set(email);
    }
    if let Some(phone) = changes.text("phone") {
        passenger.phone = ActiveValue::Set(Some(phone));
    }
    if let Some(passport_number) = changes.text("passport_number") {
        passenger.passport_number = ActiveValue::Set(passport_number);
    }
    if let Some(date_of_birth) = changes.date("date_of_birth") {
        passenger.date_of_birth = ActiveValue::Set(date_of_birth);
    }
}
