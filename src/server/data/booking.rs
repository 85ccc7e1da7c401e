use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::{
    data::{find_one_by_column, RecordStore},
    model::resource::{Changes, FieldValue},
};

/// Reads and writes booking records.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new instance of [`BookingRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl<'a> From<&'a DatabaseConnection> for BookingRepository<'a> {
    fn from(db: &'a DatabaseConnection) -> Self {
        Self::new(db)
    }
}

#[async_trait]
impl RecordStore for BookingRepository<'_> {
    type Model = entity::booking::Model;

    async fn find(&self, id: i32) -> Result<Option<Self::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    async fn find_all(&self) -> Result<Vec<Self::Model>, DbErr> {
        entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    async fn find_one_by(
        &self,
        field: &str,
        value: FieldValue,
    ) -> Result<Option<Self::Model>, DbErr> {
        find_one_by_column::<entity::prelude::Booking, _>(self.db, field, value).await
    }

    async fn insert(&self, changes: &Changes) -> Result<Self::Model, DbErr> {
        let mut booking = entity::booking::ActiveModel {
            ..Default::default()
        };
        apply_changes(&mut booking, changes);

        booking.insert(self.db).await
    }

    async fn update(&self, model: Self::Model, changes: &Changes) -> Result<Self::Model, DbErr> {
        let mut booking = model.clone().into_active_model();
        apply_changes(&mut booking, changes);

        if !booking.is_changed() {
            return Ok(model);
        }

        booking.update(self.db).await
    }

    async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Booking::delete_by_id(id).exec(self.db).await
    }
}

fn apply_changes(booking: &mut entity::booking::ActiveModel, changes: &Changes) {
    if let Some(booking_reference) = changes.text("booking_reference") {
        booking.booking_reference = ActiveValue::Set(booking_reference);
    }
    if let Some(status) = changes.text("status") {
        booking.status = ActiveValue::Set(status);
    }
    if let Some(total_amount) = changes.decimal("total_amount") {
        booking.total_amount = ActiveValue::Set(total_amount);
    }
    if let Some(booking_date) = changes.date_time("booking_date") {
        booking.booking_date = ActiveValue::Set(booking_date);
    }
    if let Some(booker_id) = changes.id("booker_id") {
        booking.booker_id = ActiveValue::Set(booker_id);
    }
}
