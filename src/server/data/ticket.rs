use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{find_one_by_column, RecordStore},
    model::{
        db::TicketWithReferences,
        resource::{Changes, FieldValue},
    },
};

/// Reads and writes ticket records.
pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every ticket ordered by ID alongside the records it references
    ///
    /// Related bookings, flights, passengers and travel classes are each loaded with a
    /// single `IN` query, so the number of queries does not grow with the number of tickets.
    pub async fn find_all_with_references(&self) -> Result<Vec<TicketWithReferences>, DbErr> {
        let tickets = self.find_all().await?;

        let booking_ids = unique_ids(&tickets, |t| t.booking_id);
        let flight_ids = unique_ids(&tickets, |t| t.flight_id);
        let passenger_ids = unique_ids(&tickets, |t| t.passenger_id);
        let travel_class_ids = unique_ids(&tickets, |t| t.travel_class_id);

        let bookings: HashMap<i32, entity::booking::Model> = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Id.is_in(booking_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();
        let flights: HashMap<i32, entity::flight::Model> = entity::prelude::Flight::find()
            .filter(entity::flight::Column::Id.is_in(flight_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|f| (f.id, f))
            .collect();
        let passengers: HashMap<i32, entity::passenger::Model> =
            entity::prelude::Passenger::find()
                .filter(entity::passenger::Column::Id.is_in(passenger_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect();
        let travel_classes: HashMap<i32, entity::travel_class::Model> =
            entity::prelude::TravelClass::find()
                .filter(entity::travel_class::Column::Id.is_in(travel_class_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        let tickets = tickets
            .into_iter()
            .map(|ticket| TicketWithReferences {
                booking: bookings.get(&ticket.booking_id).cloned(),
                flight: flights.get(&ticket.flight_id).cloned(),
                passenger: passengers.get(&ticket.passenger_id).cloned(),
                travel_class: travel_classes.get(&ticket.travel_class_id).cloned(),
                ticket,
            })
            .collect();

        Ok(tickets)
    }
}

fn unique_ids<F>(tickets: &[entity::ticket::Model], id: F) -> Vec<i32>
where
    F: Fn(&entity::ticket::Model) -> i32,
{
    tickets
        .iter()
        .map(id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect()
}

impl<'a> From<&'a DatabaseConnection> for TicketRepository<'a> {
    fn from(db: &'a DatabaseConnection) -> Self {
        Self::new(db)
    }
}

#[async_trait]
impl RecordStore for TicketRepository<'_> {
    type Model = entity::ticket::Model;

    async fn find(&self, id: i32) -> Result<Option<Self::Model>, DbErr> {
        entity::prelude::Ticket::find_by_id(id).one(self.db).await
    }

    async fn find_all(&self) -> Result<Vec<Self::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await
    }

    async fn find_one_by(
        &self,
        field: &str,
        value: FieldValue,
    ) -> Result<Option<Self::Model>, DbErr> {
        find_one_by_column::<entity::prelude::Ticket, _>(self.db, field, value).await
    }

    async fn insert(&self, changes: &Changes) -> Result<Self::Model, DbErr> {
        let mut ticket = entity::ticket::ActiveModel {
            ..Default::default()
        };
        apply_changes(&mut ticket, changes);

        ticket.insert(self.db).await
    }

    async fn update(&self, model: Self::Model, changes: &Changes) -> Result<Self::Model, DbErr> {
        let mut ticket = model.clone().into_active_model();
        apply_changes(&mut ticket, changes);

        if !ticket.is_changed() {
            return Ok(model);
        }

        ticket.update(self.db).await
    }

    async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ticket::delete_by_id(id).exec(self.db).await
    }
}

fn apply_changes(ticket: &mut entity::ticket::ActiveModel, changes: &Changes) {
    if let Some(seat_number) = changes.text("seat_number") {
        ticket.seat_number = ActiveValue::Set(Some(seat_number));
    }
    if let Some(price) = changes.decimal("price") {
        ticket.price = ActiveValue::Set(price);
    }
    if let Some(booking_id) = changes.id("booking_id") {
        ticket.booking_id = ActiveValue::Set(booking_id);
    }
    if let Some(flight_id) = changes.id("flight_id") {
        ticket.flight_id = ActiveValue::Set(flight_id);
    }
    if let Some(passenger_id) = changes.id("passenger_id") {
        ticket.passenger_id = ActiveValue::Set(passenger_id);
    }
    if let Some(travel_class_id) = changes.id("travel_class_id") {
        ticket.travel_class_id = ActiveValue::Set(travel_class_id);
    }
}
