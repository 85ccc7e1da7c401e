//! Passenger, booking and ticket insertion utilities.
//!
//! Records are inserted directly through the entities, bypassing the resource protocol,
//! so tests can arrange state without depending on the code under test.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn reservation<'a>(&'a self) -> ReservationFixtures<'a> {
        ReservationFixtures { setup: self }
    }
}

pub struct ReservationFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReservationFixtures<'a> {
    /// Insert a passenger with standard test values and the given email.
    pub async fn insert_mock_passenger(
        &self,
        email: &str,
    ) -> Result<entity::passenger::Model, TestError> {
        Ok(
            entity::prelude::Passenger::insert(entity::passenger::ActiveModel {
                first_name: ActiveValue::Set("Jane".to_string()),
                last_name: ActiveValue::Set("Doe".to_string()),
                email: ActiveValue::Set(email.to_string()),
                phone: ActiveValue::Set(None),
                passport_number: ActiveValue::Set("X1234567".to_string()),
                date_of_birth: ActiveValue::Set(
                    NaiveDate::from_ymd_opt(1990, 4, 12).expect("valid fixture date"),
                ),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a confirmed booking of 250.00 owned by the given passenger.
    pub async fn insert_mock_booking(
        &self,
        booker_id: i32,
        booking_reference: &str,
    ) -> Result<entity::booking::Model, TestError> {
        Ok(
            entity::prelude::Booking::insert(entity::booking::ActiveModel {
                booking_reference: ActiveValue::Set(booking_reference.to_string()),
                status: ActiveValue::Set("Confirmed".to_string()),
                total_amount: ActiveValue::Set(Decimal::new(25000, 2)),
                booking_date: ActiveValue::Set(Utc::now().naive_utc()),
                booker_id: ActiveValue::Set(booker_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a ticket priced at 199.99 with seat 12A.
    pub async fn insert_mock_ticket(
        &self,
        booking_id: i32,
        flight_id: i32,
        passenger_id: i32,
        travel_class_id: i32,
    ) -> Result<entity::ticket::Model, TestError> {
        Ok(
            entity::prelude::Ticket::insert(entity::ticket::ActiveModel {
                seat_number: ActiveValue::Set(Some("12A".to_string())),
                price: ActiveValue::Set(Decimal::new(19999, 2)),
                booking_id: ActiveValue::Set(booking_id),
                flight_id: ActiveValue::Set(flight_id),
                passenger_id: ActiveValue::Set(passenger_id),
                travel_class_id: ActiveValue::Set(travel_class_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a ticket together with every record it references.
    ///
    /// Creates a passenger (who is both booker and traveler), a booking, flight `AF1234`
    /// and travel class `Economy`, then the ticket linking them.
    pub async fn insert_mock_ticket_with_references(
        &self,
        email: &str,
    ) -> Result<
        (
            entity::ticket::Model,
            entity::booking::Model,
            entity::passenger::Model,
            entity::flight::Model,
            entity::travel_class::Model,
        ),
        TestError,
    > {
        let passenger = self.insert_mock_passenger(email).await?;
        let booking = self.insert_mock_booking(passenger.id, "ABC123").await?;
        let flight = self.setup.reference().insert_mock_flight("AF1234").await?;
        let travel_class = self
            .setup
            .reference()
            .insert_mock_travel_class("Economy")
            .await?;

        let ticket = self
            .insert_mock_ticket(booking.id, flight.id, passenger.id, travel_class.id)
            .await?;

        Ok((ticket, booking, passenger, flight, travel_class))
    }
}
