//! Reference data insertion utilities.
//!
//! Countries, airports, flights and travel classes are referenced by the reservation
//! resources but have no endpoints of their own, so tests create them directly.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn reference<'a>(&'a self) -> ReferenceFixtures<'a> {
        ReferenceFixtures { setup: self }
    }
}

pub struct ReferenceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReferenceFixtures<'a> {
    pub async fn insert_mock_country(
        &self,
        name: &str,
        code: &str,
    ) -> Result<entity::country::Model, TestError> {
        Ok(
            entity::prelude::Country::insert(entity::country::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                code: ActiveValue::Set(code.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an airport located in the given country.
    pub async fn insert_mock_airport(
        &self,
        country_id: i32,
    ) -> Result<entity::airport::Model, TestError> {
        Ok(
            entity::prelude::Airport::insert(entity::airport::ActiveModel {
                name: ActiveValue::Set("Charles de Gaulle".to_string()),
                code: ActiveValue::Set("CDG".to_string()),
                country_id: ActiveValue::Set(country_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_flight(
        &self,
        flight_number: &str,
    ) -> Result<entity::flight::Model, TestError> {
        Ok(
            entity::prelude::Flight::insert(entity::flight::ActiveModel {
                flight_number: ActiveValue::Set(flight_number.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_travel_class(
        &self,
        name: &str,
    ) -> Result<entity::travel_class::Model, TestError> {
        Ok(
            entity::prelude::TravelClass::insert(entity::travel_class::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
