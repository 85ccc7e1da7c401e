//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// reference data fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_resource_tables: bool,

    // Reference data to insert
    countries: Vec<(String, String)>, // (name, code)
    flights: Vec<String>,             // flight numbers
    travel_classes: Vec<String>,      // class names
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_resource_tables: false,
            countries: Vec::new(),
            flights: Vec::new(),
            travel_classes: Vec::new(),
        }
    }

    /// Add every table of the reservation schema to the test database.
    ///
    /// Creates Passenger, Country, Airport, Flight, TravelClass, Booking and Ticket, in
    /// dependency order, with the foreign keys declared by the entity relations.
    pub fn with_resource_tables(mut self) -> Self {
        self.include_resource_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use airdesk_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), airdesk_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Country)
    ///     .with_table(Airport)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a country into the database during `build()`.
    pub fn with_mock_country(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.countries.push((name.into(), code.into()));
        self
    }

    /// Insert a flight into the database during `build()`.
    pub fn with_mock_flight(mut self, flight_number: impl Into<String>) -> Self {
        self.flights.push(flight_number.into());
        self
    }

    /// Insert a travel class into the database during `build()`.
    pub fn with_mock_travel_class(mut self, name: impl Into<String>) -> Self {
        self.travel_classes.push(name.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (resource tables if specified, then custom tables)
    /// 2. Inserts reference data (countries, flights, travel classes)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_resource_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend([
                schema.create_table_from_entity(entity::prelude::Passenger),
                schema.create_table_from_entity(entity::prelude::Country),
                schema.create_table_from_entity(entity::prelude::Airport),
                schema.create_table_from_entity(entity::prelude::Flight),
                schema.create_table_from_entity(entity::prelude::TravelClass),
                schema.create_table_from_entity(entity::prelude::Booking),
                schema.create_table_from_entity(entity::prelude::Ticket),
            ]);
        }

        all_tables.extend(self.tables);

        if !all_tables.is_empty() {
            setup.with_tables(all_tables).await?;
        }

        // 2. Insert reference data
        for (name, code) in self.countries {
            setup.reference().insert_mock_country(&name, &code).await?;
        }

        for flight_number in self.flights {
            setup.reference().insert_mock_flight(&flight_number).await?;
        }

        for name in self.travel_classes {
            setup.reference().insert_mock_travel_class(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
