pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_passenger_table;
mod m20260301_000002_create_country_table;
mod m20260301_000003_create_airport_table;
mod m20260301_000004_create_flight_table;
mod m20260301_000005_create_travel_class_table;
mod m20260301_000006_create_booking_table;
mod m20260301_000007_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_passenger_table::Migration),
            Box::new(m20260301_000002_create_country_table::Migration),
            Box::new(m20260301_000003_create_airport_table::Migration),
            Box::new(m20260301_000004_create_flight_table::Migration),
            Box::new(m20260301_000005_create_travel_class_table::Migration),
            Box::new(m20260301_000006_create_booking_table::Migration),
            Box::new(m20260301_000007_create_ticket_table::Migration),
        ]
    }
}
