use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_create_passenger_table::Passenger,
    m20260301_000004_create_flight_table::Flight,
    m20260301_000005_create_travel_class_table::TravelClass,
    m20260301_000006_create_booking_table::Booking,
};

static IDX_TICKET_BOOKING_ID: &str = "idx_ticket_booking_id";
static FK_TICKET_BOOKING_ID: &str = "fk_ticket_booking_id";
static FK_TICKET_FLIGHT_ID: &str = "fk_ticket_flight_id";
static FK_TICKET_PASSENGER_ID: &str = "fk_ticket_passenger_id";
static FK_TICKET_TRAVEL_CLASS_ID: &str = "fk_ticket_travel_class_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string_null(Ticket::SeatNumber))
                    .col(decimal_len(Ticket::Price, 10, 2))
                    .col(integer(Ticket::BookingId))
                    .col(integer(Ticket::FlightId))
                    .col(integer(Ticket::PassengerId))
                    .col(integer(Ticket::TravelClassId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_BOOKING_ID)
                    .table(Ticket::Table)
                    .col(Ticket::BookingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_BOOKING_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::BookingId)
                    .to_tbl(Booking::Table)
                    .to_col(Booking::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_FLIGHT_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::FlightId)
                    .to_tbl(Flight::Table)
                    .to_col(Flight::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_PASSENGER_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::PassengerId)
                    .to_tbl(Passenger::Table)
                    .to_col(Passenger::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_TRAVEL_CLASS_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::TravelClassId)
                    .to_tbl(TravelClass::Table)
                    .to_col(TravelClass::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_TICKET_TRAVEL_CLASS_ID,
            FK_TICKET_PASSENGER_ID,
            FK_TICKET_FLIGHT_ID,
            FK_TICKET_BOOKING_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(Ticket::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_BOOKING_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ticket {
    Table,
    Id,
    SeatNumber,
    Price,
    BookingId,
    FlightId,
    PassengerId,
    TravelClassId,
}
