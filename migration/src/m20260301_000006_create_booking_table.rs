use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_create_passenger_table::Passenger;

static IDX_BOOKING_BOOKER_ID: &str = "idx_booking_booker_id";
static FK_BOOKING_BOOKER_ID: &str = "fk_booking_booker_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string(Booking::BookingReference))
                    .col(string(Booking::Status))
                    .col(decimal_len(Booking::TotalAmount, 10, 2))
                    .col(timestamp(Booking::BookingDate))
                    .col(integer(Booking::BookerId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKING_BOOKER_ID)
                    .table(Booking::Table)
                    .col(Booking::BookerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOKING_BOOKER_ID)
                    .from_tbl(Booking::Table)
                    .from_col(Booking::BookerId)
                    .to_tbl(Passenger::Table)
                    .to_col(Passenger::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOKING_BOOKER_ID)
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKING_BOOKER_ID)
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    BookingReference,
    Status,
    TotalAmount,
    BookingDate,
    BookerId,
}
