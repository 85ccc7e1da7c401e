use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_create_country_table::Country;

static IDX_AIRPORT_COUNTRY_ID: &str = "idx_airport_country_id";
static FK_AIRPORT_COUNTRY_ID: &str = "fk_airport_country_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(pk_auto(Airport::Id))
                    .col(string(Airport::Name))
                    .col(string_len(Airport::Code, 3))
                    .col(integer(Airport::CountryId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AIRPORT_COUNTRY_ID)
                    .table(Airport::Table)
                    .col(Airport::CountryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AIRPORT_COUNTRY_ID)
                    .from_tbl(Airport::Table)
                    .from_col(Airport::CountryId)
                    .to_tbl(Country::Table)
                    .to_col(Country::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AIRPORT_COUNTRY_ID)
                    .table(Airport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AIRPORT_COUNTRY_ID)
                    .table(Airport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Airport {
    Table,
    Id,
    Name,
    Code,
    CountryId,
}
