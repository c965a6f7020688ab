use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260824_000004_tank::Tank;

static IDX_LIVESTOCK_TANK_ID: &str = "idx-livestock-tank_id";
static FK_LIVESTOCK_TANK_ID: &str = "fk-livestock-tank_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Livestock::Table)
                    .if_not_exists()
                    .col(pk_auto(Livestock::Id))
                    .col(integer(Livestock::TankId))
                    .col(string(Livestock::Species))
                    .col(string_null(Livestock::CommonName))
                    .col(integer(Livestock::Quantity))
                    .col(string(Livestock::HealthStatus))
                    .col(date(Livestock::DateAdded))
                    .col(text_null(Livestock::Notes))
                    .col(timestamp(Livestock::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LIVESTOCK_TANK_ID)
                    .table(Livestock::Table)
                    .col(Livestock::TankId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIVESTOCK_TANK_ID)
                    .from_tbl(Livestock::Table)
                    .from_col(Livestock::TankId)
                    .to_tbl(Tank::Table)
                    .to_col(Tank::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LIVESTOCK_TANK_ID)
                    .table(Livestock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIVESTOCK_TANK_ID)
                    .table(Livestock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Livestock::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Livestock {
    Table,
    Id,
    TankId,
    Species,
    CommonName,
    Quantity,
    HealthStatus,
    DateAdded,
    Notes,
    CreatedAt,
}
