use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260824_000003_aquarium::Aquarium;

static IDX_TANK_AQUARIUM_ID: &str = "idx-tank-aquarium_id";
static FK_TANK_AQUARIUM_ID: &str = "fk-tank-aquarium_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tank::Table)
                    .if_not_exists()
                    .col(pk_auto(Tank::Id))
                    .col(integer(Tank::AquariumId))
                    .col(string(Tank::Name))
                    .col(double(Tank::Volume))
                    .col(string(Tank::TankType))
                    .col(string_null(Tank::CustomType))
                    .col(timestamp(Tank::CreatedAt))
                    .col(timestamp(Tank::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TANK_AQUARIUM_ID)
                    .table(Tank::Table)
                    .col(Tank::AquariumId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TANK_AQUARIUM_ID)
                    .from_tbl(Tank::Table)
                    .from_col(Tank::AquariumId)
                    .to_tbl(Aquarium::Table)
                    .to_col(Aquarium::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TANK_AQUARIUM_ID)
                    .table(Tank::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TANK_AQUARIUM_ID)
                    .table(Tank::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tank::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tank {
    Table,
    Id,
    AquariumId,
    Name,
    Volume,
    TankType,
    CustomType,
    CreatedAt,
    UpdatedAt,
}
