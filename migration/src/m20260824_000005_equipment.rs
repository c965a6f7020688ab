use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260824_000004_tank::Tank;

static IDX_EQUIPMENT_TANK_ID: &str = "idx-equipment-tank_id";
static FK_EQUIPMENT_TANK_ID: &str = "fk-equipment-tank_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(integer(Equipment::TankId))
                    .col(string(Equipment::Name))
                    .col(string(Equipment::EquipmentType))
                    .col(string(Equipment::Status))
                    .col(date(Equipment::InstallDate))
                    .col(text_null(Equipment::Notes))
                    .col(timestamp(Equipment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_TANK_ID)
                    .table(Equipment::Table)
                    .col(Equipment::TankId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EQUIPMENT_TANK_ID)
                    .from_tbl(Equipment::Table)
                    .from_col(Equipment::TankId)
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
                    .name(FK_EQUIPMENT_TANK_ID)
                    .table(Equipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EQUIPMENT_TANK_ID)
                    .table(Equipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    TankId,
    Name,
    EquipmentType,
    Status,
    InstallDate,
    Notes,
    CreatedAt,
}
