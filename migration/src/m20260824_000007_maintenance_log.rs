use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260824_000004_tank::Tank;

static IDX_MAINTENANCE_LOG_TANK_ID: &str = "idx-maintenance_log-tank_id";
static FK_MAINTENANCE_LOG_TANK_ID: &str = "fk-maintenance_log-tank_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceLog::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceLog::Id))
                    .col(integer(MaintenanceLog::TankId))
                    .col(string(MaintenanceLog::Task))
                    .col(date_time(MaintenanceLog::PerformedAt))
                    .col(text_null(MaintenanceLog::Notes))
                    .col(timestamp(MaintenanceLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAINTENANCE_LOG_TANK_ID)
                    .table(MaintenanceLog::Table)
                    .col(MaintenanceLog::TankId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MAINTENANCE_LOG_TANK_ID)
                    .from_tbl(MaintenanceLog::Table)
                    .from_col(MaintenanceLog::TankId)
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
                    .name(FK_MAINTENANCE_LOG_TANK_ID)
                    .table(MaintenanceLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MAINTENANCE_LOG_TANK_ID)
                    .table(MaintenanceLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MaintenanceLog {
    Table,
    Id,
    TankId,
    Task,
    PerformedAt,
    Notes,
    CreatedAt,
}
