use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260824_000004_tank::Tank;

static IDX_TEST_RESULT_TANK_ID: &str = "idx-test_result-tank_id";
static FK_TEST_RESULT_TANK_ID: &str = "fk-test_result-tank_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestResult::Table)
                    .if_not_exists()
                    .col(pk_auto(TestResult::Id))
                    .col(integer(TestResult::TankId))
                    .col(string(TestResult::TestType))
                    .col(double(TestResult::Value))
                    .col(string(TestResult::Unit))
                    .col(date_time(TestResult::TestedAt))
                    .col(text_null(TestResult::Notes))
                    .col(timestamp(TestResult::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEST_RESULT_TANK_ID)
                    .table(TestResult::Table)
                    .col(TestResult::TankId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEST_RESULT_TANK_ID)
                    .from_tbl(TestResult::Table)
                    .from_col(TestResult::TankId)
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
                    .name(FK_TEST_RESULT_TANK_ID)
                    .table(TestResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEST_RESULT_TANK_ID)
                    .table(TestResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TestResult::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TestResult {
    Table,
    Id,
    TankId,
    TestType,
    Value,
    Unit,
    TestedAt,
    Notes,
    CreatedAt,
}
