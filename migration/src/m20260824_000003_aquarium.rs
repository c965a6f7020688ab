use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260824_000001_tankwiki_user::TankwikiUser;

static IDX_AQUARIUM_USER_ID: &str = "idx-aquarium-user_id";
static FK_AQUARIUM_USER_ID: &str = "fk-aquarium-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aquarium::Table)
                    .if_not_exists()
                    .col(pk_auto(Aquarium::Id))
                    .col(integer(Aquarium::UserId))
                    .col(string(Aquarium::Name))
                    .col(string(Aquarium::PreferredUnits))
                    .col(timestamp(Aquarium::CreatedAt))
                    .col(timestamp(Aquarium::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AQUARIUM_USER_ID)
                    .table(Aquarium::Table)
                    .col(Aquarium::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AQUARIUM_USER_ID)
                    .from_tbl(Aquarium::Table)
                    .from_col(Aquarium::UserId)
                    .to_tbl(TankwikiUser::Table)
                    .to_col(TankwikiUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AQUARIUM_USER_ID)
                    .table(Aquarium::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AQUARIUM_USER_ID)
                    .table(Aquarium::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Aquarium::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Aquarium {
    Table,
    Id,
    UserId,
    Name,
    PreferredUnits,
    CreatedAt,
    UpdatedAt,
}
