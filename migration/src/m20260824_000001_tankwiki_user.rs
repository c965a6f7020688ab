use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TankwikiUser::Table)
                    .if_not_exists()
                    .col(pk_auto(TankwikiUser::Id))
                    .col(string_uniq(TankwikiUser::Email))
                    .col(timestamp(TankwikiUser::CreatedAt))
                    .col(timestamp(TankwikiUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TankwikiUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TankwikiUser {
    Table,
    Id,
    Email,
    CreatedAt,
    UpdatedAt,
}
