use sea_orm_migration::{prelude::*, schema::*};

static IDX_SIGN_IN_TOKEN_EMAIL: &str = "idx-sign_in_token-email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SignInToken::Table)
                    .if_not_exists()
                    .col(pk_auto(SignInToken::Id))
                    .col(string(SignInToken::Email))
                    .col(string_uniq(SignInToken::Token))
                    .col(date_time(SignInToken::ExpiresAt))
                    .col(date_time_null(SignInToken::ConsumedAt))
                    .col(timestamp(SignInToken::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SIGN_IN_TOKEN_EMAIL)
                    .table(SignInToken::Table)
                    .col(SignInToken::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SIGN_IN_TOKEN_EMAIL)
                    .table(SignInToken::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SignInToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SignInToken {
    Table,
    Id,
    Email,
    Token,
    ExpiresAt,
    ConsumedAt,
    CreatedAt,
}
