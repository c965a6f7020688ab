use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Repository for single-use sign-in tokens.
pub struct SignInTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SignInTokenRepository<'a, C> {
    /// Creates a new instance of [`SignInTokenRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a freshly issued token for an email address
    pub async fn create(
        &self,
        email: &str,
        token: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::sign_in_token::Model, DbErr> {
        let sign_in_token = entity::sign_in_token::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            token: ActiveValue::Set(token.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            consumed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        sign_in_token.insert(self.db).await
    }

    /// Finds a token row by its token string
    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::sign_in_token::Model>, DbErr> {
        entity::prelude::SignInToken::find()
            .filter(entity::sign_in_token::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Marks a token as consumed, returns None when the row no longer exists
    pub async fn consume(
        &self,
        token_id: i32,
    ) -> Result<Option<entity::sign_in_token::Model>, DbErr> {
        let Some(sign_in_token) = entity::prelude::SignInToken::find_by_id(token_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut sign_in_token = sign_in_token.into_active_model();
        sign_in_token.consumed_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        let sign_in_token = sign_in_token.update(self.db).await?;

        Ok(Some(sign_in_token))
    }
}
