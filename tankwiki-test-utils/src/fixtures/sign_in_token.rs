use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn sign_in_token<'a>(&'a mut self) -> SignInTokenFixtures<'a> {
        SignInTokenFixtures { setup: self }
    }
}

pub struct SignInTokenFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> SignInTokenFixtures<'a> {
    /// Insert an unconsumed token. Pass an `expires_at` in the past to
    /// exercise expiry handling.
    pub async fn insert_sign_in_token(
        &self,
        email: &str,
        token: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::sign_in_token::Model, TestError> {
        Ok(
            entity::prelude::SignInToken::insert(entity::sign_in_token::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                token: ActiveValue::Set(token.to_string()),
                expires_at: ActiveValue::Set(expires_at),
                consumed_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
