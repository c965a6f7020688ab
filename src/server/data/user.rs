use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Repository for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user for a normalized email address
    pub async fn create(&self, email: &str) -> Result<entity::tankwiki_user::Model, DbErr> {
        let user = entity::tankwiki_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by ID
    pub async fn get(&self, user_id: i32) -> Result<Option<entity::tankwiki_user::Model>, DbErr> {
        entity::prelude::TankwikiUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by their email address
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::tankwiki_user::Model>, DbErr> {
        entity::prelude::TankwikiUser::find()
            .filter(entity::tankwiki_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
