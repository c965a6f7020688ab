use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository for aquariums.
pub struct AquariumRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AquariumRepository<'a, C> {
    /// Creates a new instance of [`AquariumRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new aquarium owned by a user
    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        preferred_units: &str,
    ) -> Result<entity::aquarium::Model, DbErr> {
        let aquarium = entity::aquarium::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            preferred_units: ActiveValue::Set(preferred_units.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        aquarium.insert(self.db).await
    }

    /// Gets an aquarium only when it is owned by the given user
    pub async fn get_for_user(
        &self,
        aquarium_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::aquarium::Model>, DbErr> {
        entity::prelude::Aquarium::find_by_id(aquarium_id)
            .filter(entity::aquarium::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets all aquariums owned by a user ordered by name
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::aquarium::Model>, DbErr> {
        entity::prelude::Aquarium::find()
            .filter(entity::aquarium::Column::UserId.eq(user_id))
            .order_by_asc(entity::aquarium::Column::Name)
            .all(self.db)
            .await
    }
}
