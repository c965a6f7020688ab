use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

/// Repository for livestock kept in a tank.
pub struct LivestockRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LivestockRepository<'a, C> {
    /// Creates a new instance of [`LivestockRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all livestock for a tank, most recently added first
    pub async fn get_many_by_tank_id(
        &self,
        tank_id: i32,
    ) -> Result<Vec<entity::livestock::Model>, DbErr> {
        entity::prelude::Livestock::find()
            .filter(entity::livestock::Column::TankId.eq(tank_id))
            .order_by_desc(entity::livestock::Column::DateAdded)
            .all(self.db)
            .await
    }

    /// Gets every livestock row across all of a user's tanks.
    ///
    /// Joins through tank and aquarium so callers can total quantities per
    /// tank without fetching each tank individually.
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::livestock::Model>, DbErr> {
        entity::prelude::Livestock::find()
            .join(JoinType::InnerJoin, entity::livestock::Relation::Tank.def())
            .join(JoinType::InnerJoin, entity::tank::Relation::Aquarium.def())
            .filter(entity::aquarium::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}
