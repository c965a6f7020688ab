use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Repository for equipment installed in a tank.
pub struct EquipmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    /// Creates a new instance of [`EquipmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all equipment for a tank, most recently installed first
    pub async fn get_many_by_tank_id(
        &self,
        tank_id: i32,
    ) -> Result<Vec<entity::equipment::Model>, DbErr> {
        entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::TankId.eq(tank_id))
            .order_by_desc(entity::equipment::Column::InstallDate)
            .all(self.db)
            .await
    }
}
