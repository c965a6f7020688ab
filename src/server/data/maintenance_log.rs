use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for maintenance log entries.
pub struct MaintenanceLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaintenanceLogRepository<'a, C> {
    /// Creates a new instance of [`MaintenanceLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the most recent maintenance entries for a tank
    pub async fn get_recent_by_tank_id(
        &self,
        tank_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::maintenance_log::Model>, DbErr> {
        entity::prelude::MaintenanceLog::find()
            .filter(entity::maintenance_log::Column::TankId.eq(tank_id))
            .order_by_desc(entity::maintenance_log::Column::PerformedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}
