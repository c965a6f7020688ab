use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn tank<'a>(&'a mut self) -> TankFixtures<'a> {
        TankFixtures { setup: self }
    }
}

pub struct TankFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> TankFixtures<'a> {
    pub async fn insert_tank(
        &self,
        aquarium_id: i32,
        name: &str,
        volume: f64,
        tank_type: &str,
        custom_type: Option<&str>,
    ) -> Result<entity::tank::Model, TestError> {
        Ok(entity::prelude::Tank::insert(entity::tank::ActiveModel {
            aquarium_id: ActiveValue::Set(aquarium_id),
            name: ActiveValue::Set(name.to_string()),
            volume: ActiveValue::Set(volume),
            tank_type: ActiveValue::Set(tank_type.to_string()),
            custom_type: ActiveValue::Set(custom_type.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Shorthand for tests that need a tank but do not care about its fields.
    pub async fn insert_mock_tank(
        &self,
        aquarium_id: i32,
    ) -> Result<entity::tank::Model, TestError> {
        self.insert_tank(aquarium_id, "Mock Tank", 55.0, "freshwater", None)
            .await
    }
}
