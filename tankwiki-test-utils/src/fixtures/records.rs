use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn records<'a>(&'a mut self) -> RecordFixtures<'a> {
        RecordFixtures { setup: self }
    }
}

/// Fixtures for the per-tank record tables.
pub struct RecordFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> RecordFixtures<'a> {
    pub async fn insert_equipment(
        &self,
        tank_id: i32,
        name: &str,
        status: &str,
        install_date: NaiveDate,
    ) -> Result<entity::equipment::Model, TestError> {
        Ok(
            entity::prelude::Equipment::insert(entity::equipment::ActiveModel {
                tank_id: ActiveValue::Set(tank_id),
                name: ActiveValue::Set(name.to_string()),
                equipment_type: ActiveValue::Set("filter".to_string()),
                status: ActiveValue::Set(status.to_string()),
                install_date: ActiveValue::Set(install_date),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_livestock(
        &self,
        tank_id: i32,
        species: &str,
        common_name: Option<&str>,
        quantity: i32,
        health_status: &str,
        date_added: NaiveDate,
    ) -> Result<entity::livestock::Model, TestError> {
        Ok(
            entity::prelude::Livestock::insert(entity::livestock::ActiveModel {
                tank_id: ActiveValue::Set(tank_id),
                species: ActiveValue::Set(species.to_string()),
                common_name: ActiveValue::Set(common_name.map(str::to_string)),
                quantity: ActiveValue::Set(quantity),
                health_status: ActiveValue::Set(health_status.to_string()),
                date_added: ActiveValue::Set(date_added),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_maintenance_log(
        &self,
        tank_id: i32,
        task: &str,
        performed_at: NaiveDateTime,
    ) -> Result<entity::maintenance_log::Model, TestError> {
        Ok(
            entity::prelude::MaintenanceLog::insert(entity::maintenance_log::ActiveModel {
                tank_id: ActiveValue::Set(tank_id),
                task: ActiveValue::Set(task.to_string()),
                performed_at: ActiveValue::Set(performed_at),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_test_result(
        &self,
        tank_id: i32,
        test_type: &str,
        value: f64,
        unit: &str,
        tested_at: NaiveDateTime,
    ) -> Result<entity::test_result::Model, TestError> {
        Ok(
            entity::prelude::TestResult::insert(entity::test_result::ActiveModel {
                tank_id: ActiveValue::Set(tank_id),
                test_type: ActiveValue::Set(test_type.to_string()),
                value: ActiveValue::Set(value),
                unit: ActiveValue::Set(unit.to_string()),
                tested_at: ActiveValue::Set(tested_at),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
