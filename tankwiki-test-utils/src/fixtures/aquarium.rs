use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn aquarium<'a>(&'a mut self) -> AquariumFixtures<'a> {
        AquariumFixtures { setup: self }
    }
}

pub struct AquariumFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> AquariumFixtures<'a> {
    pub async fn insert_aquarium(
        &self,
        user_id: i32,
        name: &str,
        preferred_units: &str,
    ) -> Result<entity::aquarium::Model, TestError> {
        Ok(
            entity::prelude::Aquarium::insert(entity::aquarium::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                preferred_units: ActiveValue::Set(preferred_units.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
