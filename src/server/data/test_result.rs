use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for water test results.
pub struct TestResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TestResultRepository<'a, C> {
    /// Creates a new instance of [`TestResultRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the most recent test results for a tank
    pub async fn get_recent_by_tank_id(
        &self,
        tank_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::test_result::Model>, DbErr> {
        entity::prelude::TestResult::find()
            .filter(entity::test_result::Column::TankId.eq(tank_id))
            .order_by_desc(entity::test_result::Column::TestedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get_recent_by_tank_id {
        use chrono::NaiveDate;
        use tankwiki_test_utils::prelude::*;

        use crate::server::data::test_result::TestResultRepository;

        /// Expect results returned newest first and capped at the limit
        #[tokio::test]
        async fn limits_and_orders_results() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let user_model = test.user().insert_user("nemo@reef.example").await?;
            let aquarium_model = test
                .aquarium()
                .insert_aquarium(user_model.id, "Living Room Reef", "imperial")
                .await?;
            let tank_model = test.tank().insert_mock_tank(aquarium_model.id).await?;

            for day in 1..=3 {
                let tested_at = NaiveDate::from_ymd_opt(2024, 5, day)
                    .unwrap()
                    .and_hms_opt(8, 30, 0)
                    .unwrap();
                test.records()
                    .insert_test_result(tank_model.id, "ph", 7.0 + day as f64 / 10.0, "pH", tested_at)
                    .await?;
            }

            let test_result_repository = TestResultRepository::new(&test.state.db);
            let result = test_result_repository
                .get_recent_by_tank_id(tank_model.id, 2)
                .await?;

            assert_eq!(result.len(), 2);
            assert_eq!(result[0].value, 7.3);
            assert_eq!(result[1].value, 7.2);

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let test_result_repository = TestResultRepository::new(&test.state.db);
            let result = test_result_repository.get_recent_by_tank_id(1, 5).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
