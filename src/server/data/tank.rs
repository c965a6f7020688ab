use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository for tanks.
///
/// Reads join through the owning aquarium so callers can scope results to a
/// user and reuse the aquarium's preferred units without a second query.
pub struct TankRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TankRepository<'a, C> {
    /// Creates a new instance of [`TankRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new tank in an aquarium
    pub async fn create(
        &self,
        aquarium_id: i32,
        name: &str,
        volume: f64,
        tank_type: &str,
        custom_type: Option<&str>,
    ) -> Result<entity::tank::Model, DbErr> {
        let tank = entity::tank::ActiveModel {
            aquarium_id: ActiveValue::Set(aquarium_id),
            name: ActiveValue::Set(name.to_string()),
            volume: ActiveValue::Set(volume),
            tank_type: ActiveValue::Set(tank_type.to_string()),
            custom_type: ActiveValue::Set(custom_type.map(|value| value.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tank.insert(self.db).await
    }

    /// Gets a tank with its aquarium only when owned by the given user
    pub async fn get_for_user(
        &self,
        tank_id: i32,
        user_id: i32,
    ) -> Result<Option<(entity::tank::Model, Option<entity::aquarium::Model>)>, DbErr> {
        entity::prelude::Tank::find_by_id(tank_id)
            .find_also_related(entity::prelude::Aquarium)
            .filter(entity::aquarium::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets all tanks owned by a user with their aquariums, ordered by tank name
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::tank::Model, Option<entity::aquarium::Model>)>, DbErr> {
        entity::prelude::Tank::find()
            .find_also_related(entity::prelude::Aquarium)
            .filter(entity::aquarium::Column::UserId.eq(user_id))
            .order_by_asc(entity::tank::Column::Name)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use tankwiki_test_utils::prelude::*;

        use crate::server::data::tank::TankRepository;

        /// Expect success when creating a tank in an existing aquarium
        #[tokio::test]
        async fn creates_tank() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let user_model = test.user().insert_user("nemo@reef.example").await?;
            let aquarium_model = test
                .aquarium()
                .insert_aquarium(user_model.id, "Living Room Reef", "imperial")
                .await?;

            let tank_repository = TankRepository::new(&test.state.db);
            let result = tank_repository
                .create(aquarium_model.id, "Display Tank", 75.0, "saltwater_reef", None)
                .await;

            assert!(result.is_ok());

            let tank_model = result.unwrap();
            assert_eq!(tank_model.name, "Display Tank");
            assert_eq!(tank_model.custom_type, None);

            Ok(())
        }

        /// Expect the custom type to be stored when present
        #[tokio::test]
        async fn stores_custom_type() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let user_model = test.user().insert_user("nemo@reef.example").await?;
            let aquarium_model = test
                .aquarium()
                .insert_aquarium(user_model.id, "Living Room Reef", "imperial")
                .await?;

            let tank_repository = TankRepository::new(&test.state.db);
            let result = tank_repository
                .create(aquarium_model.id, "Kreisel", 20.0, "other", Some("Jellyfish Kreisel"))
                .await?;

            assert_eq!(result.custom_type.as_deref(), Some("Jellyfish Kreisel"));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let tank_repository = TankRepository::new(&test.state.db);
            let result = tank_repository
                .create(1, "Display Tank", 75.0, "saltwater_reef", None)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_for_user {
        use tankwiki_test_utils::prelude::*;

        use crate::server::data::tank::TankRepository;

        /// Expect the tank and its aquarium when owned by the user
        #[tokio::test]
        async fn finds_owned_tank_with_aquarium() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let user_model = test.user().insert_user("nemo@reef.example").await?;
            let aquarium_model = test
                .aquarium()
                .insert_aquarium(user_model.id, "Living Room Reef", "imperial")
                .await?;
            let tank_model = test.tank().insert_mock_tank(aquarium_model.id).await?;

            let tank_repository = TankRepository::new(&test.state.db);
            let result = tank_repository
                .get_for_user(tank_model.id, user_model.id)
                .await?;

            let (tank_model, aquarium) = result.unwrap();
            assert_eq!(tank_model.name, "Mock Tank");
            assert_eq!(aquarium.map(|aquarium| aquarium.id), Some(aquarium_model.id));

            Ok(())
        }

        /// Expect Ok(None) when the tank belongs to a different user
        #[tokio::test]
        async fn returns_none_for_other_users_tank() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let owner = test.user().insert_user("nemo@reef.example").await?;
            let other = test.user().insert_user("dory@reef.example").await?;
            let aquarium_model = test
                .aquarium()
                .insert_aquarium(owner.id, "Living Room Reef", "imperial")
                .await?;
            let tank_model = test.tank().insert_mock_tank(aquarium_model.id).await?;

            let tank_repository = TankRepository::new(&test.state.db);
            let result = tank_repository.get_for_user(tank_model.id, other.id).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod get_many_by_user_id {
        use tankwiki_test_utils::prelude::*;

        use crate::server::data::tank::TankRepository;

        /// Expect tanks across aquariums returned in name order
        #[tokio::test]
        async fn orders_tanks_by_name() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let user_model = test.user().insert_user("nemo@reef.example").await?;
            let first_aquarium = test
                .aquarium()
                .insert_aquarium(user_model.id, "Living Room Reef", "imperial")
                .await?;
            let second_aquarium = test
                .aquarium()
                .insert_aquarium(user_model.id, "Office Nano", "metric")
                .await?;
            test.tank()
                .insert_tank(first_aquarium.id, "Sump", 30.0, "saltwater_reef", None)
                .await?;
            test.tank()
                .insert_tank(second_aquarium.id, "Desk Cube", 5.0, "freshwater_planted", None)
                .await?;

            let tank_repository = TankRepository::new(&test.state.db);
            let result = tank_repository.get_many_by_user_id(user_model.id).await?;

            let names: Vec<String> = result.into_iter().map(|(tank, _)| tank.name).collect();
            assert_eq!(names, vec!["Desk Cube", "Sump"]);

            Ok(())
        }

        /// Expect only the requesting user's tanks
        #[tokio::test]
        async fn excludes_other_users_tanks() -> Result<(), TestError> {
            let mut test = test_setup_with_app_tables!()?;
            let owner = test.user().insert_user("nemo@reef.example").await?;
            let other = test.user().insert_user("dory@reef.example").await?;
            let owner_aquarium = test
                .aquarium()
                .insert_aquarium(owner.id, "Living Room Reef", "imperial")
                .await?;
            let other_aquarium = test
                .aquarium()
                .insert_aquarium(other.id, "Office Nano", "metric")
                .await?;
            test.tank().insert_mock_tank(owner_aquarium.id).await?;
            test.tank().insert_mock_tank(other_aquarium.id).await?;

            let tank_repository = TankRepository::new(&test.state.db);
            let result = tank_repository.get_many_by_user_id(owner.id).await?;

            assert_eq!(result.len(), 1);

            Ok(())
        }
    }
}
