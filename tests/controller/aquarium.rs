//! Tests for aquarium controller endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use tankwiki::{
    model::aquarium::{CreateAquariumDto, UnitSystem},
    server::{
        controller::aquarium::{create_aquarium, get_aquariums},
        model::session::user::SessionUserId,
    },
};
use tankwiki_test_utils::prelude::*;

mod get {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the signed-in user's aquariums
    async fn returns_own_aquariums() -> Result<(), TestError> {
        let mut test = test_setup_with_app_tables!()?;
        let user_model = test.user().insert_user("nemo@reef.example").await?;
        test.aquarium()
            .insert_aquarium(user_model.id, "Living Room", "imperial")
            .await?;
        SessionUserId::insert(&test.session, user_model.id).await?;

        let result = get_aquariums(State(test.state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when no user is signed in
    async fn not_found_without_session() -> Result<(), TestError> {
        let test = test_setup_with_app_tables!()?;

        let result = get_aquariums(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the aquarium stored for the signed-in user
    async fn creates_aquarium() -> Result<(), TestError> {
        let mut test = test_setup_with_app_tables!()?;
        let user_model = test.user().insert_user("nemo@reef.example").await?;
        SessionUserId::insert(&test.session, user_model.id).await?;

        let dto = CreateAquariumDto {
            name: "Office".to_string(),
            preferred_units: UnitSystem::Metric,
        };
        let result = create_aquarium(State(test.state()), test.session.clone(), Json(dto)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let aquariums = entity::prelude::Aquarium::find().all(&test.state.db).await?;
        assert_eq!(aquariums.len(), 1);
        assert_eq!(aquariums[0].name, "Office");
        assert_eq!(aquariums[0].user_id, user_model.id);
        assert_eq!(aquariums[0].preferred_units, "metric");

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 with no row stored for a blank name
    async fn rejects_blank_name() -> Result<(), TestError> {
        let mut test = test_setup_with_app_tables!()?;
        let user_model = test.user().insert_user("nemo@reef.example").await?;
        SessionUserId::insert(&test.session, user_model.id).await?;

        let dto = CreateAquariumDto {
            name: "   ".to_string(),
            preferred_units: UnitSystem::Imperial,
        };
        let result = create_aquarium(State(test.state()), test.session.clone(), Json(dto)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let aquariums = entity::prelude::Aquarium::find().all(&test.state.db).await?;
        assert!(aquariums.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when no user is signed in
    async fn not_found_without_session() -> Result<(), TestError> {
        let test = test_setup_with_app_tables!()?;

        let dto = CreateAquariumDto {
            name: "Office".to_string(),
            preferred_units: UnitSystem::Imperial,
        };
        let result = create_aquarium(State(test.state()), test.session.clone(), Json(dto)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
