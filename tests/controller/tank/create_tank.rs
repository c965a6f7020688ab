use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use tankwiki::{
    model::tank::CreateTankDto,
    server::{controller::tank::create_tank, model::session::user::SessionUserId},
};
use tankwiki_test_utils::prelude::*;

fn reef_tank_dto(aquarium_id: i32) -> CreateTankDto {
    CreateTankDto {
        aquarium_id,
        name: "Reef Display".to_string(),
        volume: 75.0,
        tank_type: "saltwater_reef".to_string(),
        custom_type: None,
    }
}

#[tokio::test]
/// Expect 201 with the tank stored against the chosen aquarium
async fn creates_tank() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let aquarium = test
        .aquarium()
        .insert_aquarium(user_model.id, "Living Room", "imperial")
        .await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let dto = reef_tank_dto(aquarium.id);
    let result = create_tank(State(test.state()), test.session.clone(), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let tanks = entity::prelude::Tank::find().all(&test.state.db).await?;
    assert_eq!(tanks.len(), 1);
    assert_eq!(tanks[0].name, "Reef Display");
    assert_eq!(tanks[0].aquarium_id, aquarium.id);

    Ok(())
}

#[tokio::test]
/// Expect 400 with no row stored for a non-positive volume
async fn rejects_nonpositive_volume() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let aquarium = test
        .aquarium()
        .insert_aquarium(user_model.id, "Living Room", "imperial")
        .await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let dto = CreateTankDto {
        volume: 0.0,
        ..reef_tank_dto(aquarium.id)
    };
    let result = create_tank(State(test.state()), test.session.clone(), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let tanks = entity::prelude::Tank::find().all(&test.state.db).await?;
    assert!(tanks.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 400 when the type is other but no custom label was given
async fn rejects_other_without_custom_type() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let aquarium = test
        .aquarium()
        .insert_aquarium(user_model.id, "Living Room", "imperial")
        .await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let dto = CreateTankDto {
        tank_type: "other".to_string(),
        custom_type: Some("   ".to_string()),
        ..reef_tank_dto(aquarium.id)
    };
    let result = create_tank(State(test.state()), test.session.clone(), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the aquarium belongs to another user
async fn not_found_for_other_users_aquarium() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let other = test.user().insert_user("dory@reef.example").await?;
    let other_aquarium = test
        .aquarium()
        .insert_aquarium(other.id, "Somewhere Else", "metric")
        .await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let dto = reef_tank_dto(other_aquarium.id);
    let result = create_tank(State(test.state()), test.session.clone(), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let tanks = entity::prelude::Tank::find().all(&test.state.db).await?;
    assert!(tanks.is_empty());

    Ok(())
}
