use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tankwiki::server::{controller::tank::get_tank, model::session::user::SessionUserId};
use tankwiki_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 for a tank in one of the signed-in user's aquariums
async fn returns_owned_tank() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let aquarium = test
        .aquarium()
        .insert_aquarium(user_model.id, "Living Room", "imperial")
        .await?;
    let tank = test.tank().insert_mock_tank(aquarium.id).await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_tank(State(test.state()), test.session.clone(), Path(tank.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 for another user's tank
async fn not_found_for_other_users_tank() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let other = test.user().insert_user("dory@reef.example").await?;
    let other_aquarium = test
        .aquarium()
        .insert_aquarium(other.id, "Somewhere Else", "metric")
        .await?;
    let other_tank = test.tank().insert_mock_tank(other_aquarium.id).await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_tank(State(test.state()), test.session.clone(), Path(other_tank.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a tank ID with no matching row
async fn not_found_for_missing_tank() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_tank(State(test.state()), test.session.clone(), Path(999)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
