use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tankwiki::{
    model::tank::TankDto,
    server::{controller::tank::get_tanks, model::session::user::SessionUserId},
};
use tankwiki_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with the signed-in user's tanks across all aquariums
async fn returns_own_tanks() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let first = test
        .aquarium()
        .insert_aquarium(user_model.id, "Living Room", "imperial")
        .await?;
    let second = test
        .aquarium()
        .insert_aquarium(user_model.id, "Office", "metric")
        .await?;
    test.tank().insert_mock_tank(first.id).await?;
    test.tank().insert_mock_tank(second.id).await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_tanks(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let tanks: Vec<TankDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(tanks.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect 404 when no user is signed in
async fn not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = get_tanks(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
