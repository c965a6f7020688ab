//! Tests for the livestock summary endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use tankwiki::{
    model::livestock::LivestockSummaryDto,
    server::{controller::livestock::get_livestock_summary, model::session::user::SessionUserId},
};
use tankwiki_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with one row per livestock entry in the user's tanks
async fn returns_rows_for_own_tanks() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let aquarium = test
        .aquarium()
        .insert_aquarium(user_model.id, "Living Room", "imperial")
        .await?;
    let tank = test.tank().insert_mock_tank(aquarium.id).await?;
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    test.records()
        .insert_livestock(tank.id, "Amphiprion ocellaris", Some("Clownfish"), 2, "healthy", date)
        .await?;
    test.records()
        .insert_livestock(tank.id, "Lysmata amboinensis", None, 1, "healthy", date)
        .await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_livestock_summary(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let rows: Vec<LivestockSummaryDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.iter().map(|row| row.quantity).sum::<i32>(), 3);

    Ok(())
}

#[tokio::test]
/// Expect another user's livestock to stay out of the summary
async fn excludes_other_users_livestock() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let other = test.user().insert_user("dory@reef.example").await?;
    let other_aquarium = test
        .aquarium()
        .insert_aquarium(other.id, "Somewhere Else", "metric")
        .await?;
    let other_tank = test.tank().insert_mock_tank(other_aquarium.id).await?;
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    test.records()
        .insert_livestock(other_tank.id, "Paracanthurus hepatus", None, 1, "healthy", date)
        .await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_livestock_summary(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let rows: Vec<LivestockSummaryDto> = serde_json::from_slice(&body).unwrap();
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 404 when no user is signed in
async fn not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = get_livestock_summary(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
