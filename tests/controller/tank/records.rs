//! Tests for the per-tank record collection endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use tankwiki::{
    model::{
        equipment::EquipmentDto, livestock::LivestockDto, maintenance::MaintenanceLogDto,
        tank::TankDto, test_result::TestResultDto,
    },
    server::{
        controller::tank::{
            get_tank, get_tank_equipment, get_tank_livestock, get_tank_maintenance,
            get_tank_test_results, RecentParams,
        },
        model::session::user::SessionUserId,
    },
};
use tankwiki_test_utils::prelude::*;

async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
/// Expect a tank with no records to answer empty collections, not errors
async fn empty_collections_for_bare_tank() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let aquarium = test
        .aquarium()
        .insert_aquarium(user_model.id, "Living Room", "imperial")
        .await?;
    let tank = test
        .tank()
        .insert_tank(aquarium.id, "Reef Display", 75.0, "saltwater_reef", None)
        .await?;
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_tank(State(test.state()), test.session.clone(), Path(tank.id)).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: TankDto = body_json(resp).await;
    assert_eq!(detail.name, "Reef Display");
    assert_eq!(detail.volume, 75.0);
    assert_eq!(detail.tank_type, "saltwater_reef");

    let result =
        get_tank_equipment(State(test.state()), test.session.clone(), Path(tank.id)).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let equipment: Vec<EquipmentDto> = body_json(resp).await;
    assert!(equipment.is_empty());

    let result =
        get_tank_livestock(State(test.state()), test.session.clone(), Path(tank.id)).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let livestock: Vec<LivestockDto> = body_json(resp).await;
    assert!(livestock.is_empty());

    let result = get_tank_maintenance(
        State(test.state()),
        test.session.clone(),
        Path(tank.id),
        Query(RecentParams { limit: None }),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let maintenance: Vec<MaintenanceLogDto> = body_json(resp).await;
    assert!(maintenance.is_empty());

    let result = get_tank_test_results(
        State(test.state()),
        test.session.clone(),
        Path(tank.id),
        Query(RecentParams { limit: None }),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let results: Vec<TestResultDto> = body_json(resp).await;
    assert!(results.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect record endpoints to answer 404 for another user's tank
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

    let result = get_tank_equipment(
        State(test.state()),
        test.session.clone(),
        Path(other_tank.id),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let result = get_tank_livestock(
        State(test.state()),
        test.session.clone(),
        Path(other_tank.id),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the maintenance endpoint to honor its limit, newest first
async fn maintenance_respects_limit() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user("nemo@reef.example").await?;
    let aquarium = test
        .aquarium()
        .insert_aquarium(user_model.id, "Living Room", "imperial")
        .await?;
    let tank = test.tank().insert_mock_tank(aquarium.id).await?;
    for day in 1..=3 {
        let performed_at = NaiveDate::from_ymd_opt(2026, 4, day)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        test.records()
            .insert_maintenance_log(tank.id, "Water change", performed_at)
            .await?;
    }
    SessionUserId::insert(&test.session, user_model.id).await?;

    let result = get_tank_maintenance(
        State(test.state()),
        test.session.clone(),
        Path(tank.id),
        Query(RecentParams { limit: Some(2) }),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let entries: Vec<MaintenanceLogDto> = body_json(resp).await;
    assert_eq!(entries.len(), 2);
    assert!(entries[0].performed_at > entries[1].performed_at);

    Ok(())
}
