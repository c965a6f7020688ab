use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        equipment::EquipmentDto,
        livestock::LivestockDto,
        maintenance::MaintenanceLogDto,
        tank::{CreateTankDto, TankDto},
        test_result::TestResultDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        data::{
            equipment::EquipmentRepository, livestock::LivestockRepository,
            maintenance_log::MaintenanceLogRepository, test_result::TestResultRepository,
        },
        error::Error,
        model::app::AppState,
        service::tank::TankService,
    },
};

pub static TANK_TAG: &str = "tank";

/// How many maintenance entries or test results are returned when the request
/// does not ask for a specific amount.
pub const DEFAULT_RECENT_LIMIT: u64 = 5;

#[derive(Deserialize, IntoParams)]
pub struct RecentParams {
    /// Maximum number of entries to return, newest first
    pub limit: Option<u64>,
}

fn tank_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(ErrorDto {
            error: "Tank not found".to_string(),
        }),
    )
        .into_response()
}

/// Get all tanks owned by the signed-in user
///
/// # Responses
/// - 200 (OK): The user's tanks across all aquariums, ordered by name
/// - 404 (Not Found): No user in session
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/tanks",
    tag = TANK_TAG,
    responses(
        (status = 200, description = "The user's tanks", body = Vec<TankDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tanks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tanks = TankService::new(&state.db).get_tanks(user.id).await?;

    Ok((StatusCode::OK, axum::Json(tanks)).into_response())
}

/// Create a tank in one of the signed-in user's aquariums
///
/// # Responses
/// - 201 (Created): The created tank
/// - 400 (Bad Request): A form field failed validation
/// - 404 (Not Found): No user in session, or the aquarium is not theirs
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    post,
    path = "/api/tanks",
    tag = TANK_TAG,
    request_body = CreateTankDto,
    responses(
        (status = 201, description = "Tank created", body = TankDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "User or aquarium not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tank(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateTankDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tank = TankService::new(&state.db).create_tank(user.id, dto).await?;

    Ok((StatusCode::CREATED, axum::Json(tank)).into_response())
}

/// Get a single tank owned by the signed-in user
///
/// # Responses
/// - 200 (OK): The tank
/// - 404 (Not Found): No user in session, or the tank is not theirs
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/tanks/{id}",
    tag = TANK_TAG,
    params(("id" = i32, Path, description = "Tank ID")),
    responses(
        (status = 200, description = "The tank", body = TankDto),
        (status = 404, description = "User or tank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tank(
    State(state): State<AppState>,
    session: Session,
    Path(tank_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let Some(tank) = TankService::new(&state.db).get_tank(tank_id, user.id).await? else {
        return Ok(tank_not_found());
    };

    Ok((StatusCode::OK, axum::Json(tank)).into_response())
}

/// Get the equipment installed in a tank
///
/// # Responses
/// - 200 (OK): Equipment ordered newest install date first
/// - 404 (Not Found): No user in session, or the tank is not theirs
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/tanks/{id}/equipment",
    tag = TANK_TAG,
    params(("id" = i32, Path, description = "Tank ID")),
    responses(
        (status = 200, description = "The tank's equipment", body = Vec<EquipmentDto>),
        (status = 404, description = "User or tank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tank_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(tank_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if TankService::new(&state.db)
        .get_tank(tank_id, user.id)
        .await?
        .is_none()
    {
        return Ok(tank_not_found());
    }

    let equipment = EquipmentRepository::new(&state.db)
        .get_many_by_tank_id(tank_id)
        .await?;

    let equipment_dtos: Vec<EquipmentDto> = equipment
        .into_iter()
        .map(|item| EquipmentDto {
            id: item.id,
            name: item.name,
            equipment_type: item.equipment_type,
            status: item.status,
            install_date: item.install_date,
            notes: item.notes,
        })
        .collect();

    Ok((StatusCode::OK, axum::Json(equipment_dtos)).into_response())
}

/// Get the livestock kept in a tank
///
/// # Responses
/// - 200 (OK): Livestock ordered newest addition first
/// - 404 (Not Found): No user in session, or the tank is not theirs
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/tanks/{id}/livestock",
    tag = TANK_TAG,
    params(("id" = i32, Path, description = "Tank ID")),
    responses(
        (status = 200, description = "The tank's livestock", body = Vec<LivestockDto>),
        (status = 404, description = "User or tank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tank_livestock(
    State(state): State<AppState>,
    session: Session,
    Path(tank_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if TankService::new(&state.db)
        .get_tank(tank_id, user.id)
        .await?
        .is_none()
    {
        return Ok(tank_not_found());
    }

    let livestock = LivestockRepository::new(&state.db)
        .get_many_by_tank_id(tank_id)
        .await?;

    let livestock_dtos: Vec<LivestockDto> = livestock
        .into_iter()
        .map(|row| LivestockDto {
            id: row.id,
            species: row.species,
            common_name: row.common_name,
            quantity: row.quantity,
            health_status: row.health_status,
            date_added: row.date_added,
            notes: row.notes,
        })
        .collect();

    Ok((StatusCode::OK, axum::Json(livestock_dtos)).into_response())
}

/// Get the most recent maintenance entries for a tank
///
/// # Responses
/// - 200 (OK): Maintenance entries, newest first
/// - 404 (Not Found): No user in session, or the tank is not theirs
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/tanks/{id}/maintenance",
    tag = TANK_TAG,
    params(("id" = i32, Path, description = "Tank ID"), RecentParams),
    responses(
        (status = 200, description = "Recent maintenance entries", body = Vec<MaintenanceLogDto>),
        (status = 404, description = "User or tank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tank_maintenance(
    State(state): State<AppState>,
    session: Session,
    Path(tank_id): Path<i32>,
    params: Query<RecentParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if TankService::new(&state.db)
        .get_tank(tank_id, user.id)
        .await?
        .is_none()
    {
        return Ok(tank_not_found());
    }

    let limit = params.0.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let entries = MaintenanceLogRepository::new(&state.db)
        .get_recent_by_tank_id(tank_id, limit)
        .await?;

    let entry_dtos: Vec<MaintenanceLogDto> = entries
        .into_iter()
        .map(|entry| MaintenanceLogDto {
            id: entry.id,
            task: entry.task,
            performed_at: entry.performed_at,
            notes: entry.notes,
        })
        .collect();

    Ok((StatusCode::OK, axum::Json(entry_dtos)).into_response())
}

/// Get the most recent water test results for a tank
///
/// # Responses
/// - 200 (OK): Test results, newest first
/// - 404 (Not Found): No user in session, or the tank is not theirs
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/tanks/{id}/test-results",
    tag = TANK_TAG,
    params(("id" = i32, Path, description = "Tank ID"), RecentParams),
    responses(
        (status = 200, description = "Recent water test results", body = Vec<TestResultDto>),
        (status = 404, description = "User or tank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tank_test_results(
    State(state): State<AppState>,
    session: Session,
    Path(tank_id): Path<i32>,
    params: Query<RecentParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    if TankService::new(&state.db)
        .get_tank(tank_id, user.id)
        .await?
        .is_none()
    {
        return Ok(tank_not_found());
    }

    let limit = params.0.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let results = TestResultRepository::new(&state.db)
        .get_recent_by_tank_id(tank_id, limit)
        .await?;

    let result_dtos: Vec<TestResultDto> = results
        .into_iter()
        .map(|result| TestResultDto {
            id: result.id,
            test_type: result.test_type,
            value: result.value,
            unit: result.unit,
            tested_at: result.tested_at,
            notes: result.notes,
        })
        .collect();

    Ok((StatusCode::OK, axum::Json(result_dtos)).into_response())
}
