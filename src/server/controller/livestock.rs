use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, livestock::LivestockSummaryDto},
    server::{
        controller::util::get_user::get_user_from_session,
        data::livestock::LivestockRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static LIVESTOCK_TAG: &str = "livestock";

/// Get livestock quantities across all of the signed-in user's tanks
///
/// Returns one row per livestock entry so the client can total quantities per
/// tank for the dashboard.
///
/// # Responses
/// - 200 (OK): Livestock summary rows
/// - 404 (Not Found): No user in session
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/livestock",
    tag = LIVESTOCK_TAG,
    responses(
        (status = 200, description = "Livestock summary rows", body = Vec<LivestockSummaryDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_livestock_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let livestock = LivestockRepository::new(&state.db)
        .get_many_by_user_id(user.id)
        .await?;

    let summary_dtos: Vec<LivestockSummaryDto> = livestock
        .into_iter()
        .map(|row| LivestockSummaryDto {
            tank_id: row.tank_id,
            quantity: row.quantity,
        })
        .collect();

    Ok((StatusCode::OK, axum::Json(summary_dtos)).into_response())
}
