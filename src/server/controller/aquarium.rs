use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        aquarium::{AquariumDto, CreateAquariumDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::aquarium::AquariumService,
    },
};

pub static AQUARIUM_TAG: &str = "aquarium";

/// Get all aquariums owned by the signed-in user
///
/// # Responses
/// - 200 (OK): The user's aquariums ordered by name
/// - 404 (Not Found): No user in session
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/aquariums",
    tag = AQUARIUM_TAG,
    responses(
        (status = 200, description = "The user's aquariums", body = Vec<AquariumDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aquariums(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let aquariums = AquariumService::new(&state.db).get_aquariums(user.id).await?;

    Ok((StatusCode::OK, axum::Json(aquariums)).into_response())
}

/// Create an aquarium for the signed-in user
///
/// # Responses
/// - 201 (Created): The created aquarium
/// - 400 (Bad Request): The aquarium name was blank
/// - 404 (Not Found): No user in session
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    post,
    path = "/api/aquariums",
    tag = AQUARIUM_TAG,
    request_body = CreateAquariumDto,
    responses(
        (status = 201, description = "Aquarium created", body = AquariumDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_aquarium(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateAquariumDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let aquarium = AquariumService::new(&state.db)
        .create_aquarium(user.id, dto)
        .await?;

    Ok((StatusCode::CREATED, axum::Json(aquarium)).into_response())
}
