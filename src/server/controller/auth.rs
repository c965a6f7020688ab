use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginLinkDto, LoginRequestDto},
        user::UserDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::{callback::callback_service, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
pub struct CallbackParams {
    /// Token from a sign-in link
    pub token: String,
}

/// Request a sign-in link for an email address
///
/// Issues a single-use token and returns the callback URL carrying it. No
/// account is created yet; that happens when the link is followed.
///
/// # Responses
/// - 200 (OK): Sign-in link issued for the address
/// - 400 (Bad Request): The email address failed validation
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Sign-in link issued", body = LoginLinkDto),
        (status = 400, description = "Invalid email address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let link = login_service(&state.db, &state.app_url, &dto.email).await?;

    Ok((StatusCode::OK, axum::Json(link)).into_response())
}

/// Callback route the sign-in link points at
///
/// Validates and consumes the token, creates the account on first sign-in,
/// and stores the user in the session.
///
/// # Responses
/// - 200 (OK): Signed in, returns the user
/// - 400 (Bad Request): The token was never issued
/// - 410 (Gone): The token has expired or was already used
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Unknown sign-in token", body = ErrorDto),
        (status = 410, description = "Expired or already used sign-in token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let user = callback_service(&state.db, &params.0.token).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((
        StatusCode::OK,
        axum::Json(UserDto {
            id: user.id,
            email: user.email,
        }),
    )
        .into_response())
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the home page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirecting to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Get the currently signed-in user
///
/// # Responses
/// - 200 (OK): The signed-in user
/// - 404 (Not Found): No user in session, or the session pointed at a deleted account
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed-in user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, axum::Json(user)).into_response())
}
