//! Authentication error type and its HTTP response mappings.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while resolving the signed-in user or completing a sign-in link.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    #[error("User ID is not present in session")]
    UserNotInSession,
    /// Session carries a user ID that no longer exists in the database.
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    /// Sign-in token does not match any issued token.
    #[error("Sign-in token does not match any issued sign-in link")]
    SignInTokenInvalid,
    /// Sign-in token exists but its expiry has passed.
    #[error("Sign-in token has expired")]
    SignInTokenExpired,
    /// Sign-in token exists but was already used once.
    #[error("Sign-in token has already been consumed")]
    SignInTokenConsumed,
}

impl AuthError {
    fn user_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }

    fn sign_in_failed(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Maps authentication failures to their HTTP responses.
///
/// Session misses are a routine part of rendering logged-out pages, so they are
/// logged at debug level rather than treated as errors.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                Self::user_not_found()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::user_not_found()
            }
            Self::SignInTokenInvalid => {
                tracing::debug!("{}", self);

                Self::sign_in_failed(
                    StatusCode::BAD_REQUEST,
                    "That sign-in link is not valid, please request a new one.",
                )
            }
            Self::SignInTokenExpired => {
                tracing::debug!("{}", self);

                Self::sign_in_failed(
                    StatusCode::GONE,
                    "That sign-in link has expired, please request a new one.",
                )
            }
            Self::SignInTokenConsumed => {
                tracing::debug!("{}", self);

                Self::sign_in_failed(
                    StatusCode::GONE,
                    "That sign-in link was already used, please request a new one.",
                )
            }
        }
    }
}
