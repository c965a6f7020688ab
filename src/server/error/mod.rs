//! Error types for the TankWiki server application.
//!
//! This module provides the error handling system with specialized error types for
//! different domains (authentication, configuration, form validation). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic
//! error definitions with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the TankWiki server application.
///
/// Aggregates domain-specific error types and external library errors into a single
/// unified error type. `thiserror`'s `#[from]` attribute enables automatic conversion
/// from underlying error types via the `?` operator, and the `IntoResponse`
/// implementation maps each error to its HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session state, sign-in token validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Validation error for user-submitted form data.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

// In unit tests this crate is compiled separately from the `tankwiki` library
// that `tankwiki-test-utils` links against, so the crate-local `Error` is a
// distinct type from `tankwiki::server::error::Error` and needs its own
// conversion into the shared test error type.
#[cfg(test)]
impl From<Error> for tankwiki_test_utils::TestError {
    fn from(err: Error) -> Self {
        Self::ServerError(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings. Everything else is treated as an
/// internal server error (500) and logged.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error message for debugging but returns a generic message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
