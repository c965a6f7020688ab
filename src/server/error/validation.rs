//! Validation error type for user-submitted form data.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Server-side re-checks of the create forms.
///
/// The client validates before submitting, so hitting one of these normally
/// means a request bypassed the UI. Messages match the client's wording so
/// they can be shown verbatim either way.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Carries a message produced by the shared form validators.
    #[error("{0}")]
    Invalid(String),
    /// Aquarium name missing or blank.
    #[error("Aquarium name is required")]
    AquariumNameRequired,
    /// Tank name missing or blank.
    #[error("Tank name is required")]
    TankNameRequired,
    /// Tank volume not a positive finite number.
    #[error("Please enter a valid volume")]
    VolumeNotPositive,
    /// Tank type not selected.
    #[error("Please select a tank type")]
    TankTypeRequired,
    /// Tank type is other but no custom label was given.
    #[error("Please specify the custom tank type")]
    CustomTypeRequired,
    /// Referenced aquarium does not exist or belongs to another user.
    #[error("Aquarium not found")]
    AquariumNotFound,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::AquariumNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
