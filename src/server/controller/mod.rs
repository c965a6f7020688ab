//! HTTP controller endpoints for the TankWiki web API.
//!
//! This module contains Axum handlers for authentication, aquariums, tanks,
//! and the per-tank record collections. Controllers handle HTTP requests,
//! validate inputs, interact with services, and return appropriate HTTP
//! responses. They integrate with tower-sessions for session management and
//! use utoipa for OpenAPI documentation.

pub mod aquarium;
pub mod auth;
pub mod livestock;
pub mod tank;
pub mod util;
