//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Request a sign-in link for an email address
/// - `GET /api/auth/callback` - Exchange a sign-in token for a session
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/aquariums` - List the user's aquariums
/// - `POST /api/aquariums` - Create an aquarium
/// - `GET /api/tanks` - List the user's tanks
/// - `POST /api/tanks` - Create a tank
/// - `GET /api/tanks/{id}` - Get a single tank
/// - `GET /api/tanks/{id}/equipment` - List a tank's equipment
/// - `GET /api/tanks/{id}/livestock` - List a tank's livestock
/// - `GET /api/tanks/{id}/maintenance` - Recent maintenance entries
/// - `GET /api/tanks/{id}/test-results` - Recent water test results
/// - `GET /api/livestock` - Livestock totals across the user's tanks
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json`, and
/// interactive Swagger UI documentation is served at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "TankWiki", description = "TankWiki API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::aquarium::AQUARIUM_TAG, description = "Aquarium API routes"),
        (name = controller::tank::TANK_TAG, description = "Tank API routes"),
        (name = controller::livestock::LIVESTOCK_TAG, description = "Livestock API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::aquarium::get_aquariums,
            controller::aquarium::create_aquarium
        ))
        .routes(routes!(
            controller::tank::get_tanks,
            controller::tank::create_tank
        ))
        .routes(routes!(controller::tank::get_tank))
        .routes(routes!(controller::tank::get_tank_equipment))
        .routes(routes!(controller::tank::get_tank_livestock))
        .routes(routes!(controller::tank::get_tank_maintenance))
        .routes(routes!(controller::tank::get_tank_test_results))
        .routes(routes!(controller::livestock::get_livestock_summary))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
