//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers every endpoint together with its OpenAPI specification and serves Swagger UI
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET|POST|PUT /leagues/` - List, create, and update leagues
/// - `GET /leagues/types` - League types
/// - `GET|DELETE /leagues/{id}` - Get or delete a league
/// - `GET /leagues/seasons/{seasonId}` - Leagues of a season
/// - `GET /leagues/name/{name}` - League by name
/// - `POST|DELETE /leagues/player` - Join or leave a league
/// - `POST /leagues/player/admin` - Admin adds a player
/// - `GET /leagues/player/{id}` - Leagues of a player
/// - `GET /leagues/player/leagueid/{leagueId}` - Players of a league
/// - `POST|PUT /seasons/` - Create and update seasons
/// - `GET /seasons/current` - Seasons running during a year
/// - `GET /seasons/type/{leagueType}` - Seasons of a league type
/// - `DELETE /seasons/{id}` - Delete a season
/// - `GET /health` - Liveness check
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "League", description = "League, season, and membership API"), tags(
        (name = controller::league::LEAGUE_TAG, description = "League API routes"),
        (name = controller::membership::MEMBERSHIP_TAG, description = "Membership API routes"),
        (name = controller::season::SEASON_TAG, description = "Season API routes"),
        (name = controller::health::HEALTH_TAG, description = "Health check"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::league::get_all_leagues,
            controller::league::create_league,
            controller::league::update_league
        ))
        .routes(routes!(controller::league::get_league_types))
        .routes(routes!(
            controller::league::get_league_by_id,
            controller::league::delete_league
        ))
        .routes(routes!(controller::league::get_leagues_by_season))
        .routes(routes!(controller::league::get_league_by_name))
        .routes(routes!(
            controller::membership::join_league,
            controller::membership::leave_league
        ))
        .routes(routes!(controller::membership::add_player_as_admin))
        .routes(routes!(controller::membership::get_leagues_for_player))
        .routes(routes!(controller::membership::get_players_in_league))
        .routes(routes!(
            controller::season::create_season,
            controller::season::update_season
        ))
        .routes(routes!(controller::season::get_current_seasons))
        .routes(routes!(controller::season::get_seasons_by_league_type))
        .routes(routes!(controller::season::delete_season))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
