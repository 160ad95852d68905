pub mod health;
pub mod sport;
pub mod tenant;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tenant                          create (POST), list (GET)
/// /tenant/code/{code}              get by code
/// /tenant/{id}                     get, update, delete
/// /tenant/{id}/sports              bulk register (POST), list (GET)
/// /tenant/{id}/sports/{sport_id}   update mapping (PUT)
///
/// /sport                           create (POST), list (GET)
/// /sport/code/{code}               get by code
/// /sport/{id}                      get, update, delete
/// /sport/{id}/configs              create (POST), list (GET)
/// /sport/{id}/configs/{config_id}  update (PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tenant", tenant::router())
        .nest("/sport", sport::router())
}
