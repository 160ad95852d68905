use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::sport;
use crate::state::AppState;

/// Mount sport CRUD and per-sport config routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sport::create).get(sport::list))
        .route("/code/{code}", get(sport::get_by_code))
        .route(
            "/{id}",
            get(sport::get_by_id)
                .put(sport::update)
                .delete(sport::delete),
        )
        .route(
            "/{id}/configs",
            post(sport::create_config).get(sport::list_configs),
        )
        .route(
            "/{id}/configs/{config_id}",
            put(sport::update_config).delete(sport::delete_config),
        )
}
