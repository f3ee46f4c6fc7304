//! shoplist-server
//!
//! JSON HTTP API over a whole-list store. Every request is an independent
//! read-modify-write of the full list; concurrent writers are not
//! coordinated and the last write wins.

pub mod audit;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

pub const LIST_PATH: &str = "/api/shopping-list";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(LIST_PATH, get(routes::shopping_list::list_items))
        .route(LIST_PATH, post(routes::shopping_list::create_item))
        .route(LIST_PATH, delete(routes::shopping_list::missing_id))
        .route("/api/shopping-list/", delete(routes::shopping_list::missing_id))
        .route(
            "/api/shopping-list/{id}",
            delete(routes::shopping_list::delete_item),
        )
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::request_log::log_request))
                .layer(CatchPanicLayer::custom(error::panic_response)),
        )
        .with_state(state)
}
