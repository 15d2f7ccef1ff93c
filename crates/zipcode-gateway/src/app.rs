use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    count_handler, create_handler, delete_all_handler, find_handler, health_handler,
    list_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/v1/zip-code/all", get(list_handler))
            .route("/v1/zip-code/count", get(count_handler))
            .route("/v1/zip-code/{zip}", get(find_handler))
            .route(
                "/v1/zip-code",
                post(create_handler).delete(delete_all_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
