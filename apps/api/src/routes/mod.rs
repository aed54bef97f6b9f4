pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use crate::admin::{self, visits::count_visit};
use crate::chirps;
use crate::state::AppState;
use crate::users;

pub fn build_router(state: AppState) -> Router {
    // Static site: every request under /app, bare /app included, counts as a
    // visit, hit or miss.
    let file_server = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(
            state.visits.clone(),
            count_visit,
        ))
        .service(ServeDir::new(&state.config.filepath_root));

    Router::new()
        .nest_service("/app", file_server)
        .route("/api/healthz", get(health::health_handler))
        .route(
            "/api/validate_chirp",
            post(chirps::handlers::handle_validate_chirp),
        )
        .route("/api/users", post(users::handlers::handle_create_user))
        .route("/admin/metrics", get(admin::handlers::handle_metrics))
        .route("/admin/reset", post(admin::handlers::handle_reset))
        .with_state(state)
}
