use axum::{Router, routing::get};

pub mod quality;
pub mod system;

/// Router for all tenant-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/quality", quality::router())
}
