use axum::Router;

pub mod organizations;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/organizations", organizations::router())
        .route("/organizations/", organizations::collection())
}
