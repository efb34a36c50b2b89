use axum::Router;

pub mod humans;
pub mod system;

pub fn router() -> Router {
    Router::new().nest("/humans", humans::router())
}
