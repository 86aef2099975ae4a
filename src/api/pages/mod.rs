//! Server-rendered prediction pages

mod handlers;
mod render;

pub use render::{DiseasePage, PageRenderer};

use axum::{routing::get, Router};

use super::state::AppState;

pub fn create_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/{disease}", get(handlers::show).post(handlers::submit))
}
