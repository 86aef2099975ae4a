//! Versioned JSON API

pub mod predict;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/diseases", get(predict::list_diseases))
        .route("/predict/{disease}", post(predict::predict))
}
