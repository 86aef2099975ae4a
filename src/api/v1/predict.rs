//! Prediction endpoint handlers

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, DiseasesResponse, Json, PredictRequest, PredictResponse};
use crate::domain::Disease;

/// GET /v1/diseases
pub async fn list_diseases() -> Json<DiseasesResponse> {
    Json(DiseasesResponse::all())
}

/// POST /v1/predict/{disease}
pub async fn predict(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let disease: Disease = slug.parse()?;
    let inputs = request.into_texts();

    debug!(disease = %disease, inputs = inputs.len(), "Prediction requested");

    let assessment = state
        .prediction_service
        .assess(disease, &inputs)
        .await?;

    Ok(Json(PredictResponse::from(assessment)))
}
