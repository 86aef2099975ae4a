//! Disease page handlers

use std::collections::HashMap;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{error, warn};

use super::render::DiseasePage;
use crate::api::state::AppState;
use crate::domain::{Disease, DomainError};

/// GET / opens the first page
pub async fn index() -> Redirect {
    Redirect::to(&format!("/{}", Disease::Diabetes.slug()))
}

/// GET /{disease}
pub async fn show(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match slug.parse::<Disease>() {
        Ok(disease) => render(&state, DiseasePage::blank(disease)),
        Err(_) => not_found(&state, &slug),
    }
}

/// POST /{disease}
pub async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let Ok(disease) = slug.parse::<Disease>() else {
        return not_found(&state, &slug);
    };

    let values = collect_values(disease, &form);
    let page = DiseasePage::with_values(disease, &values);

    let page = match state.prediction_service.assess(disease, &values).await {
        Ok(assessment) => page.with_assessment(assessment),
        Err(DomainError::Validation { message }) => page.with_error(message),
        Err(err) => {
            warn!(disease = %disease, error = %err, "Prediction failed");
            page.with_error(format!("An error occurred: {}", err))
        }
    };

    render(&state, page)
}

/// Submitted values in field order; absent fields read as empty
fn collect_values(disease: Disease, form: &HashMap<String, String>) -> Vec<String> {
    disease
        .fields()
        .iter()
        .map(|field| form.get(field.key).cloned().unwrap_or_default())
        .collect()
}

fn render(state: &AppState, page: DiseasePage) -> Response {
    match state.pages.disease_page(&page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure(e),
    }
}

fn not_found(state: &AppState, slug: &str) -> Response {
    match state.pages.not_found_page(slug) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => render_failure(e),
    }
}

fn render_failure(e: minijinja::Error) -> Response {
    error!(error = %e, "Failed to render page");
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
}
