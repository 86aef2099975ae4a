//! Launcher front door: every request is sent on to the UI server

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use super::middleware::logging_middleware;

/// Where redirects point
#[derive(Debug, Clone)]
pub struct RedirectState {
    /// Fixed `host[:port]`; wins over the Host header when set
    pub redirect_host: Option<String>,
    /// Port the UI process listens on
    pub ui_port: u16,
}

impl RedirectState {
    pub fn new(redirect_host: Option<String>, ui_port: u16) -> Self {
        Self {
            redirect_host: redirect_host.filter(|h| !h.trim().is_empty()),
            ui_port,
        }
    }

    /// `redirect_host` as given, else the requested hostname on the UI port
    fn target(&self, headers: &HeaderMap) -> String {
        let host = match &self.redirect_host {
            Some(host) => host.clone(),
            None => {
                let hostname = headers
                    .get(header::HOST)
                    .and_then(|v| v.to_str().ok())
                    .map(strip_port)
                    .filter(|h| !h.is_empty())
                    .unwrap_or("localhost");
                format!("{}:{}", hostname, self.ui_port)
            }
        };

        format!("http://{}/", host)
    }
}

/// Hostname part of a Host header value; IPv6 literals keep their brackets
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

async fn redirect(State(state): State<RedirectState>, headers: HeaderMap) -> Response {
    let location = state.target(&headers);

    match HeaderValue::from_str(&location) {
        Ok(value) => {
            debug!(location = %location, "Redirecting to UI");
            (StatusCode::FOUND, [(header::LOCATION, value)]).into_response()
        }
        Err(e) => {
            error!(location = %location, error = %e, "Failed to build redirect");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error starting UI: {}", e),
            )
                .into_response()
        }
    }
}

/// Answers any method on any path with a redirect
pub fn create_redirect_router(state: RedirectState) -> Router {
    Router::new()
        .fallback(redirect)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
