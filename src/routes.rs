//! Router assembly and the HTTP face of the lookup pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GET /track?cedula=...` runs the same validate → lookup → render sequence
//! the embedded search flow uses, and returns the rendered view as an HTML
//! fragment. The page that hosts the search box and modal lives with the
//! dashboard templates, outside this service.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::client::TicketLookup;
use crate::error::TrackError;
use crate::render::{render_empty_state, render_results};
use crate::validate::validate_cedula;

/// Shared application state, injected into handlers via the State extractor.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn TicketLookup>,
}

impl AppState {
    #[must_use]
    pub fn new(lookup: Arc<dyn TicketLookup>) -> Self {
        Self { lookup }
    }
}

#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/track", get(track))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct TrackParams {
    #[serde(default)]
    cedula: String,
}

async fn track(State(state): State<AppState>, Query(params): Query<TrackParams>, headers: HeaderMap) -> Response {
    let cedula = match validate_cedula(&params.cedula) {
        Ok(cedula) => cedula,
        Err(e) => return error_response(&e),
    };

    let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
    match state.lookup.lookup(&cedula, cookie).await {
        Ok(reply) => {
            let view = if reply.has_results() {
                render_results(&reply.tickets, &cedula)
            } else {
                render_empty_state(&cedula)
            };
            Html(view.to_fragment()).into_response()
        }
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "ticket lookup failed");
            error_response(&e)
        }
    }
}

fn error_response(err: &TrackError) -> Response {
    (track_error_status(err), err.user_message().to_string()).into_response()
}

/// Validation failures are the caller's fault; everything else means the
/// backend conversation broke down.
fn track_error_status(err: &TrackError) -> StatusCode {
    match err {
        TrackError::EmptyInput | TrackError::TooShort => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
