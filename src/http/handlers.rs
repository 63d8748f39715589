//! Endpoint handlers for the form backend.

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::Json;
use std::net::SocketAddr;

use crate::http::response::{ApiError, HealthResponse, SubmissionsResponse, SubmitResponse};
use crate::http::server::AppState;
use crate::http::X_REQUEST_ID;
use crate::submissions::types::utc_timestamp;
use crate::submissions::{FormPayload, Submission};

/// `POST /submit-form`
///
/// Validates the three required fields, stamps the record with receipt time
/// and peer address, and appends it to the store.
pub async fn submit_form(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<FormPayload>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(
            request_id = %request_id,
            error = %rejection,
            "Rejected submission body"
        );
        ApiError::Validation("Request body must be a JSON object".to_string())
    })?;

    let fields = payload.validate()?;
    let submission = Submission::record(fields, addr.ip());

    state.store.append(submission.clone()).await;
    let stored = state.store.len().await;

    tracing::info!(
        request_id = %request_id,
        name = %submission.name,
        email = %submission.email,
        ip = %submission.ip,
        stored,
        "Form submission received"
    );

    Ok(Json(SubmitResponse {
        success: true,
        message: "Form submitted successfully! I will get back to you soon.",
        data: submission,
    }))
}

/// `GET /submissions`
///
/// Returns the full in-memory sequence verbatim, oldest first.
pub async fn list_submissions(State(state): State<AppState>) -> Json<SubmissionsResponse> {
    let submissions = state.store.snapshot().await;
    Json(SubmissionsResponse {
        success: true,
        count: submissions.len(),
        submissions,
    })
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Form backend is running",
        timestamp: utc_timestamp(),
    })
}

/// `GET /` — service metadata and route listing.
pub async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Portfolio Form Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "submitForm": "POST /submit-form",
            "viewSubmissions": "GET /submissions",
            "healthCheck": "GET /health",
        },
    }))
}
