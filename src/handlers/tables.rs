use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    services::table_link,
    state::AppState,
    validation::tables::validate_table_identity,
};

/// Default freshness budget for code validation, in seconds (24 hours).
const DEFAULT_MAX_AGE_SECS: i64 = 86400;

/// The request payload for minting a table link.
#[derive(Deserialize, Debug)]
pub struct CreateLinkRequest {
    pub table_id: String,
    pub location_id: String,
    pub table_number: i32,
    /// Overrides the configured base URL, e.g. for staging printouts.
    pub base_url: Option<String>,
}

/// Query parameters for the QR rendering endpoints.
#[derive(Deserialize, Debug)]
pub struct RenderLinkParams {
    pub table: String,
    pub location: String,
    pub t: i32,
}

/// The request payload for validating a scanned code.
#[derive(Deserialize, Debug)]
pub struct ValidateCodeRequest {
    #[serde(default)]
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub max_age_secs: Option<i64>,
}

/// The response payload for code validation.
#[derive(Serialize)]
pub struct ValidateCodeResponse {
    pub valid: bool,
}

/// Mints a fresh deep link for one table.
#[axum::debug_handler]
pub async fn create_link(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Response> {
    tracing::info!(
        "🔗 Link requested for table {} at location {}",
        payload.table_id,
        payload.location_id
    );

    validate_table_identity(&payload.table_id, &payload.location_id)?;

    let base_url = payload.base_url.as_deref().unwrap_or(&state.config.base_url);
    let link = table_link::generate_table_link(
        &payload.table_id,
        &payload.location_id,
        payload.table_number,
        base_url,
    );

    Ok((StatusCode::OK, Json(link)).into_response())
}

/// Mints a fresh link and renders it as a PNG QR code.
///
/// Every call mints a new code; rendering the same table twice yields two
/// different images.
#[axum::debug_handler]
pub async fn link_image(
    State(state): State<AppState>,
    Query(params): Query<RenderLinkParams>,
) -> Result<Response> {
    validate_table_identity(&params.table, &params.location)?;

    let link = table_link::generate_table_link(
        &params.table,
        &params.location,
        params.t,
        &state.config.base_url,
    );
    let png = table_link::render_png(&link.url)?;

    Ok((
        StatusCode::OK,
        [(http::header::CONTENT_TYPE, "image/png")],
        png,
    )
        .into_response())
}

/// Mints a fresh link and renders it as an SVG QR code for print.
#[axum::debug_handler]
pub async fn link_svg(
    State(state): State<AppState>,
    Query(params): Query<RenderLinkParams>,
) -> Result<Response> {
    validate_table_identity(&params.table, &params.location)?;

    let link = table_link::generate_table_link(
        &params.table,
        &params.location,
        params.t,
        &state.config.base_url,
    );
    let markup = table_link::render_svg(&link.url)?;

    Ok((
        StatusCode::OK,
        [(http::header::CONTENT_TYPE, "image/svg+xml")],
        markup,
    )
        .into_response())
}

/// Checks a scanned code's shape and freshness.
///
/// A weak check by design: nothing ties the code to the table it was
/// minted for, so this endpoint must not gate anything security-sensitive.
#[axum::debug_handler]
pub async fn validate_link(
    Json(payload): Json<ValidateCodeRequest>,
) -> Result<Response> {
    let max_age = Duration::seconds(payload.max_age_secs.unwrap_or(DEFAULT_MAX_AGE_SECS));
    let valid = table_link::validate_code(&payload.code, payload.issued_at, max_age);

    tracing::debug!("🔎 Code validation result: {}", valid);

    Ok((StatusCode::OK, Json(ValidateCodeResponse { valid })).into_response())
}
