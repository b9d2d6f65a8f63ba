use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    services::token,
    state::AppState,
};

/// Extracts the bearer token from the `Authorization` header.
///
/// Returns an error for a missing header, a non-`Bearer` scheme, or an
/// empty token segment; all three collapse to the same rejection so callers
/// cannot probe which part was wrong.
fn extract_bearer_token(request: &Request<Body>) -> Result<&str, AppError> {
    let header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| AppError::Authentication("Token not provided".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| AppError::Authentication("Token verification error".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Authentication("Token not provided".to_string()))
}

/// A middleware that requires a valid bearer token to be present.
///
/// Re-evaluated on every request; there is no session state between
/// requests. On success the decoded claims are attached to the request
/// extensions for downstream handlers.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `request` - The incoming request.
/// * `next` - The next middleware in the chain.
///
/// # Returns
///
/// A `Response` or an `AppError`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    tracing::debug!("🔐 Checking authentication...");

    let bearer = extract_bearer_token(&request)?;

    let claims = token::verify_token(bearer, &state.config.jwt_secret, state.revocation.as_ref())
        .ok_or_else(|| {
            tracing::warn!("❌ Bearer token failed verification");
            AppError::Authentication("Invalid token".to_string())
        })?;

    tracing::debug!("✅ User authenticated: {}", claims.sub);

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
