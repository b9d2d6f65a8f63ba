use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::claims::Claims,
    models::credential::PublicUser,
    services::auth as auth_service,
    services::token,
    state::AppState,
    validation::auth::validate_login,
};

/// The request payload for admin login.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// The response payload for a successful login.
#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
    #[serde(rename = "redirectTo")]
    pub redirect_to: String,
}

/// The identity subset echoed back by the verify endpoint.
#[derive(Serialize)]
pub struct VerifiedUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// The response payload for the verify endpoint.
#[derive(Serialize)]
pub struct VerifyResponse {
    pub user: VerifiedUser,
}

/// The response payload for logout.
#[derive(Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Handles admin login.
///
/// Issues a 7-day bearer token when the submitted pair matches the
/// configured credential. Rejections are uniform for unknown usernames and
/// wrong passwords.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response> {
    tracing::info!("🔐 Login attempt for username: {}", payload.username);

    validate_login(&payload.username, &payload.password)?;

    let credential = auth_service::authenticate(
        &state.credentials,
        &payload.username,
        &payload.password,
    )?;

    let token = token::issue_token(credential, &state.config.jwt_secret)?;

    tracing::info!("✅ Login successful for user: {}", credential.id);

    let response = LoginResponse {
        token,
        user: PublicUser::from(credential),
        redirect_to: "/admin".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles token verification for an already-authenticated request.
///
/// The `require_auth` middleware has validated the token and attached the
/// decoded claims; this endpoint only echoes the identity back.
#[axum::debug_handler]
pub async fn verify(Extension(claims): Extension<Claims>) -> Result<Response> {
    tracing::debug!("🎫 Token verified for user: {}", claims.sub);

    let response = VerifyResponse {
        user: VerifiedUser {
            id: claims.sub,
            username: claims.username,
            email: claims.email,
            role: claims.role,
        },
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles logout.
///
/// Verification is stateless and signature-based, so there is no
/// server-side token store to clear; the client is told to discard its
/// copy. An effective logout needs a real `RevocationCheck` collaborator
/// wired into `AppState`.
#[axum::debug_handler]
pub async fn logout() -> Result<Response> {
    tracing::info!("👋 Logout requested");

    let response = LogoutResponse {
        message: "Logout successful. Discard the token on the client.".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}
