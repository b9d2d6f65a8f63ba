use serde::{Deserialize, Serialize};

/// The decoded payload inside a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject -- the account's numeric identifier.
    pub sub: i64,
    /// The account's username.
    pub username: String,
    /// The account's email address.
    pub email: String,
    /// The account's role (e.g. `"admin"`).
    pub role: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Unique token identifier (UUID v4) for revocation / audit.
    pub jti: String,
}
