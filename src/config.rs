use std::env;
use anyhow::Result;
use zeroize::Zeroizing;

/// The signing secret used when `JWT_SECRET` is not configured.
///
/// Kept for development convenience; running production with this value
/// means every deployment shares a publicly known secret.
const DEFAULT_JWT_SECRET: &str = "las-tortillas-secret-key-2024";

/// The privileged username used when `ADMIN_USERNAME` is not configured.
const DEFAULT_ADMIN_USERNAME: &str = "administrador";

/// The base URL used when `BASE_URL` is not configured.
const DEFAULT_BASE_URL: &str = "https://lastortillas.restaurant";

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The HMAC-SHA256 secret used to sign and verify bearer tokens.
    pub jwt_secret: Zeroizing<String>,
    /// Whether the signing secret is the development fallback.
    pub jwt_secret_is_default: bool,
    /// The username of the single privileged credential.
    pub admin_username: String,
    /// The Argon2id PHC hash of the admin password, if configured.
    pub admin_password_hash: Option<String>,
    /// The base URL embedded in generated table links.
    pub base_url: String,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let (jwt_secret, jwt_secret_is_default) = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => (secret, false),
            _ => (DEFAULT_JWT_SECRET.to_string(), true),
        };

        Ok(Self {
            jwt_secret: Zeroizing::new(jwt_secret),
            jwt_secret_is_default,
            admin_username: env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH").ok().filter(|h| !h.is_empty()),
            base_url: env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }
}
