use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::models::credential::CredentialStore;
use crate::services::auth;
use crate::services::token::{NoRevocation, RevocationCheck};

/// The admin password used when `ADMIN_PASSWORD_HASH` is not configured.
///
/// A development convenience only; the matching hash is computed once at
/// startup so the login path always verifies against an Argon2id hash.
const DEFAULT_ADMIN_PASSWORD: &str = "LasTortillas2024!";

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Config,
    /// The configured credential store.
    pub credentials: CredentialStore,
    /// The token revocation collaborator consulted during verification.
    pub revocation: Arc<dyn RevocationCheck>,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub fn new(config: &Config) -> Result<Self> {
        let password_hash = match &config.admin_password_hash {
            Some(hash) => hash.clone(),
            None => {
                tracing::warn!(
                    "⚠️ ADMIN_PASSWORD_HASH not set - falling back to the development password"
                );
                auth::hash_password(DEFAULT_ADMIN_PASSWORD)?
            }
        };

        let credentials =
            CredentialStore::single_admin(config.admin_username.clone(), password_hash);
        tracing::info!("✅ Credential store initialized (single admin)");

        Ok(AppState {
            config: config.clone(),
            credentials,
            revocation: Arc::new(NoRevocation),
        })
    }
}
