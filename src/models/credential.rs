use serde::Serialize;
use subtle::ConstantTimeEq;

/// The email address of the built-in admin account.
const ADMIN_EMAIL: &str = "admin@lastortillas.restaurant";

/// The display name of the built-in admin account.
const ADMIN_DISPLAY_NAME: &str = "Administrador";

/// Represents the stored privileged credential checked at login.
///
/// Exactly one instance exists today; it is loaded from process
/// configuration at startup and never mutated.
#[derive(Clone, Debug)]
pub struct AdminCredential {
    /// The numeric identifier of the account.
    pub id: i64,
    /// The account's username.
    pub username: String,
    /// The account's email address.
    pub email: String,
    /// The account's display name.
    pub name: String,
    /// The account's role.
    pub role: String,
    /// The Argon2id PHC hash of the account's password.
    pub password_hash: String,
}

/// The non-secret subset of a credential, returned to clients after login.
#[derive(Clone, Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&AdminCredential> for PublicUser {
    fn from(credential: &AdminCredential) -> Self {
        Self {
            id: credential.id,
            username: credential.username.clone(),
            email: credential.email.clone(),
            name: credential.name.clone(),
            role: credential.role.clone(),
        }
    }
}

/// A read-only lookup over the configured credentials.
///
/// Modeled as a lookup capability rather than a literal constant so a
/// multi-user backend can replace it without touching verification logic.
#[derive(Clone, Debug)]
pub struct CredentialStore {
    credentials: Vec<AdminCredential>,
}

impl CredentialStore {
    /// Creates a store holding the single configured admin credential.
    pub fn single_admin(username: String, password_hash: String) -> Self {
        Self {
            credentials: vec![AdminCredential {
                id: 1,
                username,
                email: ADMIN_EMAIL.to_string(),
                name: ADMIN_DISPLAY_NAME.to_string(),
                role: "admin".to_string(),
                password_hash,
            }],
        }
    }

    /// Looks up a credential by username.
    ///
    /// The comparison is constant-time so response timing does not reveal
    /// which usernames exist.
    pub fn lookup(&self, username: &str) -> Option<&AdminCredential> {
        self.credentials
            .iter()
            .find(|c| c.username.as_bytes().ct_eq(username.as_bytes()).into())
    }
}
