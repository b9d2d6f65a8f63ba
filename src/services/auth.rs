use crate::error::{AppError, Result};
use crate::models::credential::{AdminCredential, CredentialStore};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder,
};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

/// The memory cost for Argon2 in MB.
const ARGON2_MEMORY_MB: u32 = 19;
/// The number of iterations for Argon2.
const ARGON2_ITERATIONS: u32 = 3;
/// The parallelism factor for Argon2.
const ARGON2_PARALLELISM: u32 = 4;

/// The rejection message for bad credentials.
///
/// Deliberately identical for unknown usernames and wrong passwords so the
/// response does not reveal which of the two was wrong.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Hashes a password using Argon2id.
///
/// # Arguments
///
/// * `password` - The password to hash.
///
/// # Returns
///
/// A `Result` containing the PHC-format hash string.
pub fn hash_password(password: &str) -> Result<String> {
    let mut password_bytes = password.as_bytes().to_vec();

    let mut salt_bytes = [0u8; 16];
    OsRng.fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Internal(format!("Salt encoding error: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        ParamsBuilder::new()
            .m_cost(ARGON2_MEMORY_MB * 1024)
            .t_cost(ARGON2_ITERATIONS)
            .p_cost(ARGON2_PARALLELISM)
            .build()
            .map_err(|e| AppError::Internal(format!("Argon2 params: {}", e)))?,
    );

    let password_hash = argon2
        .hash_password(&password_bytes, &salt)
        .map_err(|e| AppError::Internal(format!("Argon2 hash error: {}", e)))?
        .to_string();

    password_bytes.zeroize();
    tracing::debug!("Password hashed successfully with Argon2");
    Ok(password_hash)
}

/// Verifies a password against a hash.
///
/// # Arguments
///
/// * `password` - The password to verify.
/// * `hash` - The PHC-format hash to verify against.
///
/// # Returns
///
/// A `Result` containing `true` if the password is valid, `false` otherwise.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let mut password_bytes = password.as_bytes().to_vec();
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Hash parse error: {}", e)))?;
    let argon2 = Argon2::default();
    let result = argon2
        .verify_password(&password_bytes, &parsed_hash)
        .is_ok();

    password_bytes.zeroize();
    tracing::debug!("Password verification completed");
    Ok(result)
}

/// Authenticates a username/password pair against the credential store.
///
/// # Arguments
///
/// * `store` - The configured credential store.
/// * `username` - The submitted username.
/// * `password` - The submitted password.
///
/// # Returns
///
/// A `Result` containing the matched `AdminCredential`.
pub fn authenticate<'a>(
    store: &'a CredentialStore,
    username: &str,
    password: &str,
) -> Result<&'a AdminCredential> {
    tracing::debug!("🔐 Authenticating user: {}", username);

    let credential = store
        .lookup(username)
        .ok_or_else(|| AppError::Authentication(INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(password, &credential.password_hash)? {
        return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
    }

    tracing::info!("✅ User authenticated: {}", credential.id);

    Ok(credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> CredentialStore {
        let hash = hash_password("CorrectHorse1!").unwrap();
        CredentialStore::single_admin("administrador".to_string(), hash)
    }

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("SecurePass123!").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("SecurePass123!", &hash).unwrap());
        assert!(!verify_password("SecurePass123", &hash).unwrap());
    }

    #[test]
    fn hashing_the_same_password_twice_uses_fresh_salts() {
        let first = hash_password("SecurePass123!").unwrap();
        let second = hash_password("SecurePass123!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn authenticate_accepts_correct_credentials() {
        let store = test_store();
        let credential = authenticate(&store, "administrador", "CorrectHorse1!").unwrap();
        assert_eq!(credential.username, "administrador");
    }

    #[test]
    fn bad_password_and_unknown_username_fail_identically() {
        let store = test_store();

        let wrong_password = authenticate(&store, "administrador", "nope").unwrap_err();
        let unknown_user = authenticate(&store, "someone-else", "nope").unwrap_err();

        match (wrong_password, unknown_user) {
            (AppError::Authentication(a), AppError::Authentication(b)) => assert_eq!(a, b),
            other => panic!("expected uniform authentication errors, got {:?}", other),
        }
    }
}
