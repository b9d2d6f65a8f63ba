//! Bearer-token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. Verification
//! is fully stateless: the server keeps no per-token record, so a token
//! stays valid until its expiry. Revocation is isolated behind
//! [`RevocationCheck`] so logout can later become effective by swapping the
//! collaborator, without redesigning the verifier.

use crate::error::Result;
use crate::models::claims::Claims;
use crate::models::credential::AdminCredential;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// Token lifetime in days. Fixed, not externally configurable.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// A pluggable denylist keyed by token id (`jti`).
///
/// The default implementation never revokes anything; verification stays
/// pure and stateless until an effective logout is needed.
pub trait RevocationCheck: Send + Sync {
    /// Returns `true` if the token with this `jti` has been revoked.
    fn is_revoked(&self, jti: &str) -> bool;
}

/// The no-op revocation check: every token remains valid until expiry.
#[derive(Debug, Default, Clone)]
pub struct NoRevocation;

impl RevocationCheck for NoRevocation {
    fn is_revoked(&self, _jti: &str) -> bool {
        false
    }
}

/// Issues an HS256 bearer token for the given credential, valid for
/// [`TOKEN_LIFETIME_DAYS`] from now.
///
/// # Arguments
///
/// * `credential` - The authenticated credential.
/// * `secret` - The server-held signing secret.
///
/// # Returns
///
/// A `Result` containing the signed token string.
pub fn issue_token(credential: &AdminCredential, secret: &str) -> Result<String> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: credential.id,
        username: credential.username.clone(),
        email: credential.email.clone(),
        role: credential.role.clone(),
        iat: now,
        exp: now + TOKEN_LIFETIME_DAYS * 86400,
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    tracing::debug!("🎫 Token issued for user: {}", credential.id);
    Ok(token)
}

/// Validates a bearer token and returns its decoded [`Claims`].
///
/// All failure modes -- bad signature, malformed token, expired token,
/// revoked `jti` -- collapse to `None`; the caller never learns why
/// verification failed. Expiry is checked with zero leeway; a token whose
/// `exp` equals the current second is still accepted.
pub fn verify_token(
    token: &str,
    secret: &str,
    revocation: &dyn RevocationCheck,
) -> Option<Claims> {
    let mut validation = Validation::default(); // HS256
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .ok()?;

    if revocation.is_revoked(&token_data.claims.jti) {
        tracing::warn!("❌ Revoked token presented: jti={}", token_data.claims.jti);
        return None;
    }

    Some(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    fn test_credential() -> AdminCredential {
        AdminCredential {
            id: 1,
            username: "administrador".to_string(),
            email: "admin@lastortillas.restaurant".to_string(),
            name: "Administrador".to_string(),
            role: "admin".to_string(),
            password_hash: "$argon2id$unused".to_string(),
        }
    }

    /// A revocation check that denies everything, for exercising the hook.
    struct RevokeAll;

    impl RevocationCheck for RevokeAll {
        fn is_revoked(&self, _jti: &str) -> bool {
            true
        }
    }

    #[test]
    fn issue_and_verify_round_trip() {
        let credential = test_credential();
        let token = issue_token(&credential, TEST_SECRET).unwrap();

        let claims = verify_token(&token, TEST_SECRET, &NoRevocation).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "administrador");
        assert_eq!(claims.email, "admin@lastortillas.restaurant");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_DAYS * 86400);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn garbage_tokens_are_rejected_without_panicking() {
        assert!(verify_token("", TEST_SECRET, &NoRevocation).is_none());
        assert!(verify_token("not-a-token", TEST_SECRET, &NoRevocation).is_none());
        assert!(verify_token("a.b.c", TEST_SECRET, &NoRevocation).is_none());
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let token = issue_token(&test_credential(), TEST_SECRET).unwrap();

        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'Q' } else { 'A' });

        assert!(verify_token(&tampered, TEST_SECRET, &NoRevocation).is_none());
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let token = issue_token(&test_credential(), TEST_SECRET).unwrap();
        let truncated = &token[..token.len() / 2];
        assert!(verify_token(truncated, TEST_SECRET, &NoRevocation).is_none());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(&test_credential(), TEST_SECRET).unwrap();
        assert!(verify_token(&token, "a-different-secret", &NoRevocation).is_none());
    }

    #[test]
    fn expired_token_is_rejected_even_with_valid_signature() {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            username: "administrador".to_string(),
            email: "admin@lastortillas.restaurant".to_string(),
            role: "admin".to_string(),
            iat: now - 600,
            exp: now - 300,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, TEST_SECRET, &NoRevocation).is_none());
    }

    #[test]
    fn revocation_hook_is_consulted() {
        let token = issue_token(&test_credential(), TEST_SECRET).unwrap();
        assert!(verify_token(&token, TEST_SECRET, &NoRevocation).is_some());
        assert!(verify_token(&token, TEST_SECRET, &RevokeAll).is_none());
    }
}
