use crate::error::{AppError, Result};

/// Validates a login payload.
///
/// Both fields must be present and non-empty. The message is deliberately
/// shared so it does not hint at which field was missing.
///
/// # Arguments
///
/// * `username` - The submitted username.
/// * `password` - The submitted password.
///
/// # Returns
///
/// A `Result<()>` indicating whether the payload is complete.
pub fn validate_login(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_payload_passes() {
        assert!(validate_login("administrador", "hunter22").is_ok());
    }

    #[test]
    fn missing_fields_share_one_message() {
        for (username, password) in [("", "pw"), ("user", ""), ("", ""), ("   ", "pw")] {
            match validate_login(username, password) {
                Err(AppError::Validation(msg)) => {
                    assert_eq!(msg, "Username and password are required");
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }
}
