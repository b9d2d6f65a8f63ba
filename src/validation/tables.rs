use crate::error::{AppError, Result};

/// Validates the table identity fields of a link request.
///
/// # Arguments
///
/// * `table_id` - The table identifier.
/// * `location_id` - The location identifier.
///
/// # Returns
///
/// A `Result<()>` indicating whether the identity is usable.
pub fn validate_table_identity(table_id: &str, location_id: &str) -> Result<()> {
    if table_id.trim().is_empty() || location_id.trim().is_empty() {
        return Err(AppError::Validation(
            "Table and location identifiers are required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_identifiers() {
        assert!(validate_table_identity("", "loc-1").is_err());
        assert!(validate_table_identity("t-1", " ").is_err());
        assert!(validate_table_identity("t-1", "loc-1").is_ok());
    }
}
