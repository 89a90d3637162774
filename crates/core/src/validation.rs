//! Required-field checks for incoming entity payloads.
//!
//! Pure functions shared by the create and update handlers. Only presence
//! is enforced here; referential checks are left to the database.

use crate::error::CoreError;
use crate::types::DbId;

/// Returns `true` when `value` is empty or whitespace only.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A cat needs a name plus non-zero type and master references.
pub fn validate_cat_fields(name: &str, cat_type_id: DbId, master_id: DbId) -> Result<(), CoreError> {
    if is_blank(name) || cat_type_id == 0 || master_id == 0 {
        return Err(CoreError::Validation(
            "name, cat_type_id, and master_id are required".to_string(),
        ));
    }
    Ok(())
}

/// A type needs a name.
pub fn validate_type_fields(name: &str) -> Result<(), CoreError> {
    if is_blank(name) {
        return Err(CoreError::Validation("name is required".to_string()));
    }
    Ok(())
}

/// A master needs both a first and a last name. `place` is optional.
pub fn validate_master_fields(first_name: &str, last_name: &str) -> Result<(), CoreError> {
    if is_blank(first_name) || is_blank(last_name) {
        return Err(CoreError::Validation(
            "first_name and last_name are required".to_string(),
        ));
    }
    Ok(())
}
