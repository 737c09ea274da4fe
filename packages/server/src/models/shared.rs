use crate::error::AppError;

/// Validate that an identifier is a positive integer.
pub fn validate_id(id: i32, name: &str) -> Result<i32, AppError> {
    if id <= 0 {
        return Err(AppError::Validation(format!(
            "{name} must be a positive integer"
        )));
    }
    Ok(id)
}

/// Validate an identifier that the client must supply in a request body.
///
/// Absent and zero ids are both reported as missing.
pub fn require_id(id: Option<i32>, name: &str) -> Result<i32, AppError> {
    match id {
        None | Some(0) => Err(AppError::Validation(format!("{name} required"))),
        Some(id) => validate_id(id, name),
    }
}

/// Validate a required text field, returning it trimmed.
pub fn require_text(value: &str, field: &str, max_chars: usize) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(value.to_string())
}
