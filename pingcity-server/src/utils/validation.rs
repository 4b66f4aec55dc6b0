//! Input validation helpers
//!
//! Required-field collection and text length limits for the
//! create/update handlers.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Titles, names, department labels
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, message bodies, action text
pub const MAX_TEXT_LEN: usize = 2000;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// A required field counts as present only when supplied and
/// non-empty after trimming (empty strings report as missing,
/// matching the dashboard clients' expectations).
pub fn is_present(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// Collect the names of all missing required string fields.
///
/// Returns `AppError::MissingFields` listing every missing name so
/// the caller sees the full set in one response.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), AppError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| !is_present(*value))
        .map(|(name, _)| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

/// Validate that a supplied string is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Length check for optional payload fields; absent values pass.
pub fn validate_opt_len(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_text_len(v, field, max_len),
        None => Ok(()),
    }
}
