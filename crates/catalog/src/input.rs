//! Coercion of raw form input into typed optional fields.
//!
//! An empty input field means "unset". It is never coerced to zero, so a
//! blank rating/year/duration can never silently write `0` to the server.

use videoclub_core::ApiError;

/// Parse an optional integer field. Blank input is `None`.
pub fn parse_optional_i32(field: &str, raw: &str) -> Result<Option<i32>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(Some)
        .map_err(|_| ApiError::validation(format!("{field} must be a whole number")))
}

/// Parse an optional unsigned integer field. Blank input is `None`.
pub fn parse_optional_u32(field: &str, raw: &str) -> Result<Option<u32>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| ApiError::validation(format!("{field} must be a positive whole number")))
}

/// Parse an optional rating, normalized to one decimal of precision.
/// Blank input is `None`.
pub fn parse_optional_rating(raw: &str) -> Result<Option<f64>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value = raw
        .parse::<f64>()
        .map_err(|_| ApiError::validation("rating must be a number"))?;
    Ok(Some((value * 10.0).round() / 10.0))
}

/// Treat a blank string field as unset.
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
