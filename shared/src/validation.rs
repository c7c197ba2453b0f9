//! Query parameter validation

use thiserror::Error;

/// Shortest query that is forwarded to the geocoding service
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} parameter is required")]
    MissingParameter { field: &'static str },
}

/// Whether an autocomplete query is long enough to look up
pub fn is_suggestion_query(query: Option<&str>) -> bool {
    query.is_some_and(|q| q.chars().count() >= MIN_SUGGESTION_QUERY_CHARS)
}

/// Require a non-empty parameter; `field` names it in the error message
pub fn require_param<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingParameter { field }),
    }
}
