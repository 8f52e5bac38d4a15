//! Translation between the `-1` "unknown" encoding used in storage and
//! `Option` values used by the domain.
//!
//! The catalog tables store every attribute as a non-null column and mark
//! missing data with `-1`, `-1.0` or the string `"-1"`. These helpers are the
//! only place where that encoding is interpreted.

pub const SENTINEL_INT: i32 = -1;
pub const SENTINEL_FLOAT: f64 = -1.0;
pub const SENTINEL_TEXT: &str = "-1";

/// Returns `None` for the integer sentinel.
pub fn int_from_sentinel(value: i32) -> Option<i32> {
    (value != SENTINEL_INT).then_some(value)
}

/// Returns `None` for the floating point sentinel.
pub fn float_from_sentinel(value: f64) -> Option<f64> {
    (value != SENTINEL_FLOAT).then_some(value)
}

/// Returns `None` for an empty string or the text sentinel.
pub fn text_from_sentinel(value: &str) -> Option<String> {
    (!value.is_empty() && value != SENTINEL_TEXT).then(|| value.to_string())
}

pub fn int_to_sentinel<T: Into<i64>>(value: Option<T>) -> i32 {
    value
        .map(Into::into)
        .and_then(|value| i32::try_from(value).ok())
        .unwrap_or(SENTINEL_INT)
}

pub fn float_to_sentinel(value: Option<f64>) -> f64 {
    value.unwrap_or(SENTINEL_FLOAT)
}

pub fn text_to_sentinel(value: Option<&str>) -> String {
    value.unwrap_or(SENTINEL_TEXT).to_string()
}
