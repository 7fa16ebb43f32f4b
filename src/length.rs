use crate::Value;

/// The largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as an `f64`, i.e. 2<sup>53</sup> − 1.
///
/// This is the upper bound for a valid length.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Checks if `value` is a valid array length: an integer greater than `-1`
/// and no larger than [`MAX_SAFE_INTEGER`].
///
/// # Examples
///
/// ```
/// use array_range::{is_valid_length, MAX_SAFE_INTEGER};
///
/// assert!(is_valid_length(3.0));
/// assert!(is_valid_length(MAX_SAFE_INTEGER));
/// assert!(!is_valid_length(MAX_SAFE_INTEGER + 2.0));
/// assert!(!is_valid_length(-1.0));
/// assert!(!is_valid_length(f64::MIN_POSITIVE));
/// assert!(!is_valid_length(f64::INFINITY));
/// assert!(!is_valid_length(f64::NAN));
/// ```
#[inline]
#[must_use]
pub fn is_valid_length(value: f64) -> bool {
    value > -1.0 && value % 1.0 == 0.0 && value <= MAX_SAFE_INTEGER
}

/// Checks if a dynamically typed `value` is a valid array length.
///
/// Only [`Value::Number`] can be a length; a numeric string is not.
///
/// # Examples
///
/// ```
/// use array_range::{is_length, Value};
///
/// assert!(is_length(&Value::Number(3.0)));
/// assert!(!is_length(&Value::from("3")));
/// assert!(!is_length(&Value::Null));
/// assert!(!is_length(&Value::Number(f64::INFINITY)));
/// ```
#[inline]
#[must_use]
pub fn is_length(value: &Value) -> bool {
    matches!(*value, Value::Number(n) if is_valid_length(n))
}

/// Converts a raw `length` property into an element count, treating an
/// absent or invalid length as zero.
#[inline]
pub(crate) fn validated_len(length: Option<f64>) -> usize {
    match length {
        // `as` saturates, which only matters on targets narrower than 53 bits.
        Some(n) if is_valid_length(n) => n as usize,
        Some(n) => {
            tracing::trace!(length = n, "invalid length, treating source as empty");
            0
        }
        None => 0,
    }
}
