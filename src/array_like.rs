use alloc::{string::ToString, vec::Vec};
use core::ops::Range;

use crate::{
    length::is_valid_length,
    value::{Array, Object, Value},
};

/// A value exposing a `length` and positional access.
///
/// Implementors do not need to be real arrays: anything with a numeric
/// `length` can be sliced and chunked. Sparse implementors must read an
/// unassigned position as their "undefined" placeholder, so results built
/// from [`item`](ArrayLike::item) are always dense.
pub trait ArrayLike {
    /// The element type handed out by [`item`](ArrayLike::item).
    type Item;

    /// The raw `length` property, or `None` if there is no numeric length.
    ///
    /// The value is not validated; see [`is_array_like`].
    fn length(&self) -> Option<f64>;

    /// Returns `true` for callables, whose `length` is their arity rather
    /// than a number of elements.
    #[inline]
    fn is_callable(&self) -> bool {
        false
    }

    /// Reads the element at `index`.
    ///
    /// # Panics
    ///
    /// Implementations backed by native storage may panic when `index` is
    /// not below [`length`](ArrayLike::length). The helpers in this crate
    /// only read indices below the validated length.
    fn item(&self, index: usize) -> Self::Item;

    /// Appends the elements at `range` to `out`, in order.
    ///
    /// The default reads each position with [`item`](ArrayLike::item).
    /// Sources without constant-time positional access override it to walk
    /// the range in a single pass.
    #[inline]
    fn items_into<C: Extend<Self::Item>>(&self, range: Range<usize>, out: &mut C) {
        out.extend(range.map(|index| self.item(index)));
    }
}

/// Checks if `value` is array-like: it is not callable and its `length` is
/// an integer in `0..=MAX_SAFE_INTEGER`.
///
/// # Examples
///
/// ```
/// use array_range::{is_array_like, Value};
///
/// assert!(is_array_like(&[1, 2, 3]));
/// assert!(is_array_like(&Value::from("abc")));
/// assert!(!is_array_like(&Value::Null));
/// assert!(!is_array_like(&Value::Undefined));
/// assert!(!is_array_like(&Value::function(2)));
/// ```
#[inline]
#[must_use]
pub fn is_array_like<S: ArrayLike + ?Sized>(value: &S) -> bool {
    !value.is_callable() && value.length().map_or(false, is_valid_length)
}

impl<T: Clone> ArrayLike for [T] {
    type Item = T;

    #[inline]
    fn length(&self) -> Option<f64> {
        Some(self.len() as f64)
    }

    #[inline]
    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> ArrayLike for [T; N] {
    type Item = T;

    #[inline]
    fn length(&self) -> Option<f64> {
        Some(N as f64)
    }

    #[inline]
    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> ArrayLike for Vec<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> Option<f64> {
        self.as_slice().length()
    }

    #[inline]
    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl ArrayLike for Array {
    type Item = Value;

    #[inline]
    fn length(&self) -> Option<f64> {
        Some(self.len() as f64)
    }

    fn item(&self, index: usize) -> Value {
        self.get(index).cloned().unwrap_or_default()
    }
}

impl ArrayLike for Object {
    type Item = Value;

    fn length(&self) -> Option<f64> {
        self.get("length").and_then(Value::as_number)
    }

    fn item(&self, index: usize) -> Value {
        self.get(&index.to_string()).cloned().unwrap_or_default()
    }
}

impl ArrayLike for Value {
    type Item = Value;

    fn length(&self) -> Option<f64> {
        match self {
            Value::Array(array) => array.length(),
            Value::Object(object) => object.length(),
            Value::String(s) => Some(s.chars().count() as f64),
            Value::Function { arity } => Some(*arity as f64),
            Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }

    #[inline]
    fn is_callable(&self) -> bool {
        matches!(self, Value::Function { .. })
    }

    fn item(&self, index: usize) -> Value {
        match self {
            Value::Array(array) => array.item(index),
            Value::Object(object) => object.item(index),
            Value::String(s) => s
                .chars()
                .nth(index)
                .map_or(Value::Undefined, |c| Value::String(c.to_string())),
            _ => Value::Undefined,
        }
    }

    fn items_into<C: Extend<Self::Item>>(&self, range: Range<usize>, out: &mut C) {
        let Value::String(s) = self else {
            out.extend(range.map(|index| self.item(index)));
            return;
        };
        let len = range.len();
        let mut chars = s.chars().skip(range.start);
        // Positions past the last char still read as undefined.
        out.extend((0..len).map(|_| {
            chars
                .next()
                .map_or(Value::Undefined, |c| Value::String(c.to_string()))
        }));
    }
}
