//! A small dynamically typed value model.
//!
//! [`Value`] lets callers hand the helpers data whose shape is only known at
//! runtime: arrays with unassigned positions, plain objects that carry a
//! `length` property, strings, and callables. Native Rust collections never
//! need it.

use alloc::{collections::BTreeMap, string::String, vec, vec::Vec};
use core::{iter::FusedIterator, slice};

/// Placeholder handed out for unassigned array positions.
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The value of anything that was never assigned.
    #[default]
    Undefined,
    /// An explicit "no value".
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number. Integers are stored here too.
    Number(f64),
    /// A string.
    String(String),
    /// A possibly sparse array.
    Array(Array),
    /// A string-keyed property bag.
    Object(Object),
    /// A callable. Its `length` is the number of declared parameters.
    Function {
        /// Number of declared parameters.
        arity: usize,
    },
}

impl Value {
    /// Creates a callable value taking `arity` parameters.
    #[inline]
    pub const fn function(arity: usize) -> Self {
        Value::Function { arity }
    }

    /// Returns `true` for [`Value::Null`] and [`Value::Undefined`].
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Returns the number if this is a [`Value::Number`].
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the array if this is a [`Value::Array`].
    #[inline]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

/// An ordered array whose positions may be unassigned ("holes").
///
/// Reading a hole through [`Array::iter`] or positional access yields
/// [`Value::Undefined`], so anything materialized from an `Array` is dense.
///
/// ```
/// use array_range::{Array, Value};
///
/// let mut a = Array::with_len(3);
/// a.set(1, "b");
/// assert!(a.is_hole(0));
/// assert_eq!(a.get(1), Some(&Value::from("b")));
/// assert_eq!(a.iter().collect::<Vec<_>>(), [&Value::Undefined, &"b".into(), &Value::Undefined]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    slots: Vec<Option<Value>>,
}

impl Array {
    /// Creates an empty array.
    #[inline]
    pub const fn new() -> Self {
        Array { slots: Vec::new() }
    }

    /// Creates an array of `len` holes.
    pub fn with_len(len: usize) -> Self {
        Array {
            slots: vec![None; len],
        }
    }

    /// Number of positions, assigned or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends a value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.slots.push(Some(value.into()));
    }

    /// Assigns `index`, growing the array with holes if it is past the end.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(value.into());
    }

    /// Unassigns `index`, leaving a hole. The length does not change.
    pub fn delete(&mut self, index: usize) -> Option<Value> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Returns the value stored at `index`, or `None` for a hole or an
    /// out-of-range index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns `true` if `index` is inside the array but unassigned.
    #[inline]
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Iterates every position in order, reading holes as
    /// [`Value::Undefined`].
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
        }
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

/// `None` items become holes.
impl FromIterator<Option<Value>> for Array {
    fn from_iter<I: IntoIterator<Item = Option<Value>>>(iter: I) -> Self {
        Array {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> IntoIter {
        IntoIter {
            slots: self.slots.into_iter(),
        }
    }
}

/// Borrowing iterator over an [`Array`]. Holes read as
/// [`Value::Undefined`].
///
/// This struct is created by [`Array::iter`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a> {
    slots: slice::Iter<'a, Option<Value>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    #[inline]
    fn next(&mut self) -> Option<&'a Value> {
        self.slots.next().map(|slot| slot.as_ref().unwrap_or(&UNDEFINED))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a Value> {
        self.slots
            .next_back()
            .map(|slot| slot.as_ref().unwrap_or(&UNDEFINED))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over an [`Array`]. Holes read as [`Value::Undefined`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter {
    slots: vec::IntoIter<Option<Value>>,
}

impl Iterator for IntoIter {
    type Item = Value;

    #[inline]
    fn next(&mut self) -> Option<Value> {
        self.slots.next().map(Option::unwrap_or_default)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Value> {
        self.slots.next_back().map(Option::unwrap_or_default)
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

/// A string-keyed property bag.
///
/// An object is array-like when its `"length"` property holds a valid
/// length; its elements are then the properties `"0"`, `"1"`, ...
///
/// ```
/// use array_range::{is_array_like, Object, Value};
///
/// let object: Object = [("0", Value::from("a")), ("length", 1.into())].into_iter().collect();
/// assert!(is_array_like(&object));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    props: BTreeMap<String, Value>,
}

impl Object {
    /// Creates an object with no properties.
    #[inline]
    pub const fn new() -> Self {
        Object {
            props: BTreeMap::new(),
        }
    }

    /// Sets a property, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.props.insert(key.into(), value.into())
    }

    /// Reads a property.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Number of properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns `true` if the object has no properties.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Object {
            props: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
