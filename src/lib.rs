//! `no_std` dense slice, chunk and compact helpers for array-like values.
//!
//! ## Description
//!
//! This crate provides three array helpers that accept anything
//! [`ArrayLike`] (native slices, arrays and `Vec`s, as well as the sparse
//! [`Array`] and [`Object`] values of the dynamic [`Value`] model):
//!
//! - [`slice`]: copies a range out of a source. Negative indices count back
//!   from the end and out-of-range indices are clamped.
//! - [`chunk`]: splits a source into groups of a fixed size, the final group
//!   holding the remainder. [`chunk_array`] does the same into fixed-capacity
//!   [`ArrayVec`]s.
//! - [`compact`]: drops every falsy element (see [`Truthy`]).
//!
//! Results are always dense: if the source has unassigned positions, the
//! corresponding slots hold [`Value::Undefined`] rather than being skipped.
//! None of the helpers fail. An absent source, an invalid length or a
//! nonsensical size simply produces an empty result.
//!
//! ## Usage
//!
//! Users can either import the [`ArrayLikeExt`] trait to bring in the methods,
//! or use the bare functions. Note that trait methods have the `_ext` suffix to
//! avoid collision with the core library methods.
//!
//! ```
//! use array_range::ArrayLikeExt;
//!
//! let a = ['a', 'b', 'c', 'd'];
//! assert_eq!(a.slice_ext(-3, -1), ['b', 'c']);
//! assert_eq!(a.chunk_ext(3), [vec!['a', 'b', 'c'], vec!['d']]);
//! assert_eq!([0, 1, 2, 0].compact_ext(), [&1, &2]);
//! ```
//!
//! ```
//! use array_range::End;
//!
//! let a = ['a', 'b', 'c', 'd'];
//! assert_eq!(array_range::slice(Some(&a), Some(1), End::Absent), ['b', 'c', 'd']);
//! assert!(array_range::slice(None::<&[char]>, Some(1), End::Absent).is_empty());
//! assert_eq!(array_range::chunk(Some(&a), Some(2)), [['a', 'b'], ['c', 'd']]);
//! ```
//!
//! ## Dynamic values
//!
//! ```
//! use array_range::{Array, Value};
//!
//! let values: Array = [Value::from(0), 1.into(), false.into(), 2.into(), "".into(), 3.into()]
//!     .into_iter()
//!     .collect();
//! assert_eq!(array_range::compact(Some(values)), [Value::from(1), 2.into(), 3.into()]);
//! ```
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;

use arrayvec::ArrayVec;

mod array_like;
mod length;
mod range;
mod truthy;
mod value;

pub use array_like::{is_array_like, ArrayLike};
pub use length::{is_length, is_valid_length, MAX_SAFE_INTEGER};
pub use range::{chunk_windows, extract, extract_into, normalize, ChunkWindows, End, Window};
pub use truthy::Truthy;
pub use value::{Array, IntoIter, Iter, Object, Value};

use length::validated_len;

/// Creates a slice of `source` from `start` up to, but not including, `end`.
///
/// A negative `start` or `end` counts back from the end of the source. An
/// absent `start` is `0` and an absent `end` is the source's length, but an
/// explicit [`End::Null`] counts as `0`. The result is always dense, even
/// when `source` is sparse.
///
/// An absent source, or one whose `length` is not a valid length, slices to
/// an empty `Vec`.
///
/// # Examples
///
/// ```
/// use array_range::{slice, End};
///
/// let a = [1, 2, 3, 4];
/// assert_eq!(slice(Some(&a), Some(1), End::Absent), [2, 3, 4]);
/// assert_eq!(slice(Some(&a), Some(-2), End::Absent), [3, 4]);
/// assert_eq!(slice(Some(&a), Some(1), 3), [2, 3]);
/// assert!(slice(Some(&a), None, End::Null).is_empty());
/// assert!(slice(Some(&a), Some(3), 1).is_empty());
/// ```
pub fn slice<S: ArrayLike + ?Sized>(
    source: Option<&S>,
    start: Option<i64>,
    end: impl Into<End>,
) -> Vec<S::Item> {
    let Some(source) = source else {
        return Vec::new();
    };
    let window = normalize(validated_len(source.length()), start, end.into());
    extract(source, window)
}

/// Creates a `Vec` of elements split into groups the length of `size`.
///
/// If `source` can't be split evenly, the final chunk will be the remaining
/// elements. An absent `size` is `1`; a `size` below `1` produces no chunks.
/// Sources that are not [array-like](is_array_like) produce no chunks.
///
/// # Examples
///
/// ```
/// use array_range::chunk;
///
/// let a = ['a', 'b', 'c', 'd'];
/// assert_eq!(chunk(Some(&a), Some(2)), [['a', 'b'], ['c', 'd']]);
/// assert_eq!(chunk(Some(&a), Some(3)), [vec!['a', 'b', 'c'], vec!['d']]);
/// assert_eq!(chunk(Some(&a), None), [['a'], ['b'], ['c'], ['d']]);
/// assert!(chunk(Some(&a), Some(0)).is_empty());
/// assert!(chunk(None::<&[char]>, Some(2)).is_empty());
/// ```
pub fn chunk<S: ArrayLike + ?Sized>(source: Option<&S>, size: Option<i64>) -> Vec<Vec<S::Item>> {
    let size = size.unwrap_or(1).max(0);
    let Some(source) = source else {
        return Vec::new();
    };
    if size < 1 {
        tracing::trace!(size, "chunk size below 1, producing no chunks");
        return Vec::new();
    }
    let source_len = chunkable_len(source);
    if source_len == 0 {
        return Vec::new();
    }
    // `size >= 1` here; only targets narrower than 64 bits can saturate.
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    let mut items = read_all(source, source_len);
    chunk_windows(source_len, size)
        .map(|window| items.by_ref().take(window.len).collect())
        .collect()
}

/// Splits `source` into groups of `N` elements, each stored inline in an
/// [`ArrayVec`].
///
/// This is the const generic equivalent of [`chunk`]. The final chunk holds
/// the remaining elements and may be shorter than `N`. Unlike
/// `as_chunks`-style helpers this never panics: `N == 0` produces no chunks.
///
/// # Examples
///
/// ```
/// let a = ['l', 'o', 'r', 'e', 'm'];
/// let chunks = array_range::chunk_array::<_, 2>(Some(&a));
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].as_slice(), ['l', 'o']);
/// assert_eq!(chunks[2].as_slice(), ['m']);
/// assert_eq!(chunks[2].capacity(), 2);
///
/// assert!(array_range::chunk_array::<_, 0>(Some(&a)).is_empty());
/// ```
pub fn chunk_array<S: ArrayLike + ?Sized, const N: usize>(
    source: Option<&S>,
) -> Vec<ArrayVec<S::Item, N>> {
    let Some(source) = source else {
        return Vec::new();
    };
    let source_len = chunkable_len(source);
    if N == 0 || source_len == 0 {
        return Vec::new();
    }
    let mut items = read_all(source, source_len);
    chunk_windows(source_len, N)
        .map(|window| items.by_ref().take(window.len).collect())
        .collect()
}

/// Creates a `Vec` with all falsy elements of `source` removed.
///
/// The values `false`, `0`, `NaN`, `""`, `None`, [`Value::Null`] and
/// [`Value::Undefined`] are falsy. Truthy elements keep their relative order.
/// An absent source compacts to an empty `Vec`.
///
/// # Examples
///
/// ```
/// use array_range::compact;
///
/// assert_eq!(compact(Some(vec![0, 1, 0, 2, 3])), [1, 2, 3]);
/// assert_eq!(compact(Some(["", "a", "", "b"])), ["a", "b"]);
/// assert!(compact(None::<Vec<u8>>).is_empty());
/// ```
pub fn compact<I>(source: Option<I>) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Truthy,
{
    source
        .into_iter()
        .flatten()
        .filter(|item| item.is_truthy())
        .collect()
}

/// Reads every element of `source` in one pass. Chunk windows are
/// consecutive, so each chunk takes the next `window.len` items.
fn read_all<S: ArrayLike + ?Sized>(
    source: &S,
    source_len: usize,
) -> alloc::vec::IntoIter<S::Item> {
    extract(
        source,
        Window {
            start: 0,
            len: source_len,
        },
    )
    .into_iter()
}

/// Element count of an array-like source, or `0` for anything else.
fn chunkable_len<S: ArrayLike + ?Sized>(source: &S) -> usize {
    if is_array_like(source) {
        validated_len(source.length())
    } else {
        0
    }
}

/// A helper extension trait for array-like values
pub trait ArrayLikeExt: ArrayLike {
    /// Creates a slice of `self` from `start` up to, but not including, `end`.
    ///
    /// See [`slice`].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_range::{ArrayLikeExt, End};
    ///
    /// let a = [1, 2, 3, 4];
    /// assert_eq!(a.slice_ext(2, End::Absent), [3, 4]);
    /// assert_eq!(a.slice_ext(-5, 2), [1, 2]);
    /// ```
    fn slice_ext(&self, start: i64, end: impl Into<End>) -> Vec<Self::Item>;

    /// Splits `self` into groups the length of `size`.
    ///
    /// See [`chunk`].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_range::ArrayLikeExt;
    ///
    /// let v = vec![1, 2, 3, 4, 5];
    /// assert_eq!(v.chunk_ext(2), [vec![1, 2], vec![3, 4], vec![5]]);
    /// assert!(v.chunk_ext(-1).is_empty());
    /// ```
    fn chunk_ext(&self, size: i64) -> Vec<Vec<Self::Item>>;

    /// Splits `self` into groups of `N` elements stored inline.
    ///
    /// See [`chunk_array`].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_range::ArrayLikeExt;
    ///
    /// let chunks = [1, 2, 3].chunk_array_ext::<2>();
    /// assert_eq!(chunks[0].as_slice(), [1, 2]);
    /// assert_eq!(chunks[1].as_slice(), [3]);
    /// ```
    fn chunk_array_ext<const N: usize>(&self) -> Vec<ArrayVec<Self::Item, N>>;

    /// Removes the falsy elements of `self`.
    ///
    /// See [`compact`].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_range::ArrayLikeExt;
    ///
    /// assert_eq!(["", "x", ""].compact_ext(), [&"x"]);
    /// ```
    fn compact_ext<'a>(&'a self) -> Vec<<&'a Self as IntoIterator>::Item>
    where
        &'a Self: IntoIterator,
        <&'a Self as IntoIterator>::Item: Truthy;
}

impl<S: ArrayLike + ?Sized> ArrayLikeExt for S {
    #[inline]
    fn slice_ext(&self, start: i64, end: impl Into<End>) -> Vec<S::Item> {
        slice(Some(self), Some(start), end)
    }

    #[inline]
    fn chunk_ext(&self, size: i64) -> Vec<Vec<S::Item>> {
        chunk(Some(self), Some(size))
    }

    #[inline]
    fn chunk_array_ext<const N: usize>(&self) -> Vec<ArrayVec<S::Item, N>> {
        chunk_array(Some(self))
    }

    #[inline]
    fn compact_ext<'a>(&'a self) -> Vec<<&'a S as IntoIterator>::Item>
    where
        &'a S: IntoIterator,
        <&'a S as IntoIterator>::Item: Truthy,
    {
        compact(Some(self))
    }
}
