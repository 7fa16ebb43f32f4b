//! Range normalization and dense extraction.
//!
//! [`normalize`] turns a loosely specified `(start, end)` request into a
//! canonical [`Window`]; [`extract`] copies a window out of an
//! [`ArrayLike`] source position by position.

use alloc::vec::Vec;
use core::{iter::FusedIterator, ops::Range};

use crate::ArrayLike;

/// The end of a requested range.
///
/// An explicit null end is not the same as an absent one: absent means "up
/// to the end of the source", while null counts as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum End {
    /// No end was given; the range runs to the end of the source.
    #[default]
    Absent,
    /// An explicit null end, which counts as `0`.
    Null,
    /// An end index. Negative values count back from the end of the source.
    At(i64),
}

impl From<i64> for End {
    #[inline]
    fn from(end: i64) -> Self {
        End::At(end)
    }
}

impl From<i32> for End {
    #[inline]
    fn from(end: i32) -> Self {
        End::At(end.into())
    }
}

impl From<Option<i64>> for End {
    #[inline]
    fn from(end: Option<i64>) -> Self {
        end.map_or(End::Absent, End::At)
    }
}

/// A canonical range: a non-negative start and a number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Window {
    /// First source position to copy.
    pub start: usize,
    /// Number of elements to copy.
    pub len: usize,
}

impl Window {
    /// The window that copies nothing.
    pub const EMPTY: Window = Window { start: 0, len: 0 };

    /// Returns `true` if the window copies nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The source positions covered by this window.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start.saturating_add(self.len)
    }
}

/// Normalizes a `(start, end)` request against a source of `source_len`
/// elements.
///
/// - An absent `start` is `0`; an absent `end` is `source_len`.
/// - Negative indices count back from the end. A negative `start` before
///   the beginning of the source clamps to `0`.
/// - `end` is clamped to `source_len` before the negative adjustment.
/// - When `start` lies past `end` the window is empty.
///
/// Both the resulting start and length are truncated to unsigned 32 bits.
///
/// # Examples
///
/// ```
/// use array_range::{normalize, End, Window};
///
/// assert_eq!(normalize(4, Some(1), End::Absent), Window { start: 1, len: 3 });
/// assert_eq!(normalize(4, Some(-2), End::Absent), Window { start: 2, len: 2 });
/// assert_eq!(normalize(4, Some(1), End::At(3)), Window { start: 1, len: 2 });
/// assert_eq!(normalize(4, None, End::At(-1)), Window { start: 0, len: 3 });
/// assert_eq!(normalize(4, None, End::Null), Window { start: 0, len: 0 });
/// assert_eq!(normalize(0, Some(1), End::At(3)), Window::EMPTY);
/// ```
#[must_use]
pub fn normalize(source_len: usize, start: Option<i64>, end: End) -> Window {
    if source_len == 0 {
        return Window::EMPTY;
    }
    let len = i64::try_from(source_len).unwrap_or(i64::MAX);

    let mut start = start.unwrap_or(0);
    let mut end = match end {
        End::Absent => len,
        End::Null => 0,
        End::At(end) => end,
    };

    if start < 0 {
        start = if start.unsigned_abs() > len.unsigned_abs() {
            0
        } else {
            len + start
        };
    }
    end = end.min(len);
    // Not clamped again: `start` is non-negative here, so an `end` that is
    // still negative always yields an empty window below.
    if end < 0 {
        end += len;
    }

    let span = if start > end { 0 } else { to_uint32(end - start) };
    Window {
        start: to_uint32(start),
        len: span,
    }
}

/// Unsigned 32-bit truncation, the same conversion as `x >>> 0`.
#[inline]
fn to_uint32(value: i64) -> usize {
    value as u32 as usize
}

/// Copies the elements covered by `window` into a new, dense `Vec`.
///
/// Every slot of the result holds a value: unassigned positions of a sparse
/// source come back as that source's placeholder.
///
/// # Examples
///
/// ```
/// use array_range::{extract, Array, Value, Window};
///
/// let mut sparse = Array::with_len(4);
/// sparse.set(2, "c");
/// let dense = extract(&sparse, Window { start: 1, len: 2 });
/// assert_eq!(dense, [Value::Undefined, Value::from("c")]);
/// ```
#[must_use]
pub fn extract<S: ArrayLike + ?Sized>(source: &S, window: Window) -> Vec<S::Item> {
    let mut out = Vec::with_capacity(window.len);
    extract_into(source, window, &mut out);
    out
}

/// Appends the elements covered by `window` to `out`.
///
/// # Examples
///
/// ```
/// use array_range::{extract_into, Value, Window};
/// use arrayvec::ArrayVec;
///
/// let mut out = ArrayVec::<Value, 3>::new();
/// extract_into(&Value::from("añb€"), Window { start: 1, len: 3 }, &mut out);
/// assert_eq!(out.as_slice(), [Value::from("ñ"), Value::from("b"), Value::from("€")]);
/// ```
///
/// # Panics
///
/// Panics if `out` cannot hold `window.len` more elements, e.g. a full
/// fixed-capacity buffer.
#[inline]
pub fn extract_into<S, C>(source: &S, window: Window, out: &mut C)
where
    S: ArrayLike + ?Sized,
    C: Extend<S::Item>,
{
    source.items_into(window.range(), out);
}

/// Returns an iterator over the consecutive, non-overlapping windows of
/// `size` elements that cover a source of `source_len` elements.
///
/// The last window holds the remainder and may be shorter than `size`. A
/// `size` of `0` yields no windows.
///
/// # Examples
///
/// ```
/// use array_range::{chunk_windows, Window};
///
/// let windows: Vec<_> = chunk_windows(5, 2).collect();
/// assert_eq!(
///     windows,
///     [
///         Window { start: 0, len: 2 },
///         Window { start: 2, len: 2 },
///         Window { start: 4, len: 1 },
///     ]
/// );
/// ```
#[inline]
pub fn chunk_windows(source_len: usize, size: usize) -> ChunkWindows {
    ChunkWindows {
        index: 0,
        source_len: if size == 0 { 0 } else { source_len },
        size,
    }
}

/// An iterator over the chunk windows of a source.
///
/// This struct is created by [`chunk_windows`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChunkWindows {
    index: usize,
    source_len: usize,
    size: usize,
}

impl Iterator for ChunkWindows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.index >= self.source_len {
            return None;
        }
        let start = self.index;
        self.index = start.saturating_add(self.size);
        let window = normalize(
            self.source_len,
            Some(to_i64(start)),
            End::At(to_i64(self.index)),
        );
        Some(window)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.index >= self.source_len {
            0
        } else {
            (self.source_len - self.index).div_ceil(self.size)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChunkWindows {}

impl FusedIterator for ChunkWindows {}

#[inline]
fn to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
