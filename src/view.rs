// Half-open range views over a borrowed sequence.
//
// A view is the safe counterpart of a `(start, stop)` pointer pair: it never owns the
// elements, and the borrow it holds decides whether they may be written.

use crate::cursor::Cursor;
use crate::error::RangeError;
use std::slice;

// ============================================================================
// Read-only view
// ============================================================================

/// A read-only view over `[start, stop)` of a sequence.
///
/// Elements can be read but never written through a `Span`:
///
/// ```compile_fail
/// use const_views::Span;
///
/// let numbers = [10, 20, 30];
/// let span = Span::new(&numbers);
/// span.as_slice()[0] = 11; // cannot assign through a `&` reference
/// ```
///
/// ```compile_fail
/// use const_views::Span;
///
/// let numbers = [10, 20, 30];
/// for value in Span::new(&numbers) {
///     *value += 1; // `value` is a `&i32`
/// }
/// ```
#[derive(Debug)]
pub struct Span<'a, T> {
    slice: &'a [T],
}

impl<'a, T> Span<'a, T> {
    /// Views the whole sequence.
    pub fn new(slice: &'a [T]) -> Self {
        Span { slice }
    }

    /// Views `slice[start..stop]`, rejecting ranges that do not fit.
    pub fn from_bounds(slice: &'a [T], start: usize, stop: usize) -> Result<Self, RangeError> {
        RangeError::check(start, stop, slice.len())?;
        Ok(Span {
            slice: &slice[start..stop],
        })
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.slice.iter()
    }

    /// A cursor positioned at the start of the view.
    pub fn cursor(&self) -> Cursor<'a, T> {
        Cursor::new(*self)
    }
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<'a, T> IntoIterator for Span<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

// ============================================================================
// Mutable view
// ============================================================================

/// A read-write view over `[start, stop)` of a sequence.
///
/// A mutable view converts into a read-only one, the same way a pointer to non-const
/// converts to a pointer to const:
///
/// ```
/// use const_views::{Span, SpanMut};
///
/// let mut numbers = [10, 20, 30];
/// let span: Span<'_, i32> = SpanMut::new(&mut numbers).into();
/// assert_eq!(span.as_slice(), &[10, 20, 30]);
/// ```
///
/// The reverse conversion does not exist:
///
/// ```compile_fail
/// use const_views::{Span, SpanMut};
///
/// let numbers = [10, 20, 30];
/// let span = Span::new(&numbers);
/// let _writable: SpanMut<'_, i32> = span.into();
/// ```
#[derive(Debug)]
pub struct SpanMut<'a, T> {
    slice: &'a mut [T],
}

impl<'a, T> SpanMut<'a, T> {
    /// Views the whole sequence.
    pub fn new(slice: &'a mut [T]) -> Self {
        SpanMut { slice }
    }

    /// Views `slice[start..stop]`, rejecting ranges that do not fit.
    pub fn from_bounds(
        slice: &'a mut [T],
        start: usize,
        stop: usize,
    ) -> Result<Self, RangeError> {
        RangeError::check(start, stop, slice.len())?;
        Ok(SpanMut {
            slice: &mut slice[start..stop],
        })
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.slice
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.slice
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.slice.iter_mut()
    }

    /// Reborrows this view as read-only for as long as the returned span lives.
    pub fn as_span(&self) -> Span<'_, T> {
        Span::new(&*self.slice)
    }
}

impl<'a, T> IntoIterator for SpanMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter_mut()
    }
}

impl<'a, T> From<SpanMut<'a, T>> for Span<'a, T> {
    fn from(span: SpanMut<'a, T>) -> Self {
        Span { slice: span.slice }
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Span::new(slice)
    }
}

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        SpanMut::new(slice)
    }
}
