// A position inside a read-only view.
//
// The elements behind a cursor are immutable, but the cursor itself moves. Whether it may
// move is decided by the binding: a cursor bound without `mut` stays where it is.

use crate::view::Span;

/// A re-seatable position over a [`Span`].
///
/// Reading through a cursor is allowed, writing is not:
///
/// ```compile_fail
/// use const_views::Span;
///
/// let numbers = [10, 20, 30];
/// let cursor = Span::new(&numbers).cursor();
/// if let Some(value) = cursor.get() {
///     *value = 0;
/// }
/// ```
///
/// A cursor bound without `mut` cannot be advanced:
///
/// ```compile_fail
/// use const_views::Span;
///
/// let numbers = [10, 20, 30];
/// let cursor = Span::new(&numbers).cursor();
/// cursor.advance();
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    span: Span<'a, T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(span: Span<'a, T>) -> Self {
        Cursor { span, position: 0 }
    }

    /// The element under the cursor, or `None` once the cursor reaches `stop`.
    pub fn get(&self) -> Option<&'a T> {
        self.span.as_slice().get(self.position)
    }

    /// Steps one element forward. Returns `false` if the cursor was already at `stop`.
    pub fn advance(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.span.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.span.len() - self.position
    }

    /// Moves the cursor back to `start`.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}
