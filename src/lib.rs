//! Read-only and read-write views over a borrowed integer sequence.
//!
//! A [`SpanMut`] may write the elements it covers, a [`Span`] may only read them, and the
//! compiler enforces the difference. A mutable view converts into a read-only one; the
//! reverse conversion does not exist.

pub mod cursor;
pub mod error;
pub mod raw;
pub mod traverse;
pub mod view;

pub use cursor::Cursor;
pub use error::RangeError;
pub use traverse::{increment_all, print_all, write_all};
pub use view::{Span, SpanMut};
