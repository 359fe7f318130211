// Forward traversals over half-open views.

use crate::view::{Span, SpanMut};
use std::fmt::Display;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Adds 1 to every element of `span`, in place, front to back.
///
/// `i32::MAX` wraps to `i32::MIN` in every build profile.
pub fn increment_all(span: SpanMut<'_, i32>) {
    debug!(len = span.len(), "incrementing span");
    for value in span {
        let before = *value;
        *value = before.wrapping_add(1);
        trace!(before, after = *value, "incremented element");
    }
}

/// Writes every element of `span` to standard output, one per line.
pub fn print_all<T: Display>(span: Span<'_, T>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_all(span, &mut out)?;
    out.flush()
}

/// Writes every element of `span` to `out`, one per line, in view order.
pub fn write_all<T: Display, W: Write>(span: Span<'_, T>, out: &mut W) -> io::Result<()> {
    debug!(len = span.len(), "printing span");
    let mut cursor = span.cursor();
    while let Some(value) = cursor.get() {
        writeln!(out, "{value}")?;
        cursor.advance();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(span: Span<'_, i32>) -> String {
        let mut out = Vec::new();
        write_all(span, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_increment_all_literal_sequence() {
        let mut numbers = [10, 20, 30];
        increment_all(SpanMut::new(&mut numbers));
        assert_eq!(numbers, [11, 21, 31]);
    }

    #[test]
    fn test_increment_then_write() {
        let mut numbers = [10, 20, 30];
        increment_all(SpanMut::new(&mut numbers));
        assert_eq!(render(Span::new(&numbers)), "11\n21\n31\n");
    }

    #[test]
    fn test_increment_all_empty_range() {
        let mut numbers = [10, 20, 30];
        increment_all(SpanMut::from_bounds(&mut numbers, 1, 1).unwrap());
        assert_eq!(numbers, [10, 20, 30]);
    }

    #[test]
    fn test_write_all_empty_range() {
        let numbers = [10, 20, 30];
        assert_eq!(render(Span::from_bounds(&numbers, 3, 3).unwrap()), "");
    }

    #[test]
    fn test_write_all_negative_values() {
        let numbers = [-1, 0, 1];
        assert_eq!(render(Span::new(&numbers)), "-1\n0\n1\n");
    }

    #[test]
    fn test_increment_after_direct_write() {
        let mut numbers = [1, 2];
        let mut span = SpanMut::new(&mut numbers);
        span.as_mut_slice()[0] = 5;
        increment_all(span);
        assert_eq!(numbers, [6, 3]);
    }

    #[test]
    fn test_write_all_generic_display() {
        let words = ["a", "b"];
        let mut out = Vec::new();
        write_all(Span::new(&words), &mut out).unwrap();
        assert_eq!(out, b"a\nb\n");
    }

    #[test]
    fn test_print_all_empty_span_succeeds() {
        let numbers: [i32; 0] = [];
        assert!(print_all(Span::new(&numbers)).is_ok());
    }

    #[test]
    fn test_increment_all_wraps_at_max() {
        let mut numbers = [1, i32::MAX, 3];
        increment_all(SpanMut::new(&mut numbers));
        assert_eq!(numbers, [2, i32::MIN, 4]);
    }

    #[test]
    fn test_increment_all_min_and_minus_one() {
        let mut numbers = [i32::MIN, -1];
        increment_all(SpanMut::new(&mut numbers));
        assert_eq!(numbers, [i32::MIN + 1, 0]);
    }

    prop_compose! {
        fn sequence_with_range()(
            values in prop::collection::vec(any::<i32>(), 0..64)
        )(
            start in 0..=values.len(),
            stop in 0..=values.len(),
            values in Just(values),
        ) -> (Vec<i32>, usize, usize) {
            (values, start.min(stop), start.max(stop))
        }
    }

    proptest! {
        #[test]
        fn test_increment_touches_only_the_range((original, start, stop) in sequence_with_range()) {
            let mut values = original.clone();
            increment_all(SpanMut::from_bounds(&mut values, start, stop).unwrap());

            for (i, (after, before)) in values.iter().zip(&original).enumerate() {
                if (start..stop).contains(&i) {
                    prop_assert_eq!(*after, before.wrapping_add(1));
                } else {
                    prop_assert_eq!(*after, *before);
                }
            }
        }

        #[test]
        fn test_write_preserves_order_and_values((values, start, stop) in sequence_with_range()) {
            let text = render(Span::from_bounds(&values, start, stop).unwrap());
            let parsed: Vec<i32> = text.lines().map(|line| line.parse().unwrap()).collect();
            prop_assert_eq!(&parsed[..], &values[start..stop]);
        }

        #[test]
        fn test_empty_range_is_a_no_op(values in prop::collection::vec(any::<i32>(), 0..16), at in 0usize..16) {
            let at = at.min(values.len());
            let mut copy = values.clone();
            increment_all(SpanMut::from_bounds(&mut copy, at, at).unwrap());
            prop_assert_eq!(&copy, &values);
            prop_assert_eq!(render(Span::from_bounds(&values, at, at).unwrap()), "");
        }
    }
}
