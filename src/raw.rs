// Pointer-pair traversals.
//
// These walk `[start, stop)` the way the views do, but over raw pointers, so the caller
// carries the bounds contract instead of the borrow checker.

/// Adds 1 to every `i32` in `[start, stop)`, wrapping `i32::MAX` to `i32::MIN`.
///
/// # Safety
/// - `start` and `stop` must point into (or one past the end of) the same allocation.
/// - `stop` must be reachable from `start` by stepping forward whole elements.
/// - Every element in the range must be initialised and not aliased by any live reference.
pub unsafe fn increment_all(start: *mut i32, stop: *mut i32) {
    let mut current = start;
    while current != stop {
        *current = (*current).wrapping_add(1);
        current = current.add(1);
    }
}

/// Sums every `i32` in `[start, stop)` through a pointer to const.
///
/// # Safety
/// - `start` and `stop` must point into (or one past the end of) the same allocation.
/// - `stop` must be reachable from `start` by stepping forward whole elements.
/// - Every element in the range must be initialised.
///
/// The pointee is const, so the elements cannot be written through it:
///
/// ```compile_fail
/// let numbers = [1, 2, 3];
/// let p: *const i32 = numbers.as_ptr();
/// unsafe { *p = 5; }
/// ```
pub unsafe fn sum_all(start: *const i32, stop: *const i32) -> i64 {
    let mut current = start;
    let mut total = 0i64;
    while current != stop {
        total += i64::from(*current);
        current = current.add(1);
    }
    total
}
