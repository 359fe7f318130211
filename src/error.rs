use thiserror::Error;

/// Rejections raised while building a view over a sub-range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("range start {start} is past its stop {stop}")]
    StartAfterStop { start: usize, stop: usize },

    #[error("range stop {stop} is out of bounds for a sequence of length {len}")]
    OutOfBounds { stop: usize, len: usize },
}

impl RangeError {
    /// Checks `[start, stop)` against a sequence of `len` elements.
    pub fn check(start: usize, stop: usize, len: usize) -> Result<(), RangeError> {
        if start > stop {
            return Err(RangeError::StartAfterStop { start, stop });
        }
        if stop > len {
            return Err(RangeError::OutOfBounds { stop, len });
        }
        Ok(())
    }
}
