// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for pulling from lazy sequences.

use thiserror::Error;

/// Failures a pull can report.
///
/// The valid end of a finite sequence is *not* an error: it is reported as
/// `Ok(None)`. `Exhausted` is raised only by operations that needed one more
/// value and found none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A value was required but the upstream sequence had ended.
    #[error("sequence exhausted: a value was required but none remained")]
    Exhausted,

    /// A memoized sequence was asked for the position it is currently producing.
    ///
    /// This happens when the underlying producer of a memo (transitively) pulls
    /// from one of that memo's own cursors at a position not yet cached.
    #[error("reentrant pull: memo position {position} requested while it is being produced")]
    ReentrantPull { position: usize },

    /// A deferred cursor was pulled before its knot was tied.
    #[error("deferred cursor pulled before its knot was tied")]
    Unbound,

    /// A deferred cursor outlived the memo it referred to.
    #[error("deferred cursor pulled after its memo was released")]
    Released,

    /// A numeric stream produced a value too large for its element type.
    #[error("arithmetic overflow producing position {position}")]
    Overflow { position: usize },
}

/// Result of a single sequence operation.
pub type SeqResult<T> = Result<T, SeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SeqError::Exhausted.to_string(),
            "sequence exhausted: a value was required but none remained"
        );
        assert_eq!(
            SeqError::ReentrantPull { position: 3 }.to_string(),
            "reentrant pull: memo position 3 requested while it is being produced"
        );
        assert_eq!(
            SeqError::Overflow { position: 94 }.to_string(),
            "arithmetic overflow producing position 94"
        );
    }
}
