//! Session error types.
//!
//! Recoverable conditions (malformed guesses, out-of-range difficulty codes)
//! are consumed where they occur and never surface as `SessionError`; the
//! variants here all mean the session cannot continue.

use thiserror::Error;

/// Difficulty code outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("difficulty out of range: {0} (expected 0-3)")]
pub struct DifficultyOutOfRange(pub i64);

/// Fatal failures while driving a drill session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input stream ended while a line was still required.
    #[error("input stream closed")]
    InputClosed,

    /// Reading from the input stream failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
