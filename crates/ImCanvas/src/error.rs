//! # Errors
//!
//! Contract violations are programmer errors. They are reported through
//! [`contract_violation`], which logs the failure and aborts in debug builds.
//! Release builds return to the caller, which leaves the draw list untouched.

use std::backtrace::Backtrace;
use std::panic::Location;

use thiserror::Error;

/// Every contract the drawing core can see broken.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("pop_clip_rect called with an empty clip stack")]
    PopEmptyClipStack,
    #[error("pop_texture called with an empty texture stack")]
    PopEmptyTextureStack,
    #[error("clip stack not balanced at end of frame ({0} entries left)")]
    UnbalancedClipStack(usize),
    #[error("texture stack not balanced at end of frame ({0} entries left)")]
    UnbalancedTextureStack(usize),
    #[error("arc with a_max ({a_max}) < a_min ({a_min})")]
    InvalidArc { a_min: f32, a_max: f32 },
    #[error("negative radius {0}")]
    NegativeRadius(f32),
    #[error("path continuation issued on an empty path")]
    PathNotStarted,
    #[error("rect with min > max")]
    InvertedRect,
    #[error("sample index {0} out of range")]
    SampleIndexOutOfRange(usize),
    #[error("vertex or index buffer could not grow")]
    ReserveFailed,
    #[error("primitive would overflow the 32-bit index space")]
    VertexOverflow,
    #[error("the active font was dropped while still installed in the context")]
    ActiveFontDropped,
}

/// Errors from loading or saving a [`Theme`](crate::theme::Theme).
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme json is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme file i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Reports a broken contract.
///
/// Logs the location, reason and a backtrace, then aborts when debug
/// assertions are enabled. Callers must return without emitting anything
/// after this returns.
#[track_caller]
pub fn contract_violation(err: DrawError) {
    let location = Location::caller();
    let backtrace = Backtrace::capture();
    tracing::error!(
        %location,
        reason = %err,
        "contract violation\n{backtrace}"
    );
    debug_assert!(false, "contract violation at {location}: {err}");
}
