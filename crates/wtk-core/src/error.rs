//! Error types for the widget toolkit core.

use thiserror_no_std::Error;

/// Failures reported by the engine.
///
/// Every creation operation returns a `Result` carrying one of these instead
/// of panicking; the engine never retries allocation. An unconsumed command
/// is *not* an error (see [`crate::command::Dispatch::Dropped`]).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiError {
    /// A fixed-capacity pool (window arena, child list, group table, caption
    /// buffer) is exhausted. Recoverable: the caller abandons the screen
    /// under construction and destroys whatever was already created for it.
    #[error("out of memory")]
    OutOfMemory,

    /// A handle referred to a window or group that has been destroyed, or to
    /// a widget of the wrong kind. A programming error on the caller's side;
    /// the operation is rejected without touching the tree.
    #[error("invalid handle")]
    InvalidHandle,
}
