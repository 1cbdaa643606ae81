//! The invalid-state fault.
//!
//! Reading the inactive variant of an [`Outcome`](crate::Outcome) is a contract
//! violation by the caller, not a domain failure. It is never folded into the
//! `Failure` channel: the checked readers raise it as a panic at the call site.

use thiserror::Error;

/// Which variant a checked reader expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("the outcome is not a Success")]
    NotSuccess,
    #[error("the outcome is not a Failure")]
    NotFailure,
}

impl InvalidState {
    /// Name of the variant the reader expected.
    pub const fn expected(self) -> &'static str {
        match self {
            InvalidState::NotSuccess => "Success",
            InvalidState::NotFailure => "Failure",
        }
    }
}

/// Abort the current operation with `fault`.
#[cold]
#[track_caller]
pub(crate) fn raise(fault: InvalidState) -> ! {
    tracing::error!(expected = fault.expected(), "invalid outcome access");
    panic!("{fault}")
}

/// Abort the current operation with a caller-supplied message.
#[cold]
#[track_caller]
pub(crate) fn raise_with(fault: InvalidState, msg: &str) -> ! {
    tracing::error!(expected = fault.expected(), "invalid outcome access: {msg}");
    panic!("{msg}: {fault}")
}
