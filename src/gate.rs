//! Gates for the conditional combinators.
//!
//! A gate decides whether a conditional combinator (`bind_if`, `map_if`, `tap_if`,
//! `tap_error_if`) runs its step. It comes in three forms:
//!
//! - a precomputed `bool`
//! - [`when`]: a zero-argument predicate, evaluated when the combinator executes
//! - [`when_value`]: a predicate over the payload the step would receive
//!
//! Every form is evaluated through [`Gate::admits`], and only after the outcome is
//! known to be in the variant the combinator acts on. A predicate gate on a
//! `Failure` passed to `bind_if` is never called.
//!
//! # Examples
//!
//! ```rust
//! use railway::{Outcome, when, when_value};
//!
//! let verbose = false;
//! let x: Outcome<i32, &str> = Outcome::Success(4);
//!
//! assert_eq!(x.map_if(true, |v| v + 1), Outcome::Success(5));
//! assert_eq!(x.map_if(when(|| verbose), |v| v + 1), Outcome::Success(4));
//! assert_eq!(x.map_if(when_value(|v: &i32| v % 2 == 0), |v| v / 2), Outcome::Success(2));
//! ```

/// Decides whether a conditional step runs for a payload of type `P`.
pub trait Gate<P: ?Sized> {
    /// Evaluate the gate against the payload. Consumes the gate: a gate is
    /// evaluated at most once.
    fn admits(self, payload: &P) -> bool;
}

impl<P: ?Sized> Gate<P> for bool {
    #[inline]
    fn admits(self, _payload: &P) -> bool {
        self
    }
}

/// Gate evaluated lazily from a zero-argument predicate.
#[derive(Debug, Clone, Copy)]
pub struct When<F>(F);

/// Create a gate from a zero-argument predicate.
///
/// The predicate runs only if the outcome is in the variant the combinator acts on.
pub fn when<F>(predicate: F) -> When<F>
where
    F: FnOnce() -> bool,
{
    When(predicate)
}

impl<P: ?Sized, F> Gate<P> for When<F>
where
    F: FnOnce() -> bool,
{
    #[inline]
    fn admits(self, _payload: &P) -> bool {
        (self.0)()
    }
}

/// Gate evaluated from the payload the step would receive.
#[derive(Debug, Clone, Copy)]
pub struct WhenValue<F>(F);

/// Create a gate from a predicate over the payload.
///
/// For `bind_if`, `map_if` and `tap_if` the payload is the success value; for
/// `tap_error_if` it is the error.
pub fn when_value<P: ?Sized, F>(predicate: F) -> WhenValue<F>
where
    F: FnOnce(&P) -> bool,
{
    WhenValue(predicate)
}

impl<P: ?Sized, F> Gate<P> for WhenValue<F>
where
    F: FnOnce(&P) -> bool,
{
    #[inline]
    fn admits(self, payload: &P) -> bool {
        (self.0)(payload)
    }
}
