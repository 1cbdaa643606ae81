//! # Railway: Two-Track Error Propagation
//!
//! Build pipelines of fallible steps where the first failure short-circuits every
//! step after it, in synchronous code and across `await` points alike.
//!
//! ## Core Types
//!
//! - **[`Outcome<T, E>`]**: `Success(T)` or `Failure(E)`, the value every combinator
//!   consumes and produces
//! - **[`DeferredOutcome`]**: the same combinators on any `Future<Output = Outcome<T, E>>`
//! - **[`Gate`]**: the condition controlling the `*_if` combinators
//!
//! ## Key Features
//!
//! - **Short-circuiting**: once an outcome is a `Failure`, no later step body runs and
//!   the error reaches the caller unchanged
//! - **Sync and async**: every combinator accepts an immediate or deferred outcome and a
//!   sync or async step; only the all-sync shape runs without a future
//! - **Lazy gates**: predicate gates are evaluated only when the outcome is in the
//!   variant the combinator acts on
//!
//! ## Example
//!
//! ```
//! use railway::*;
//!
//! let checked = Outcome::<i32, &str>::success(5)
//!     .ensure(|x| *x > 0, "negative")   // Success(5)
//!     .map(|x| x * 2)                   // Success(10)
//!     .ensure(|x| *x < 5, "too big")    // Failure("too big")
//!     .map(|x| x + 1);                  // skipped
//!
//! assert_eq!(checked, Outcome::Failure("too big"));
//! ```
//!
//! ## Common Functions
//!
//! **Transforming:**
//! - [`map(f)`](Outcome::map), [`map_error(f)`](Outcome::map_error) - Rewrite one track
//! - [`bind(f)`](Outcome::bind) - Sequence another fallible step
//! - [`ensure(predicate, error)`](Outcome::ensure) - Demote a success that fails a check
//!
//! **Observing and gating:**
//! - [`tap(action)`](Outcome::tap), [`tap_error(action)`](Outcome::tap_error) - Side effects
//! - [`bind_if`](Outcome::bind_if), [`map_if`](Outcome::map_if), [`tap_if`](Outcome::tap_if),
//!   [`tap_error_if`](Outcome::tap_error_if) - Steps guarded by a `bool`, [`when`] or
//!   [`when_value`]
//!
//! **Eliminating:**
//! - [`fold(on_success, on_failure)`](Outcome::fold) - Collapse into one value
//!
//! ## Faults
//!
//! Reading the inactive variant (for example [`unwrap_success`](Outcome::unwrap_success)
//! on a `Failure`) is a programming error. It panics with an [`InvalidState`] message
//! and is never turned into a `Failure`.

mod combinators;
mod deferred;
mod fault;
mod gate;
mod outcome;
pub mod prelude;

pub use deferred::*;
pub use fault::InvalidState;
pub use gate::*;
pub use outcome::*;
