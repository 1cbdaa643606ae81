//! Derived synchronous combinators.
//!
//! Each one is an inherent method on [`Outcome`](crate::Outcome) built on the
//! transformation primitives (`map`, `map_error`, `bind`):
//!
//! - validation: [`ensure`](crate::Outcome::ensure) and its factory forms
//! - side effects: [`tap`](crate::Outcome::tap), [`tap_error`](crate::Outcome::tap_error)
//! - conditional gating: `bind_if`, `map_if`, `tap_if`, `tap_error_if`
//! - elimination: [`fold`](crate::Outcome::fold)

mod ensure;
mod fold;
mod gated;
mod tap;
