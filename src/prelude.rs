//! Commonly used imports
//!
//! Use `use railway::prelude::*;` for the outcome type, lifting, gates and the
//! deferred combinators in one line.

// Core types
pub use crate::{Outcome, InvalidState};

// Lifting bare values
pub use crate::Lift;

// Gates
pub use crate::{Gate, when, when_value};

// Async combinators
pub use crate::DeferredOutcome;
