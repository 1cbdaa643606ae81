//! Combinators over deferred outcomes.
//!
//! A deferred outcome is any `Future<Output = Outcome<T, E>>`. Every combinator comes
//! in four shapes:
//!
//! | input \ step | sync | async |
//! |---|---|---|
//! | immediate [`Outcome`] | `outcome.map(f)` | `outcome.map_async(f)` |
//! | deferred outcome | `deferred.map(f)` | `deferred.map_async(f)` |
//!
//! Only the top-left shape runs without a future. Everything else goes through one
//! sequencing primitive: await the input, hand the settled outcome to a single step,
//! await what that step returns. Immediate outcomes are lifted with
//! [`std::future::ready`], and the "run the step or pass the outcome through" choice
//! is an [`Either`] of two futures. Nothing here runs concurrently; each combinator
//! awaits at most its input and then at most one step.
//!
//! # Examples
//!
//! ```rust
//! use railway::{DeferredOutcome, Outcome};
//! # fn block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     let waker = std::task::Waker::noop();
//! #     let mut cx = std::task::Context::from_waker(waker);
//! #     let mut f = std::pin::pin!(f);
//! #     loop {
//! #         if let std::task::Poll::Ready(v) = f.as_mut().poll(&mut cx) { return v; }
//! #     }
//! # }
//!
//! async fn fetch(id: u32) -> Outcome<u32, String> {
//!     if id == 0 { Outcome::Failure("no such id".into()) } else { Outcome::Success(id * 10) }
//! }
//!
//! let total = Outcome::<u32, String>::Success(4)
//!     .bind_async(fetch)
//!     .map(|v: u32| v + 1)
//!     .ensure(|v| *v < 100, "too large".to_string());
//!
//! assert_eq!(block_on(total), Outcome::Success(41));
//! ```

use std::future::{Future, Ready, ready};

use either::Either;

use crate::{Gate, Outcome};

/// Await `input`, hand the settled value to `step`, then await the future `step`
/// returns.
pub(crate) async fn sequence<I, S, Fut>(input: I, step: S) -> Fut::Output
where
    I: Future,
    S: FnOnce(I::Output) -> Fut,
    Fut: Future,
{
    let settled = input.await;
    step(settled).await
}

/// Pick the future for the variant `outcome` is in.
pub(crate) fn branch<T, E, S, F, SF, FF>(
    outcome: Outcome<T, E>,
    on_success: S,
    on_failure: F,
) -> Either<SF, FF>
where
    S: FnOnce(T) -> SF,
    F: FnOnce(E) -> FF,
    SF: Future,
    FF: Future<Output = SF::Output>,
{
    match outcome {
        Outcome::Success(value) => Either::Left(on_success(value)),
        Outcome::Failure(error) => Either::Right(on_failure(error)),
    }
}

fn pass_failure<U, E>(error: E) -> Ready<Outcome<U, E>> {
    ready(Outcome::Failure(error))
}

fn pass_success<T, E2>(value: T) -> Ready<Outcome<T, E2>> {
    ready(Outcome::Success(value))
}

async fn succeed<U, E, Fut>(pending: Fut) -> Outcome<U, E>
where
    Fut: Future<Output = U>,
{
    Outcome::Success(pending.await)
}

async fn fail<T, E2, Fut>(pending: Fut) -> Outcome<T, E2>
where
    Fut: Future<Output = E2>,
{
    Outcome::Failure(pending.await)
}

async fn lift<U, E, R, Fut>(pending: Fut) -> Outcome<U, E>
where
    Fut: Future<Output = R>,
    R: Into<Outcome<U, E>>,
{
    pending.await.into()
}

/// Await the side effect, if any, then yield `outcome` untouched.
async fn observe<O, Fut>(pending: Option<Fut>, outcome: O) -> O
where
    Fut: Future<Output = ()>,
{
    if let Some(pending) = pending {
        pending.await;
    }
    outcome
}

/// Combinators for any future that resolves to an [`Outcome`].
///
/// Implemented for every `Future<Output = Outcome<T, E>>`. Each method awaits the
/// receiver before looking at its variant, and returns a new future; nothing runs
/// until that future is polled.
pub trait DeferredOutcome<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Deferred [`Outcome::map`].
    fn map<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        sequence(self, move |outcome| ready(outcome.map(f)))
    }

    /// Map the success value through an async function.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        sequence(self, move |outcome| {
            branch(outcome, move |value| succeed(f(value)), pass_failure)
        })
    }

    /// Deferred [`Outcome::map_error`].
    fn map_error<E2, F>(self, f: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> E2,
    {
        sequence(self, move |outcome| ready(outcome.map_error(f)))
    }

    /// Map the failure error through an async function.
    fn map_error_async<E2, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        sequence(self, move |outcome| {
            branch(outcome, pass_success, move |error| fail(f(error)))
        })
    }

    /// Deferred [`Outcome::bind`].
    fn bind<U, R, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> R,
        R: Into<Outcome<U, E>>,
    {
        sequence(self, move |outcome| ready(outcome.bind(f)))
    }

    /// Replace a success with the outcome produced by an async function.
    ///
    /// A failure is passed through and `f` is never called.
    fn bind_async<U, R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
        R: Into<Outcome<U, E>>,
    {
        sequence(self, move |outcome| {
            branch(outcome, move |value| lift(f(value)), pass_failure)
        })
    }

    /// Deferred [`Outcome::ensure`].
    fn ensure<P>(self, predicate: P, error: E) -> impl Future<Output = Outcome<T, E>>
    where
        P: FnOnce(&T) -> bool,
    {
        sequence(self, move |outcome| ready(outcome.ensure(predicate, error)))
    }

    /// Deferred [`Outcome::ensure_or_else`].
    fn ensure_or_else<P, F>(self, predicate: P, factory: F) -> impl Future<Output = Outcome<T, E>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        sequence(self, move |outcome| ready(outcome.ensure_or_else(predicate, factory)))
    }

    /// Deferred [`Outcome::ensure_with`].
    fn ensure_with<P, F>(self, predicate: P, factory: F) -> impl Future<Output = Outcome<T, E>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        sequence(self, move |outcome| ready(outcome.ensure_with(predicate, factory)))
    }

    /// Deferred [`Outcome::tap`].
    fn tap<F>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T),
    {
        sequence(self, move |outcome| ready(outcome.tap(action)))
    }

    /// Run an async side effect on the success value and await it before yielding
    /// the unchanged outcome.
    ///
    /// The action's future must not borrow the value; clone what it needs.
    fn tap_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        sequence(self, move |outcome| {
            let pending = outcome.as_ref().success_value().map(action);
            observe(pending, outcome)
        })
    }

    /// Deferred [`Outcome::tap_error`].
    fn tap_error<F>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&E),
    {
        sequence(self, move |outcome| ready(outcome.tap_error(action)))
    }

    /// Run an async side effect on the failure error and await it before yielding
    /// the unchanged outcome.
    fn tap_error_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        sequence(self, move |outcome| {
            let pending = outcome.as_ref().failure_value().map(action);
            observe(pending, outcome)
        })
    }

    /// Deferred [`Outcome::bind_if`].
    fn bind_if<G, R, F>(self, gate: G, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        G: Gate<T>,
        F: FnOnce(T) -> R,
        R: Into<Outcome<T, E>>,
    {
        sequence(self, move |outcome| ready(outcome.bind_if(gate, f)))
    }

    /// [`bind_async`](Self::bind_async) that only runs when `gate` admits the success
    /// value.
    fn bind_if_async<G, R, F, Fut>(self, gate: G, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        G: Gate<T>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
        R: Into<Outcome<T, E>>,
    {
        sequence(self, move |outcome| {
            if outcome.admits_success(gate) {
                Either::Left(outcome.bind_async(f))
            } else {
                Either::Right(ready(outcome))
            }
        })
    }

    /// Deferred [`Outcome::map_if`].
    fn map_if<G, F>(self, gate: G, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        G: Gate<T>,
        F: FnOnce(T) -> T,
    {
        sequence(self, move |outcome| ready(outcome.map_if(gate, f)))
    }

    /// [`map_async`](Self::map_async) that only runs when `gate` admits the success
    /// value.
    fn map_if_async<G, F, Fut>(self, gate: G, f: F) -> impl Future<Output = Outcome<T, E>>
    where
        G: Gate<T>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = T>,
    {
        sequence(self, move |outcome| {
            if outcome.admits_success(gate) {
                Either::Left(outcome.map_async(f))
            } else {
                Either::Right(ready(outcome))
            }
        })
    }

    /// Deferred [`Outcome::tap_if`].
    fn tap_if<G, F>(self, gate: G, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        G: Gate<T>,
        F: FnOnce(&T),
    {
        sequence(self, move |outcome| ready(outcome.tap_if(gate, action)))
    }

    /// [`tap_async`](Self::tap_async) that only runs when `gate` admits the success
    /// value.
    fn tap_if_async<G, F, Fut>(self, gate: G, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        G: Gate<T>,
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        sequence(self, move |outcome| {
            let pending = if outcome.admits_success(gate) {
                outcome.as_ref().success_value().map(action)
            } else {
                None
            };
            observe(pending, outcome)
        })
    }

    /// Deferred [`Outcome::tap_error_if`].
    fn tap_error_if<G, F>(self, gate: G, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        G: Gate<E>,
        F: FnOnce(&E),
    {
        sequence(self, move |outcome| ready(outcome.tap_error_if(gate, action)))
    }

    /// [`tap_error_async`](Self::tap_error_async) that only runs when `gate` admits
    /// the error.
    fn tap_error_if_async<G, F, Fut>(
        self,
        gate: G,
        action: F,
    ) -> impl Future<Output = Outcome<T, E>>
    where
        G: Gate<E>,
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        sequence(self, move |outcome| {
            let pending = if outcome.admits_failure(gate) {
                outcome.as_ref().failure_value().map(action)
            } else {
                None
            };
            observe(pending, outcome)
        })
    }

    /// Deferred [`Outcome::fold`].
    fn fold<V, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = V>
    where
        S: FnOnce(T) -> V,
        F: FnOnce(E) -> V,
    {
        sequence(self, move |outcome| ready(outcome.fold(on_success, on_failure)))
    }

    /// Fold with two async branches; only the taken branch is called and awaited.
    fn fold_async<V, S, F, SF, FF>(self, on_success: S, on_failure: F) -> impl Future<Output = V>
    where
        S: FnOnce(T) -> SF,
        F: FnOnce(E) -> FF,
        SF: Future<Output = V>,
        FF: Future<Output = V>,
    {
        sequence(self, move |outcome| branch(outcome, on_success, on_failure))
    }

    /// Fold with an async success branch and a sync failure branch.
    fn fold_success_async<V, S, F, SF>(self, on_success: S, on_failure: F) -> impl Future<Output = V>
    where
        S: FnOnce(T) -> SF,
        F: FnOnce(E) -> V,
        SF: Future<Output = V>,
    {
        sequence(self, move |outcome| {
            branch(outcome, on_success, move |error| ready(on_failure(error)))
        })
    }

    /// Fold with a sync success branch and an async failure branch.
    fn fold_failure_async<V, S, F, FF>(self, on_success: S, on_failure: F) -> impl Future<Output = V>
    where
        S: FnOnce(T) -> V,
        F: FnOnce(E) -> FF,
        FF: Future<Output = V>,
    {
        sequence(self, move |outcome| {
            branch(outcome, move |value| ready(on_success(value)), on_failure)
        })
    }
}

impl<T, E, D> DeferredOutcome<T, E> for D where D: Future<Output = Outcome<T, E>> {}

/// Async steps on an immediate outcome.
///
/// Each method lifts the outcome with [`into_deferred`](Outcome::into_deferred) and
/// defers to the matching [`DeferredOutcome`] method.
impl<T, E> Outcome<T, E> {
    /// Lift into an already-resolved deferred outcome.
    #[inline]
    pub fn into_deferred(self) -> Ready<Self> {
        ready(self)
    }

    /// [`map`](Self::map) with an async function.
    pub fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.into_deferred().map_async(f)
    }

    /// [`map_error`](Self::map_error) with an async function.
    pub fn map_error_async<E2, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        self.into_deferred().map_error_async(f)
    }

    /// [`bind`](Self::bind) with an async function.
    ///
    /// ```rust
    /// use railway::Outcome;
    /// # fn block_on<F: std::future::Future>(f: F) -> F::Output {
    /// #     let waker = std::task::Waker::noop();
    /// #     let mut cx = std::task::Context::from_waker(waker);
    /// #     let mut f = std::pin::pin!(f);
    /// #     loop {
    /// #         if let std::task::Poll::Ready(v) = f.as_mut().poll(&mut cx) { return v; }
    /// #     }
    /// # }
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(1);
    /// let y = x.bind_async(|v| async move { Outcome::<i32, &str>::Success(v + 1) });
    /// assert_eq!(block_on(y), Outcome::Success(2));
    /// ```
    pub fn bind_async<U, R, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
        R: Into<Outcome<U, E>>,
    {
        self.into_deferred().bind_async(f)
    }

    /// [`tap`](Self::tap) with an async action.
    pub fn tap_async<F, Fut>(self, action: F) -> impl Future<Output = Self>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.into_deferred().tap_async(action)
    }

    /// [`tap_error`](Self::tap_error) with an async action.
    pub fn tap_error_async<F, Fut>(self, action: F) -> impl Future<Output = Self>
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.into_deferred().tap_error_async(action)
    }

    /// [`bind_if`](Self::bind_if) with an async function.
    pub fn bind_if_async<G, R, F, Fut>(self, gate: G, f: F) -> impl Future<Output = Self>
    where
        G: Gate<T>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
        R: Into<Outcome<T, E>>,
    {
        self.into_deferred().bind_if_async(gate, f)
    }

    /// [`map_if`](Self::map_if) with an async function.
    pub fn map_if_async<G, F, Fut>(self, gate: G, f: F) -> impl Future<Output = Self>
    where
        G: Gate<T>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = T>,
    {
        self.into_deferred().map_if_async(gate, f)
    }

    /// [`tap_if`](Self::tap_if) with an async action.
    pub fn tap_if_async<G, F, Fut>(self, gate: G, action: F) -> impl Future<Output = Self>
    where
        G: Gate<T>,
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.into_deferred().tap_if_async(gate, action)
    }

    /// [`tap_error_if`](Self::tap_error_if) with an async action.
    pub fn tap_error_if_async<G, F, Fut>(self, gate: G, action: F) -> impl Future<Output = Self>
    where
        G: Gate<E>,
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.into_deferred().tap_error_if_async(gate, action)
    }

    /// [`fold`](Self::fold) with two async branches.
    pub fn fold_async<V, S, F, SF, FF>(self, on_success: S, on_failure: F) -> impl Future<Output = V>
    where
        S: FnOnce(T) -> SF,
        F: FnOnce(E) -> FF,
        SF: Future<Output = V>,
        FF: Future<Output = V>,
    {
        self.into_deferred().fold_async(on_success, on_failure)
    }

    /// [`fold`](Self::fold) with an async success branch.
    pub fn fold_success_async<V, S, F, SF>(self, on_success: S, on_failure: F) -> impl Future<Output = V>
    where
        S: FnOnce(T) -> SF,
        F: FnOnce(E) -> V,
        SF: Future<Output = V>,
    {
        self.into_deferred().fold_success_async(on_success, on_failure)
    }

    /// [`fold`](Self::fold) with an async failure branch.
    pub fn fold_failure_async<V, S, F, FF>(self, on_success: S, on_failure: F) -> impl Future<Output = V>
    where
        S: FnOnce(T) -> V,
        F: FnOnce(E) -> FF,
        FF: Future<Output = V>,
    {
        self.into_deferred().fold_failure_async(on_success, on_failure)
    }
}
