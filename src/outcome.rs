use either::Either;

use crate::fault::{self, InvalidState};

/// Result of a fallible step: either a `Success` carrying the value or a `Failure`
/// carrying the domain error.
///
/// `Outcome` is the single type every combinator in this crate consumes and produces.
/// Once an outcome is a `Failure`, no later step body in a chain runs; the error is
/// carried unchanged to whoever eliminates the outcome.
///
/// # Examples
///
/// ```rust
/// use railway::Outcome;
///
/// let parsed: Outcome<i32, &str> = Outcome::success(21);
/// let doubled = parsed.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Success(42));
///
/// let missing: Outcome<i32, &str> = Outcome::failure("missing");
/// assert_eq!(missing.map(|x| x * 2), Outcome::Failure("missing"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The step succeeded with a value
    Success(T),
    /// The step failed with a domain error
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Build a `Success`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Build a `Failure`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Returns `true` if the outcome is `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(42);
    /// assert!(x.is_success());
    ///
    /// let y: Outcome<i32, &str> = Outcome::Failure("boom");
    /// assert!(!y.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Converts from `Outcome<T, E>` to `Option<T>`, discarding the error, if any.
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts from `Outcome<T, E>` to `Option<E>`, discarding the value, if any.
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `true` if the outcome is a `Success` holding a value equal to `value`.
    #[inline]
    pub fn contains_success<U>(&self, value: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Outcome::Success(v) if value == v)
    }

    /// Returns `true` if the outcome is a `Failure` holding an error equal to `error`.
    #[inline]
    pub fn contains_failure<U>(&self, error: &U) -> bool
    where
        U: PartialEq<E>,
    {
        matches!(self, Outcome::Failure(e) if error == e)
    }

    /// Borrow the success value.
    ///
    /// # Panics
    ///
    /// Raises [`InvalidState::NotSuccess`] if the outcome is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn success_ref(&self) -> &T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => fault::raise(InvalidState::NotSuccess),
        }
    }

    /// Borrow the failure error.
    ///
    /// # Panics
    ///
    /// Raises [`InvalidState::NotFailure`] if the outcome is a `Success`.
    #[inline]
    #[track_caller]
    pub fn failure_ref(&self) -> &E {
        match self {
            Outcome::Success(_) => fault::raise(InvalidState::NotFailure),
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the contained `Success` value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Raises [`InvalidState::NotSuccess`] if the outcome is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(42);
    /// assert_eq!(x.unwrap_success(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use railway::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Failure("boom");
    /// x.unwrap_success(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => fault::raise(InvalidState::NotSuccess),
        }
    }

    /// Returns the contained `Failure` error, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Raises [`InvalidState::NotFailure`] if the outcome is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Outcome::Success(_) => fault::raise(InvalidState::NotFailure),
            Outcome::Failure(error) => error,
        }
    }

    /// Like [`unwrap_success`](Self::unwrap_success), prefixing the fault with `msg`.
    #[inline]
    #[track_caller]
    pub fn expect_success(self, msg: &str) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => fault::raise_with(InvalidState::NotSuccess, msg),
        }
    }

    /// Like [`unwrap_failure`](Self::unwrap_failure), prefixing the fault with `msg`.
    #[inline]
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> E {
        match self {
            Outcome::Success(_) => fault::raise_with(InvalidState::NotFailure, msg),
            Outcome::Failure(error) => error,
        }
    }

    /// Convert into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Convert into an [`Either`], success on the left.
    #[inline]
    pub fn into_either(self) -> Either<T, E> {
        match self {
            Outcome::Success(value) => Either::Left(value),
            Outcome::Failure(error) => Either::Right(error),
        }
    }

    /// Maps the success value, leaving a `Failure` untouched.
    ///
    /// `f` is never invoked on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(5);
    /// assert_eq!(x.map(|v| v * 2), Outcome::Success(10));
    ///
    /// let y: Outcome<i32, &str> = Outcome::Failure("boom");
    /// assert_eq!(y.map(|v| v * 2), Outcome::Failure("boom"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure error, leaving a `Success` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Failure("boom");
    /// assert_eq!(x.map_error(str::len), Outcome::Failure(4));
    ///
    /// let y: Outcome<i32, &str> = Outcome::Success(1);
    /// assert_eq!(y.map_error(str::len), Outcome::Success(1));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Replaces a `Success` with whatever `f` produces from its value.
    ///
    /// This is the sequencing primitive: a `Failure` is returned as-is and `f` is not
    /// called. `f` may return an [`Outcome`] or a [`Result`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, String> {
    ///     if x % 2 == 0 { Outcome::Success(x / 2) } else { Outcome::Failure(format!("{x} is odd")) }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).bind(half).bind(half), Outcome::Success(2));
    /// assert_eq!(Outcome::success(6).bind(half).bind(half), Outcome::Failure("3 is odd".to_string()));
    ///
    /// let parsed: Outcome<u8, std::num::ParseIntError> =
    ///     Outcome::success("7").bind(|s: &str| s.parse::<u8>());
    /// assert_eq!(parsed, Outcome::Success(7));
    /// ```
    #[inline]
    pub fn bind<U, R, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> R,
        R: Into<Outcome<U, E>>,
    {
        match self {
            Outcome::Success(value) => f(value).into(),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Either<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(either: Either<T, E>) -> Self {
        match either {
            Either::Left(value) => Outcome::Success(value),
            Either::Right(error) => Outcome::Failure(error),
        }
    }
}

/// Lift a bare value into an [`Outcome`].
///
/// Implemented for every type, so any value can be wrapped at the call site without
/// naming the outcome type in full.
///
/// ```rust
/// use railway::{Lift, Outcome};
///
/// let ok: Outcome<i32, String> = 3.into_success();
/// let err: Outcome<i32, String> = "bad input".to_string().into_failure();
/// assert!(ok.is_success());
/// assert!(err.is_failure());
/// ```
pub trait Lift: Sized {
    /// Wrap `self` as a `Success`.
    #[inline]
    fn into_success<E>(self) -> Outcome<Self, E> {
        Outcome::Success(self)
    }

    /// Wrap `self` as a `Failure`.
    #[inline]
    fn into_failure<T>(self) -> Outcome<T, Self> {
        Outcome::Failure(self)
    }
}

impl<V> Lift for V {}
