use crate::Outcome;

impl<T, E> Outcome<T, E> {
    /// Demotes a `Success` to `Failure(error)` when `predicate` rejects its value.
    ///
    /// A `Failure` is returned unchanged and `predicate` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(5);
    /// assert_eq!(x.ensure(|v| *v > 0, "negative"), Outcome::Success(5));
    /// assert_eq!(x.ensure(|v| *v < 5, "too big"), Outcome::Failure("too big"));
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_with(predicate, move |_| error)
    }

    /// Like [`ensure`](Self::ensure), building the error from `factory` only when the
    /// value is rejected.
    #[inline]
    pub fn ensure_or_else<P, F>(self, predicate: P, factory: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        self.ensure_with(predicate, move |_| factory())
    }

    /// Like [`ensure`](Self::ensure), building the error from the rejected value.
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let port: Outcome<u32, String> = Outcome::Success(70_000);
    /// let checked = port.ensure_with(|p| *p <= 65_535, |p| format!("port {p} out of range"));
    /// assert_eq!(checked, Outcome::Failure("port 70000 out of range".to_string()));
    /// ```
    pub fn ensure_with<P, F>(self, predicate: P, factory: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        self.bind(|value| {
            if predicate(&value) {
                Outcome::Success(value)
            } else {
                tracing::trace!("ensure rejected success value");
                Outcome::Failure(factory(value))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Outcome;
    use std::cell::Cell;

    #[test]
    fn test_ensure_keeps_accepted_value() {
        let x: Outcome<i32, &str> = Outcome::Success(5);
        assert_eq!(x.ensure(|v| *v > 0, "negative"), Outcome::Success(5));
    }

    #[test]
    fn test_ensure_demotes_rejected_value() {
        let x: Outcome<i32, &str> = Outcome::Success(-1);
        assert_eq!(x.ensure(|v| *v > 0, "negative"), Outcome::Failure("negative"));
    }

    #[test]
    fn test_ensure_skips_predicate_on_failure() {
        let calls = Cell::new(0);
        let x: Outcome<i32, &str> = Outcome::Failure("earlier");
        let out = x.ensure(
            |_| {
                calls.set(calls.get() + 1);
                false
            },
            "later",
        );

        assert_eq!(out, Outcome::Failure("earlier"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_ensure_or_else_is_lazy() {
        let built = Cell::new(false);
        let accepted: Outcome<i32, String> = Outcome::Success(1);
        let out = accepted.ensure_or_else(
            |v| *v == 1,
            || {
                built.set(true);
                "unreachable".to_string()
            },
        );

        assert_eq!(out, Outcome::Success(1));
        assert!(!built.get());

        let rejected: Outcome<i32, String> = Outcome::Success(2);
        assert_eq!(
            rejected.ensure_or_else(|v| *v == 1, || "not one".to_string()),
            Outcome::Failure("not one".to_string())
        );
    }

    #[test]
    fn test_ensure_with_receives_value() {
        let x: Outcome<Vec<u8>, usize> = Outcome::Success(vec![1, 2, 3]);
        assert_eq!(x.ensure_with(|v| v.is_empty(), |v| v.len()), Outcome::Failure(3));
    }

    #[test]
    fn test_ensure_with_skips_factory_on_failure() {
        let calls = Cell::new(0);
        let x: Outcome<i32, i32> = Outcome::Failure(9);
        let out = x.ensure_with(
            |_| false,
            |v| {
                calls.set(calls.get() + 1);
                v
            },
        );

        assert_eq!(out, Outcome::Failure(9));
        assert_eq!(calls.get(), 0);
    }
}
