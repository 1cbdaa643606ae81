use crate::{Gate, Outcome};

impl<T, E> Outcome<T, E> {
    /// Evaluates `gate` against the success value; `false` on a `Failure`.
    ///
    /// The gate is consumed without being evaluated when the outcome is a `Failure`.
    #[inline]
    pub(crate) fn admits_success<G: Gate<T>>(&self, gate: G) -> bool {
        match self {
            Outcome::Success(value) => gate.admits(value),
            Outcome::Failure(_) => false,
        }
    }

    /// Evaluates `gate` against the failure error; `false` on a `Success`.
    #[inline]
    pub(crate) fn admits_failure<G: Gate<E>>(&self, gate: G) -> bool {
        match self {
            Outcome::Success(_) => false,
            Outcome::Failure(error) => gate.admits(error),
        }
    }

    /// [`bind`](Self::bind) that only runs when `gate` admits the success value.
    ///
    /// A skipped step returns the outcome unchanged, so `f` keeps the success type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::{Outcome, when_value};
    ///
    /// let cap = |v: i32| if v > 100 { Outcome::Failure("over cap") } else { Outcome::Success(v) };
    ///
    /// let small: Outcome<i32, &str> = Outcome::Success(5);
    /// assert_eq!(small.bind_if(false, cap), Outcome::Success(5));
    ///
    /// let large: Outcome<i32, &str> = Outcome::Success(500);
    /// assert_eq!(large.bind_if(when_value(|v: &i32| *v > 10), cap), Outcome::Failure("over cap"));
    /// ```
    pub fn bind_if<G, R, F>(self, gate: G, f: F) -> Self
    where
        G: Gate<T>,
        F: FnOnce(T) -> R,
        R: Into<Outcome<T, E>>,
    {
        if self.admits_success(gate) {
            self.bind(f)
        } else {
            self
        }
    }

    /// [`map`](Self::map) that only runs when `gate` admits the success value.
    pub fn map_if<G, F>(self, gate: G, f: F) -> Self
    where
        G: Gate<T>,
        F: FnOnce(T) -> T,
    {
        if self.admits_success(gate) {
            self.map(f)
        } else {
            self
        }
    }

    /// [`tap`](Self::tap) that only runs when `gate` admits the success value.
    pub fn tap_if<G, F>(self, gate: G, action: F) -> Self
    where
        G: Gate<T>,
        F: FnOnce(&T),
    {
        if self.admits_success(gate) {
            self.tap(action)
        } else {
            self
        }
    }

    /// [`tap_error`](Self::tap_error) that only runs when `gate` admits the error.
    ///
    /// ```rust
    /// use railway::{Outcome, when_value};
    ///
    /// let mut alerts = Vec::new();
    /// let x: Outcome<(), &str> = Outcome::Failure("disk full");
    /// let _ = x.tap_error_if(when_value(|e: &&str| e.starts_with("disk")), |e| alerts.push(*e));
    /// assert_eq!(alerts, vec!["disk full"]);
    /// ```
    pub fn tap_error_if<G, F>(self, gate: G, action: F) -> Self
    where
        G: Gate<E>,
        F: FnOnce(&E),
    {
        if self.admits_failure(gate) {
            self.tap_error(action)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Outcome, when, when_value};
    use std::cell::Cell;

    fn halve(v: i32) -> Outcome<i32, String> {
        if v % 2 == 0 {
            Outcome::Success(v / 2)
        } else {
            Outcome::Failure(format!("{v} is odd"))
        }
    }

    #[test]
    fn test_bind_if_fixed_gate() {
        let x: Outcome<i32, String> = Outcome::Success(8);
        assert_eq!(x.clone().bind_if(true, halve), Outcome::Success(4));
        assert_eq!(x.bind_if(false, halve), Outcome::Success(8));
    }

    #[test]
    fn test_bind_if_can_fail() {
        let x: Outcome<i32, String> = Outcome::Success(3);
        assert_eq!(x.bind_if(true, halve), Outcome::Failure("3 is odd".to_string()));
    }

    #[test]
    fn test_bind_if_lazy_gate_not_evaluated_on_failure() {
        let evaluated = Cell::new(false);
        let x: Outcome<i32, String> = Outcome::Failure("earlier".to_string());
        let out = x.bind_if(
            when(|| {
                evaluated.set(true);
                true
            }),
            halve,
        );

        assert_eq!(out, Outcome::Failure("earlier".to_string()));
        assert!(!evaluated.get());
    }

    #[test]
    fn test_bind_if_value_gate_not_evaluated_on_failure() {
        let evaluated = Cell::new(false);
        let x: Outcome<i32, String> = Outcome::Failure("earlier".to_string());
        let out = x.bind_if(
            when_value(|_: &i32| {
                evaluated.set(true);
                true
            }),
            halve,
        );

        assert_eq!(out, Outcome::Failure("earlier".to_string()));
        assert!(!evaluated.get());
    }

    #[test]
    fn test_map_if_value_gate() {
        let x: Outcome<i32, &str> = Outcome::Success(7);
        assert_eq!(x.map_if(when_value(|v: &i32| *v > 5), |v| v * 10), Outcome::Success(70));
        assert_eq!(x.map_if(when_value(|v: &i32| *v > 50), |v| v * 10), Outcome::Success(7));
    }

    #[test]
    fn test_map_if_lazy_gate() {
        let x: Outcome<i32, &str> = Outcome::Success(7);
        assert_eq!(x.map_if(when(|| false), |v| v + 1), Outcome::Success(7));
        assert_eq!(x.map_if(when(|| true), |v| v + 1), Outcome::Success(8));
    }

    #[test]
    fn test_tap_if_skips_failure() {
        let calls = Cell::new(0);
        let x: Outcome<i32, &str> = Outcome::Failure("boom");
        let out = x.tap_if(true, |_| calls.set(calls.get() + 1));

        assert_eq!(out, Outcome::Failure("boom"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_tap_if_gate_decides() {
        let calls = Cell::new(0);
        let x: Outcome<i32, &str> = Outcome::Success(1);
        let _ = x.tap_if(false, |_| calls.set(calls.get() + 1));
        let _ = x.tap_if(when_value(|v: &i32| *v == 1), |_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_tap_error_if_value_gate() {
        let seen = Cell::new(0);
        let x: Outcome<(), u16> = Outcome::Failure(503);
        let _ = x.tap_error_if(when_value(|code: &u16| *code >= 500), |code| seen.set(*code));
        assert_eq!(seen.get(), 503);
    }

    #[test]
    fn test_tap_error_if_gate_not_evaluated_on_success() {
        let evaluated = Cell::new(false);
        let x: Outcome<i32, u16> = Outcome::Success(1);
        let out = x.tap_error_if(
            when_value(|_: &u16| {
                evaluated.set(true);
                true
            }),
            |_| {},
        );

        assert_eq!(out, Outcome::Success(1));
        assert!(!evaluated.get());
    }
}
