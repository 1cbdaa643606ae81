use crate::Outcome;

impl<T, E> Outcome<T, E> {
    /// Calls `action` with the success value, then returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let x: Outcome<i32, &str> = Outcome::Success(3);
    /// let y = x.tap(|v| seen.push(*v));
    ///
    /// assert_eq!(y, Outcome::Success(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` with the failure error, then returns the outcome unchanged.
    #[inline]
    pub fn tap_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(error) = &self {
            action(error);
        }
        self
    }
}
