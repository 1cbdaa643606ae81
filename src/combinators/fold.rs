use crate::Outcome;

impl<T, E> Outcome<T, E> {
    /// Collapses the outcome into a single value, calling exactly one of the two
    /// branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let status = |o: Outcome<u32, String>| o.fold(|n| format!("{n} rows"), |e| format!("error: {e}"));
    ///
    /// assert_eq!(status(Outcome::Success(3)), "3 rows");
    /// assert_eq!(status(Outcome::Failure("locked".into())), "error: locked");
    /// ```
    #[inline]
    pub fn fold<V, S, F>(self, on_success: S, on_failure: F) -> V
    where
        S: FnOnce(T) -> V,
        F: FnOnce(E) -> V,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }
}
