//! Two-variant outcome of every use case.
//!
//! `Either<E, T>` is `Result<T, E>` read left-to-right: the left side
//! carries an expected business failure, the right side the success value.
//! Being an alias keeps `?`, `map` and `and_then` available unchanged.

/// Failure (`Err`, left) or success (`Ok`, right).
pub type Either<E, T> = Result<T, E>;

/// Wraps an expected failure.
pub fn left<E, T>(error: E) -> Either<E, T> {
    Err(error)
}

/// Wraps a success value.
pub fn right<E, T>(value: T) -> Either<E, T> {
    Ok(value)
}

/// Left/right predicates for [`Either`].
pub trait EitherExt {
    /// True when the value holds a failure.
    fn is_left(&self) -> bool;

    /// True when the value holds a success.
    fn is_right(&self) -> bool;
}

impl<T, E> EitherExt for Either<E, T> {
    fn is_left(&self) -> bool {
        self.is_err()
    }

    fn is_right(&self) -> bool {
        self.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_is_left_only() {
        let value: Either<&str, u32> = left("boom");
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value, Err("boom"));
    }

    #[test]
    fn right_is_right_only() {
        let value: Either<&str, u32> = right(7);
        assert!(value.is_right());
        assert!(!value.is_left());
        assert_eq!(value, Ok(7));
    }
}
