//! The outcome of a fallible computation: either a value or an error.

use crate::TaskError;

/// Immutable result-or-error wrapper handed out by [`Future`](crate::Future)
/// and [`Promise`](crate::Promise).
///
/// # Examples
///
/// ```
/// use either_future::{Either, TaskError};
///
/// let ok: Either<i32> = Either::from_result(5);
/// assert!(ok.is_result());
/// assert_eq!(*ok.get_result(), 5);
///
/// let failed: Either<i32> = Either::from_error(TaskError::new("boom"));
/// assert!(failed.is_error());
/// assert_eq!(*failed.get_or_else(&7), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Either<V, E = TaskError> {
    Result(V),
    Error(E),
}

impl<V, E> Either<V, E> {
    pub fn from_result(value: V) -> Self {
        Either::Result(value)
    }

    pub fn from_error(err: E) -> Self {
        Either::Error(err)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Either::Error(_))
    }

    pub fn is_result(&self) -> bool {
        !self.is_error()
    }

    /// Returns the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics if this is an error outcome. Check [`Either::is_result`] first,
    /// or use [`Either::get`] / [`Either::get_or_else`].
    pub fn get_result(&self) -> &V {
        match self {
            Either::Result(value) => value,
            Either::Error(_) => panic!("Either contains an error"),
        }
    }

    /// Owning version of [`Either::get_result`], with the same contract.
    pub fn into_result(self) -> V {
        match self {
            Either::Result(value) => value,
            Either::Error(_) => panic!("Either contains an error"),
        }
    }

    pub fn get_error(&self) -> Option<&E> {
        match self {
            Either::Result(_) => None,
            Either::Error(err) => Some(err),
        }
    }

    /// Both slots at once; exactly one of them is `Some`.
    pub fn get(&self) -> (Option<&V>, Option<&E>) {
        match self {
            Either::Result(value) => (Some(value), None),
            Either::Error(err) => (None, Some(err)),
        }
    }

    /// The wrapped value, or `fallback` if this is an error outcome.
    pub fn get_or_else<'a>(&'a self, fallback: &'a V) -> &'a V {
        match self {
            Either::Result(value) => value,
            Either::Error(_) => fallback,
        }
    }

    pub fn as_result(&self) -> Result<&V, &E> {
        match self {
            Either::Result(value) => Ok(value),
            Either::Error(err) => Err(err),
        }
    }

    pub fn into_inner(self) -> Result<V, E> {
        self.into()
    }
}

impl<V, E> From<Result<V, E>> for Either<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Either::Result(value),
            Err(err) => Either::Error(err),
        }
    }
}

impl<V, E> From<Either<V, E>> for Result<V, E> {
    fn from(either: Either<V, E>) -> Self {
        match either {
            Either::Result(value) => Ok(value),
            Either::Error(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::Either;
    use crate::TaskError;

    proptest! {
        #[test]
        fn result_accessors_hold_for_any_value(
            value in prop::num::i64::ANY,
            fallback in prop::num::i64::ANY
        ) {
            let either: Either<i64> = Either::from_result(value);
            prop_assert!(either.is_result());
            prop_assert!(!either.is_error());
            prop_assert_eq!(*either.get_result(), value);
            prop_assert_eq!(*either.get_or_else(&fallback), value);
            prop_assert!(either.get_error().is_none());
        }

        #[test]
        fn error_accessors_hold_for_any_error(message in ".*", fallback in prop::num::i64::ANY) {
            let err = TaskError::new(message.clone());
            let either: Either<i64> = Either::from_error(err.clone());
            prop_assert!(either.is_error());
            prop_assert!(!either.is_result());
            prop_assert_eq!(either.get_error().map(TaskError::message), Some(message.as_str()));
            prop_assert_eq!(*either.get_or_else(&fallback), fallback);
            prop_assert_eq!(either.get(), (None, Some(&err)));
        }
    }

    #[test]
    fn test_either_result() {
        let either: Either<String> = Either::from_result("test-result".into());
        assert!(!either.is_error());
        assert!(either.is_result());
        assert_eq!(either.get_result(), "test-result");
        assert!(either.get_error().is_none());
        assert_eq!(either.get_or_else(&"alternative".into()), "test-result");
        assert_eq!(either.get(), (Some(&"test-result".to_string()), None));
    }

    #[test]
    fn test_either_error() {
        let either: Either<String> = Either::from_error(TaskError::new("test-error"));
        assert!(either.is_error());
        assert!(!either.is_result());
        assert_eq!(either.get_error().map(TaskError::message), Some("test-error"));
        assert_eq!(either.get_or_else(&"alternative".into()), "alternative");
        let (value, err) = either.get();
        assert!(value.is_none());
        assert_eq!(err, Some(&TaskError::new("test-error")));
    }

    #[test]
    #[should_panic(expected = "Either contains an error")]
    fn test_either_error_when_panic() {
        let either: Either<String> = Either::from_error(TaskError::new("test-error"));
        either.get_result();
    }

    #[test]
    #[should_panic(expected = "Either contains an error")]
    fn test_into_result_panics_on_error() {
        let either: Either<u8, &str> = Either::from_error("nope");
        either.into_result();
    }

    #[test]
    fn test_result_conversions() {
        let either: Either<u8, &str> = Ok(3).into();
        assert_eq!(either.as_result(), Ok(&3));
        assert_eq!(either.clone().into_result(), 3);
        assert_eq!(either.into_inner(), Ok(3));

        let either: Either<u8, &str> = Err("bad").into();
        assert_eq!(either.as_result(), Err(&"bad"));
        assert_eq!(Result::from(either), Err("bad"));
    }
}
