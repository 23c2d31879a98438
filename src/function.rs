//! Fallible units of work accepted by [`Future`](crate::Future) and
//! [`Promise`](crate::Promise).

use crate::TaskError;

/// A fallible function of one input, run at most once.
///
/// Implemented for every matching closure or `fn` item; it names the bound
/// rather than adding behaviour.
pub trait Function<T, V, E = TaskError>: FnOnce(T) -> Result<V, E> + Send + 'static {}

impl<T, V, E, F> Function<T, V, E> for F where F: FnOnce(T) -> Result<V, E> + Send + 'static {}

/// A fallible function with everything it needs already captured.
pub trait Task<V, E = TaskError>: FnOnce() -> Result<V, E> + Send + 'static {}

impl<V, E, F> Task<V, E> for F where F: FnOnce() -> Result<V, E> + Send + 'static {}

/// Applies `f` to every item in order, stopping at the first error.
///
/// ```
/// use either_future::{for_each, TaskError};
///
/// let doubled = for_each(vec![1, 2, 3], |x: i32| Ok::<_, TaskError>(x * 2));
/// assert_eq!(doubled, Ok(vec![2, 4, 6]));
/// ```
pub fn for_each<T, V, E, I, F>(items: I, mut f: F) -> Result<Vec<V>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<V, E>,
{
    items.into_iter().map(|item| f(item)).collect()
}
