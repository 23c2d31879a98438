use crate::{
    execution::{Execution, Outcome, WorkerConfig},
    Builder, Either, Error, Function, TaskError,
};
use std::{marker::PhantomData, sync::Arc};

/// Runs `function(input)` on its own thread, at most once, and hands the
/// outcome to any number of waiters.
///
/// Clones share the same computation.
///
/// # Examples
///
/// ```
/// use either_future::{Future, TaskError};
///
/// let future = Future::new(|x: String| Ok::<_, TaskError>(x + " processed"), "job".to_string());
/// let outcome = future.process().wait_for_result();
/// assert_eq!(outcome.get_result(), "job processed");
/// ```
pub struct Future<T, V, E = TaskError> {
    execution: Execution<V, E>,
    _input: PhantomData<fn(T)>,
}

impl<T, V, E> Clone for Future<T, V, E> {
    fn clone(&self) -> Self {
        Self {
            execution: self.execution.clone(),
            _input: PhantomData,
        }
    }
}

impl<T, V, E> Future<T, V, E>
where
    T: Send + 'static,
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Binds `function` to `input` without starting anything.
    pub fn new<F>(function: F, input: T) -> Self
    where
        F: FnOnce(T) -> Result<V, E> + Send + 'static,
    {
        Builder::new().future(function, input)
    }

    pub(crate) fn with_config<F: Function<T, V, E>>(
        config: WorkerConfig,
        function: F,
        input: T,
    ) -> Self {
        Self {
            execution: Execution::new(config, Box::new(move || function(input))),
            _input: PhantomData,
        }
    }

    /// Starts the worker thread. Calling it again, from any thread, does
    /// nothing.
    pub fn process(&self) -> &Self {
        self.execution.launch();
        self
    }

    /// Blocks until the function has returned and yields its outcome. Later
    /// calls return the same cached outcome right away.
    ///
    /// Waiting on a future that is never processed blocks forever.
    ///
    /// # Panics
    ///
    /// Panics if the function panicked or the worker thread could not be
    /// spawned; see [`Future::try_wait_for_result`].
    pub fn wait_for_result(&self) -> Arc<Either<V, E>> {
        match self.try_wait_for_result() {
            Ok(outcome) => outcome,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_wait_for_result(&self) -> Result<Arc<Either<V, E>>, Error> {
        self.execution.wait()
    }

    /// Awaitable counterpart of [`Future::wait_for_result`].
    pub fn outcome(&self) -> Outcome<V, E> {
        self.execution.outcome()
    }

    pub fn is_launched(&self) -> bool {
        self.execution.is_launched()
    }

    pub fn is_completed(&self) -> bool {
        self.execution.is_completed()
    }
}

/// Builds an unlaunched [`Future`].
pub fn new_future<T, V, E, F>(function: F, input: T) -> Future<T, V, E>
where
    T: Send + 'static,
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
    F: FnOnce(T) -> Result<V, E> + Send + 'static,
{
    Future::new(function, input)
}

/// Builds a [`Future`] and launches it right away.
pub fn process_async<T, V, E, F>(function: F, input: T) -> Future<T, V, E>
where
    T: Send + 'static,
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
    F: FnOnce(T) -> Result<V, E> + Send + 'static,
{
    let future = Future::new(function, input);
    future.process();
    future
}
