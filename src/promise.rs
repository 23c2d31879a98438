use crate::{
    execution::{Execution, Outcome, WorkerConfig},
    Builder, Either, Error, Task, TaskError,
};
use std::sync::Arc;

/// Runs a zero-argument task on its own thread, at most once.
///
/// Same contract as [`Future`](crate::Future); the task captures whatever
/// input it needs.
///
/// ```
/// use either_future::{compute_async, TaskError};
///
/// let promise = compute_async(|| Ok::<_, TaskError>(6 * 7));
/// assert_eq!(*promise.wait_for_result().get_result(), 42);
/// ```
pub struct Promise<V, E = TaskError> {
    execution: Execution<V, E>,
}

impl<V, E> Clone for Promise<V, E> {
    fn clone(&self) -> Self {
        Self {
            execution: self.execution.clone(),
        }
    }
}

impl<V, E> Promise<V, E>
where
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    pub fn new<F>(task: F) -> Self
    where
        F: FnOnce() -> Result<V, E> + Send + 'static,
    {
        Builder::new().promise(task)
    }

    pub(crate) fn with_config<F: Task<V, E>>(config: WorkerConfig, task: F) -> Self {
        Self {
            execution: Execution::new(config, Box::new(task)),
        }
    }

    /// Starts the worker thread; further calls are no-ops.
    pub fn compute(&self) -> &Self {
        self.execution.launch();
        self
    }

    /// Blocks until the task is done and returns its cached outcome.
    ///
    /// # Panics
    ///
    /// Panics if the task panicked or its thread could not be spawned.
    pub fn wait_for_result(&self) -> Arc<Either<V, E>> {
        match self.try_wait_for_result() {
            Ok(outcome) => outcome,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_wait_for_result(&self) -> Result<Arc<Either<V, E>>, Error> {
        self.execution.wait()
    }

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

pub fn new_promise<V, E, F>(task: F) -> Promise<V, E>
where
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
    F: FnOnce() -> Result<V, E> + Send + 'static,
{
    Promise::new(task)
}

/// Builds a [`Promise`] and launches it right away.
pub fn compute_async<V, E, F>(task: F) -> Promise<V, E>
where
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
    F: FnOnce() -> Result<V, E> + Send + 'static,
{
    let promise = Promise::new(task);
    promise.compute();
    promise
}
