use crate::{execution::WorkerConfig, Future, Promise};

/// Configures the worker thread of a [`Future`] or [`Promise`] before
/// building it.
///
/// # Examples
///
/// ```
/// use either_future::{Builder, TaskError};
///
/// let future = Builder::new()
///     .name("parse-worker")
///     .future(
///         |s: &str| s.parse::<u32>().map_err(|err| TaskError::from_error(&err)),
///         "42",
///     );
/// assert_eq!(*future.process().wait_for_result().get_result(), 42);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the worker thread.
    pub fn name<N: Into<String>>(self, name: N) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Sets the stack size of the worker thread, in bytes.
    #[inline]
    pub fn stack_size(self, stack_size: usize) -> Self {
        Self {
            stack_size: Some(stack_size),
            ..self
        }
    }

    /// Builds an unlaunched [`Future`] running `function(input)`.
    pub fn future<T, V, E, F>(self, function: F, input: T) -> Future<T, V, E>
    where
        T: Send + 'static,
        V: Send + Sync + 'static,
        E: Send + Sync + 'static,
        F: FnOnce(T) -> Result<V, E> + Send + 'static,
    {
        Future::with_config(self.worker_config("future-worker"), function, input)
    }

    /// Builds an unlaunched [`Promise`] running `task`.
    pub fn promise<V, E, F>(self, task: F) -> Promise<V, E>
    where
        V: Send + Sync + 'static,
        E: Send + Sync + 'static,
        F: FnOnce() -> Result<V, E> + Send + 'static,
    {
        Promise::with_config(self.worker_config("promise-worker"), task)
    }

    fn worker_config(self, default_name: &str) -> WorkerConfig {
        WorkerConfig {
            name: self.name.unwrap_or_else(|| default_name.to_owned()),
            stack_size: self.stack_size,
        }
    }
}
