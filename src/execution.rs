//! The engine shared by [`Future`](crate::Future) and
//! [`Promise`](crate::Promise): one job, one worker thread, one outcome.
//!
//! The outcome lives in a mutex-protected slot. Blocking waiters sleep on a
//! condition variable, async waiters park their `Waker` in the slot, and the
//! worker wakes both kinds when it publishes.

use crate::{error::panic_message, Either, Error};
use log::{debug, error, trace, warn};
use std::{
    future::Future,
    mem,
    panic::{self, AssertUnwindSafe},
    pin::Pin,
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    task::{Context, Poll, Waker},
    thread,
};

pub(crate) type Job<V, E> = Box<dyn FnOnce() -> Result<V, E> + Send>;

/// How the worker thread is spawned.
#[derive(Debug, Clone)]
pub(crate) struct WorkerConfig {
    pub(crate) name: String,
    pub(crate) stack_size: Option<usize>,
}

pub(crate) struct Execution<V, E> {
    inner: Arc<Inner<V, E>>,
    config: Arc<WorkerConfig>,
}

impl<V, E> Clone for Execution<V, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            config: self.config.clone(),
        }
    }
}

struct Inner<V, E> {
    slot: Mutex<Slot<V, E>>,
    completed: Condvar,
}

struct Slot<V, E> {
    stage: Stage<V, E>,
    wakers: Vec<Waker>,
}

enum Stage<V, E> {
    Unlaunched(Job<V, E>),
    Running,
    Completed(Arc<Either<V, E>>),
    Failed(Error),
}

impl<V, E> Inner<V, E> {
    fn lock(&self) -> MutexGuard<'_, Slot<V, E>> {
        // The lock is never held while user code runs.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves the slot to its terminal stage and wakes every waiter.
    fn publish(&self, stage: Stage<V, E>) {
        let wakers = {
            let mut slot = self.lock();
            slot.stage = stage;
            mem::take(&mut slot.wakers)
        };
        self.completed.notify_all();
        for waker in wakers {
            waker.wake();
        }
    }

    fn poll_terminal(&self, slot: &Slot<V, E>) -> Option<Result<Arc<Either<V, E>>, Error>> {
        match &slot.stage {
            Stage::Completed(outcome) => Some(Ok(outcome.clone())),
            Stage::Failed(err) => Some(Err(err.clone())),
            Stage::Unlaunched(_) | Stage::Running => None,
        }
    }
}

impl<V, E> Execution<V, E>
where
    V: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    pub(crate) fn new(config: WorkerConfig, job: Job<V, E>) -> Self {
        Self {
            inner: Arc::new(Inner {
                slot: Mutex::new(Slot {
                    stage: Stage::Unlaunched(job),
                    wakers: Vec::new(),
                }),
                completed: Condvar::new(),
            }),
            config: Arc::new(config),
        }
    }

    /// Spawns the worker unless it was already spawned. Returns whether this
    /// call started a worker; a failed spawn returns `false` and leaves the
    /// execution in the terminal `Error::Spawn` state.
    pub(crate) fn launch(&self) -> bool {
        let job = {
            let mut slot = self.inner.lock();
            match mem::replace(&mut slot.stage, Stage::Running) {
                Stage::Unlaunched(job) => job,
                stage => {
                    slot.stage = stage;
                    debug!("'{}' already launched, ignoring", self.config.name);
                    return false;
                }
            }
        };

        let mut builder = thread::Builder::new().name(self.config.name.clone());
        if let Some(stack_size) = self.config.stack_size {
            builder = builder.stack_size(stack_size);
        }
        let inner = self.inner.clone();
        let name = self.config.name.clone();
        // `spawn` panics instead of failing on some inputs (a NUL in the name).
        let spawned = panic::catch_unwind(AssertUnwindSafe(|| {
            builder.spawn(move || run_worker(&name, &inner, job))
        }));
        let message = match spawned {
            Ok(Ok(_)) => return true,
            Ok(Err(err)) => err.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        error!("failed to spawn '{}': {message}", self.config.name.escape_debug());
        self.inner.publish(Stage::Failed(Error::Spawn { message }));
        false
    }

    /// Blocks until the worker has published, then returns the cached outcome.
    pub(crate) fn wait(&self) -> Result<Arc<Either<V, E>>, Error> {
        let mut slot = self.inner.lock();
        if matches!(slot.stage, Stage::Unlaunched(_)) {
            warn!(
                "waiting on '{}' before it was launched; this blocks until someone launches it",
                self.config.name
            );
        }
        loop {
            if let Some(outcome) = self.inner.poll_terminal(&slot) {
                return outcome;
            }
            slot = self
                .inner
                .completed
                .wait(slot)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    pub(crate) fn outcome(&self) -> Outcome<V, E> {
        Outcome {
            inner: self.inner.clone(),
        }
    }

    pub(crate) fn is_launched(&self) -> bool {
        !matches!(self.inner.lock().stage, Stage::Unlaunched(_))
    }

    pub(crate) fn is_completed(&self) -> bool {
        matches!(
            self.inner.lock().stage,
            Stage::Completed(_) | Stage::Failed(_)
        )
    }
}

fn run_worker<V, E>(name: &str, inner: &Inner<V, E>, job: Job<V, E>) {
    trace!("worker '{name}' starting");
    let stage = match panic::catch_unwind(AssertUnwindSafe(job)) {
        Ok(result) => {
            let outcome = Either::from(result);
            debug!(
                "worker '{name}' finished with {}",
                if outcome.is_result() { "a result" } else { "an error" }
            );
            Stage::Completed(Arc::new(outcome))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("worker '{name}' panicked: {message}");
            Stage::Failed(Error::WorkerPanicked { message })
        }
    };
    inner.publish(stage);
    trace!("worker '{name}' exiting");
}

/// Awaitable view of a [`Future`](crate::Future) or
/// [`Promise`](crate::Promise) outcome.
///
/// Every clone resolves to the same cached outcome. Like
/// `wait_for_result`, it stays pending until the task has been launched and
/// has finished.
///
/// Each distinct task polling a pending outcome leaves its `Waker` in the
/// slot until the outcome is published, so polling one that is never launched
/// from many tasks keeps growing that list.
pub struct Outcome<V, E> {
    inner: Arc<Inner<V, E>>,
}

impl<V, E> Clone for Outcome<V, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V, E> Future for Outcome<V, E> {
    type Output = Result<Arc<Either<V, E>>, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.inner.lock();
        match self.inner.poll_terminal(&slot) {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                if !slot.wakers.iter().any(|waker| waker.will_wake(cx.waker())) {
                    slot.wakers.push(cx.waker().clone());
                }
                Poll::Pending
            }
        }
    }
}
