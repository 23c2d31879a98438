//! `Either`, `Future` and `Promise` monads for running one fallible
//! computation on its own thread and reading its outcome any number of times.
//!
//! ```
//! use either_future::{process_async, TaskError};
//! use std::{thread, time::Duration};
//!
//! let slow = process_async(
//!     |ms: u64| {
//!         thread::sleep(Duration::from_millis(ms));
//!         Ok::<_, TaskError>(ms)
//!     },
//!     20,
//! );
//! let failing = process_async(|_: u64| Err::<u64, _>(TaskError::new("boom")), 0);
//!
//! assert_eq!(*slow.wait_for_result().get_result(), 20);
//! assert!(failing.wait_for_result().is_error());
//! ```

mod builder;
mod either;
mod error;
mod execution;
mod function;
mod future;
mod promise;

pub use builder::Builder;
pub use either::Either;
pub use error::{Error, TaskError};
pub use execution::Outcome;
pub use function::{for_each, Function, Task};
pub use future::{new_future, process_async, Future};
pub use promise::{compute_async, new_promise, Promise};
