use thiserror::Error;

/// Faults of the execution machinery itself, as opposed to errors returned
/// by the wrapped task (those end up inside an [`Either`](crate::Either)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The task panicked before producing an outcome.
    #[error("worker panicked: {message}")]
    WorkerPanicked { message: String },
    /// The worker thread could not be created.
    #[error("failed to spawn worker thread: {message}")]
    Spawn { message: String },
}

/// Default application error carried by a failed [`Either`](crate::Either).
///
/// ```
/// use either_future::TaskError;
///
/// let err = TaskError::new("boom");
/// assert_eq!(err.message(), "boom");
/// assert_eq!(err.to_string(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TaskError {
    message: String,
}

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wraps any error, keeping only its rendered message.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::new(err.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for TaskError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for TaskError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Renders a panic payload caught by `catch_unwind`.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_error_conversions() {
        assert_eq!(TaskError::from("boom").message(), "boom");
        assert_eq!(TaskError::from(String::from("boom")), TaskError::new("boom"));
        let parsed: Result<i32, TaskError> =
            "x1".parse::<i32>().map_err(|err| TaskError::from_error(&err));
        assert_eq!(
            parsed.unwrap_err().message(),
            "invalid digit found in string"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        assert_eq!(TaskError::from_error(&io).message(), "missing.toml");
    }

    #[test]
    fn test_error_display() {
        let err = Error::WorkerPanicked {
            message: "oops".into(),
        };
        assert_eq!(err.to_string(), "worker panicked: oops");
        let err = Error::Spawn {
            message: "no threads".into(),
        };
        assert_eq!(err.to_string(), "failed to spawn worker thread: no threads");
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn std::any::Any + Send> = Box::new(42);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }
}
