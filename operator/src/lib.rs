//! Asynchronous operator-call boundary.
//!
//! The panel never blocks on a remote operator. Every call returns an
//! [`OperatorHandle`] that mirrors the host executor contract: `is_executing`
//! while the call is in flight, then exactly one of `result` or `error` once
//! it settles. Handles are drained with a non-blocking [`OperatorHandle::poll`]
//! from the frame loop.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

#[derive(thiserror::Error, Debug)]
pub enum OperatorError {
    #[error("operator worker disconnected before reporting a result")]
    Disconnected,
}

/// Status view over one in-flight operator call.
#[derive(Debug)]
pub struct OperatorHandle<T> {
    rx: Option<Receiver<Result<T, String>>>,
    executing: bool,
    result: Option<T>,
    error: Option<String>,
}

impl<T> OperatorHandle<T> {
    /// A handle that will settle once a value arrives on `rx`.
    pub fn pending(rx: Receiver<Result<T, String>>) -> Self {
        Self {
            rx: Some(rx),
            executing: true,
            result: None,
            error: None,
        }
    }

    /// A handle that settled synchronously. Used by stub operators and tests.
    pub fn settled(outcome: Result<T, String>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(message) => (None, Some(message)),
        };
        Self {
            rx: None,
            executing: false,
            result,
            error,
        }
    }

    /// Drains the completion channel without blocking.
    ///
    /// Returns `true` exactly once: on the poll that observed the call
    /// settling. A worker that drops its sender without reporting counts as
    /// a failed call.
    pub fn poll(&mut self) -> bool {
        if !self.executing {
            return false;
        }
        let Some(rx) = &self.rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(Ok(value)) => {
                self.result = Some(value);
            }
            Ok(Err(message)) => {
                self.error = Some(message);
            }
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                self.error = Some(OperatorError::Disconnected.to_string());
            }
        }
        self.executing = false;
        self.rx = None;
        true
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Runs `work` on a background thread and returns a handle observing it.
///
/// The worker reports exactly once; if the handle was dropped in the meantime
/// the report is discarded.
pub fn spawn_operator<T, F>(work: F) -> OperatorHandle<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, String> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = work();
        if let Err(err) = &outcome {
            log::warn!("operator call failed: {err}");
        }
        let _ = tx.send(outcome);
    });
    OperatorHandle::pending(rx)
}
