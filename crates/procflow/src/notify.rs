//! User-facing failure notifications
//!
//! The client reports every failed call to a [`Notifier`] before handing the
//! failure back to the caller. What "reporting" means is up to the embedder:
//! a toast in a UI, a line on stderr, or a collected list in tests.

use std::sync::Mutex;

/// Sink for user-facing failure messages.
///
/// Called synchronously, once per failed call, with the derived message.
/// Implementations must not block for long and have no way to fail.
pub trait Notifier: Send + Sync {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Default notifier: emits an `error` level tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::error!(target: "procflow::notify", message = %message, "request failed");
    }
}

/// Notifier that keeps every message it receives.
///
/// Useful in tests and for embedders that drain messages into their own UI
/// on a schedule.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of messages received so far.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Remove and return all messages received so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock cannot leave the Vec half-written
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
