//! Observable step counter.

use std::fmt;
use std::sync::Arc;

/// Callback notified with the new value after every value change.
pub type CounterListener = Arc<dyn Fn(i64) + Send + Sync>;

/// A labelled counter with an adjustable step.
///
/// `set_step` only affects later operations; it never rescales the current
/// value. Subscribers are notified, in registration order, after
/// `increment`, `decrement`, and `reset`.
#[derive(Clone)]
pub struct Counter {
    label: String,
    value: i64,
    step: i64,
    listeners: Vec<CounterListener>,
}

impl Counter {
    /// Creates a counter starting at `initial` that moves by `step`.
    #[must_use]
    pub fn new(label: impl Into<String>, initial: i64, step: i64) -> Self {
        Self {
            label: label.into(),
            value: initial,
            step,
            listeners: Vec::new(),
        }
    }

    /// Creates a counter starting at 0 with a step of 1.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, 0, 1)
    }

    /// Adds the current step and returns the new value.
    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(self.step);
        self.notify();
        self.value
    }

    /// Subtracts the current step and returns the new value.
    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.saturating_sub(self.step);
        self.notify();
        self.value
    }

    /// Changes the step used by future operations.
    pub fn set_step(&mut self, step: i64) {
        self.step = step;
    }

    /// Sets the value directly and returns it.
    pub fn reset(&mut self, value: i64) -> i64 {
        self.value = value;
        self.notify();
        self.value
    }

    /// Registers a listener.
    pub fn subscribe(&mut self, listener: impl Fn(i64) + Send + Sync + 'static) {
        self.listeners.push(Arc::new(listener));
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(self.value);
        }
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("step", &self.step)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
