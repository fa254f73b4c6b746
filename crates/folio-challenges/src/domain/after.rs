//! Call-count gate.

/// Holds a callback back until it has been called `threshold` times.
///
/// Calls before the threshold-th return `None`. The threshold-th call and
/// every call after it invoke the callback with that call's arguments.
#[derive(Debug, Clone)]
pub struct After<F> {
    threshold: u32,
    count: u32,
    callback: F,
}

impl<F> After<F> {
    /// Creates a gate that opens on call number `threshold`. A threshold of
    /// 0 or 1 opens on the first call.
    #[must_use]
    pub fn new(threshold: u32, callback: F) -> Self {
        Self {
            threshold,
            count: 0,
            callback,
        }
    }

    /// Registers a call and, once the gate is open, runs the callback.
    pub fn call<A, T>(&mut self, args: A) -> Option<T>
    where
        F: FnMut(A) -> T,
    {
        self.count = self.count.saturating_add(1);
        if self.count >= self.threshold {
            Some((self.callback)(args))
        } else {
            None
        }
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Number of calls registered so far.
    #[must_use]
    pub fn calls(&self) -> u32 {
        self.count
    }

    /// Calls still needed before the gate opens.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.threshold.saturating_sub(self.count)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.count >= self.threshold
    }
}
