//! Run-once guard.

/// Wraps a callback so its body executes at most once.
///
/// The first [`Once::call`] runs the callback with its arguments and caches
/// the result. Every call, the first included, returns that cached value;
/// arguments passed to later calls are ignored.
#[derive(Debug, Clone)]
pub struct Once<F, T> {
    callback: Option<F>,
    result: Option<T>,
}

impl<F, T> Once<F, T> {
    /// Creates a guard around `callback`.
    #[must_use]
    pub fn new(callback: F) -> Self {
        Self {
            callback: Some(callback),
            result: None,
        }
    }

    /// Returns `true` once the callback body has executed.
    #[must_use]
    pub fn has_run(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the cached result, if the callback has run.
    #[must_use]
    pub fn cached(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Invokes the guard.
    ///
    /// # Panics
    ///
    /// Panics only if a previous invocation's callback panicked, leaving no
    /// cached result behind.
    pub fn call<A>(&mut self, args: A) -> &T
    where
        F: FnOnce(A) -> T,
    {
        if let Some(callback) = self.callback.take() {
            return self.result.insert(callback(args));
        }
        self.result
            .as_ref()
            .expect("result is cached once the callback has been taken")
    }
}
