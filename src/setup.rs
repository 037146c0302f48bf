//! One-time, memoize-forever initialization.

use std::sync::OnceLock;

use crate::error::AuthError;

/// A lazily-initialized cell whose first outcome, success or failure, stands
/// for the rest of the process.
///
/// Racing first callers block until the single winning initializer finishes,
/// then all observe the same terminal result. A failed initialization is
/// never retried, even if a later attempt might have succeeded.
pub(crate) struct SetupCell<T> {
    state: OnceLock<Result<T, AuthError>>,
}

impl<T> SetupCell<T> {
    pub(crate) const fn new() -> Self {
        Self {
            state: OnceLock::new(),
        }
    }

    /// Run `init` at most once and return the memoized result thereafter.
    pub(crate) fn get_or_init<F>(&self, init: F) -> Result<&T, AuthError>
    where
        F: FnOnce() -> Result<T, AuthError>,
    {
        self.state
            .get_or_init(init)
            .as_ref()
            .map_err(AuthError::clone)
    }
}
