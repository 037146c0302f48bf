//! Fallback backend for targets without a native build.
//!
//! Selected at compile time, so unsupported targets carry no loader or
//! invoker code paths at all. Every call answers deterministically and never
//! touches the filesystem.

use crate::error::AuthError;
use crate::outcome::AuthOutcome;

pub(crate) fn available() -> bool {
    false
}

pub(crate) fn authenticate(_prompt: &str) -> Result<AuthOutcome, AuthError> {
    Err(unsupported())
}

#[cfg(windows)]
fn unsupported() -> AuthError {
    AuthError::ArchNotSupported
}

#[cfg(not(windows))]
fn unsupported() -> AuthError {
    AuthError::OsNotSupported
}
