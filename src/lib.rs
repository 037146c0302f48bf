//! Windows Hello user verification behind a single cross-platform call.
//!
//! The native prompt lives in an embedded per-architecture module that is
//! unpacked to the temp directory and bound on first use; targets without a
//! backend build get a compile-time fallback that answers every call
//! deterministically without touching the filesystem.
//!
//! The call blocks for as long as the user interacts with the prompt, so
//! callers that need responsiveness should run it on a dedicated worker
//! thread. There is no internal timeout or cancellation; the native UI owns
//! that decision.
//!
//! ```no_run
//! let outcome = winhello::authenticate("Verify your identity")?;
//! if outcome.is_approved() {
//!     // unlock
//! }
//! # Ok::<(), winhello::AuthError>(())
//! ```

// The only unsafe code is the Windows FFI surface.
#![cfg_attr(not(windows), forbid(unsafe_code))]

mod error;
mod outcome;

#[cfg(any(windows, test))]
mod invoke;
#[cfg(any(windows, test))]
mod pin;
#[cfg(any(windows, test))]
mod setup;
#[cfg(any(windows, test))]
mod wide;

#[cfg(all(windows, any(target_arch = "x86_64", target_arch = "aarch64")))]
mod native;
#[cfg(all(windows, any(target_arch = "x86_64", target_arch = "aarch64")))]
use native as backend;

#[cfg(not(all(windows, any(target_arch = "x86_64", target_arch = "aarch64"))))]
mod stub;
#[cfg(not(all(windows, any(target_arch = "x86_64", target_arch = "aarch64"))))]
use stub as backend;

pub use error::AuthError;
pub use outcome::AuthOutcome;

/// A native verification backend exists for this target.
///
/// `true` means a backend build ships for this OS and CPU architecture, not
/// that the backend is loaded or that Hello is configured on the machine.
/// Side-effect free and cheap enough to call on every startup.
#[must_use]
pub fn available() -> bool {
    backend::available()
}

/// Ask the operating system to verify the current user.
///
/// Shows the native biometric/PIN prompt with `prompt` as its message and
/// blocks until the user finishes interacting with it. The first call in the
/// process unpacks and binds the embedded native module; that one-time
/// outcome, success or failure, is reused for the rest of the process.
pub fn authenticate(prompt: &str) -> Result<AuthOutcome, AuthError> {
    backend::authenticate(prompt)
}
