//! Windows backend: the embedded Hello bridge module, loaded on demand.

mod acl;
mod loader;
mod payload;

use crate::error::AuthError;
use crate::invoke;
use crate::outcome::AuthOutcome;

/// A backend build ships for this target.
///
/// Compile-time capability only; whether Hello is actually configured on the
/// machine is discovered by invoking the prompt.
pub(crate) fn available() -> bool {
    true
}

/// Run the native verification prompt with `prompt` as its message.
pub(crate) fn authenticate(prompt: &str) -> Result<AuthOutcome, AuthError> {
    let module = loader::ensure_ready()?;
    let entry = module.entry()?;

    invoke::call_entry(prompt, |message| {
        // SAFETY: `message` is a NUL-terminated UTF-16 buffer that outlives
        // the call, and `entry` was resolved against the module's exported
        // signature.
        unsafe { entry(message) }
    })
}
