//! The embedded native payload: one prebuilt module per supported
//! architecture, plus the single symbol it exports.
//!
//! The blob is an opaque resource record; nothing here parses or relinks it.

/// Signature of the module's one exported function.
pub(crate) type AuthenticateFn = unsafe extern "system" fn(*const u16) -> i32;

/// Exported symbol name, NUL-terminated for the resolver.
pub(crate) const ENTRY_POINT: &[u8] = b"AuthenticateUser\0";

/// Prebuilt Hello bridge module for the compile target.
#[cfg(target_arch = "x86_64")]
pub(crate) static PAYLOAD: &[u8] = include_bytes!("../../payload/winhello_x86_64.dll");

/// Prebuilt Hello bridge module for the compile target.
#[cfg(target_arch = "aarch64")]
pub(crate) static PAYLOAD: &[u8] = include_bytes!("../../payload/winhello_aarch64.dll");
