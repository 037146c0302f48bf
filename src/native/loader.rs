//! On-demand materialization and binding of the embedded native module.
//!
//! The module travels inside the binary (there is no installer step), is
//! unpacked to a per-process temp path on first use, and stays bound until
//! process exit. The first outcome, loaded or failed, stands for the process
//! lifetime.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use libloading::Library;
use tracing::debug;

use crate::error::AuthError;
use crate::native::acl;
use crate::native::payload::{self, AuthenticateFn};
use crate::setup::SetupCell;

static MODULE: SetupCell<NativeModule> = SetupCell::new();

/// The bound native module.
///
/// Owned by this module alone; the handle lives until process exit and is
/// reclaimed by the OS, never explicitly unloaded.
pub(crate) struct NativeModule {
    library: Library,
}

impl NativeModule {
    /// Resolve the verification entry point.
    ///
    /// Resolution repeats on every call; a module that does not export the
    /// symbol is a load failure, not a crash.
    pub(crate) fn entry(&self) -> Result<AuthenticateFn, AuthError> {
        // SAFETY: the signature matches the module's exported contract, and
        // the library handle is process-lifetime so the pointer cannot
        // outlive it.
        let symbol = unsafe { self.library.get::<AuthenticateFn>(payload::ENTRY_POINT) }
            .map_err(|e| AuthError::DllLoad(format!("entry point not found: {e}")))?;
        Ok(*symbol)
    }
}

/// Bind the embedded module, materializing it on first use.
///
/// Exactly one initialization attempt runs per process; every caller after
/// the first observes the memoized outcome, success or failure.
pub(crate) fn ensure_ready() -> Result<&'static NativeModule, AuthError> {
    MODULE.get_or_init(materialize_and_bind)
}

fn materialize_and_bind() -> Result<NativeModule, AuthError> {
    let path = module_path();

    fs::write(&path, payload::PAYLOAD)
        .map_err(|e| AuthError::DllLoad(format!("failed to write {}: {e}", path.display())))?;
    acl::restrict_to_owner(&path).map_err(|e| {
        AuthError::DllLoad(format!(
            "failed to restrict permissions on {}: {e}",
            path.display()
        ))
    })?;

    debug!(path = %path.display(), "materialized native verification module");

    // SAFETY: the file was just written from the embedded payload; running
    // its initializers is the point of binding it.
    let library = unsafe { Library::new(&path) }
        .map_err(|e| AuthError::DllLoad(format!("failed to bind {}: {e}", path.display())))?;

    Ok(NativeModule { library })
}

/// Per-process materialization path.
///
/// The process id keeps concurrently running host applications from
/// clobbering each other's unpacked module.
fn module_path() -> PathBuf {
    env::temp_dir().join(format!("winhello_{}.dll", process::id()))
}
