//! Contract tests for targets without a native backend.

#![cfg(not(windows))]

use std::env;
use std::process;

use winhello::AuthError;

#[test]
fn capability_gate_is_closed() {
    assert!(!winhello::available());
}

#[test]
fn authenticate_fails_identically_on_every_call() {
    let first = winhello::authenticate("Verify your identity").unwrap_err();
    let second = winhello::authenticate("Verify your identity").unwrap_err();

    assert_eq!(first, AuthError::OsNotSupported);
    assert_eq!(second, AuthError::OsNotSupported);
}

#[test]
fn no_module_is_materialized() {
    let _ = winhello::authenticate("Verify your identity");

    let unpacked = env::temp_dir().join(format!("winhello_{}.dll", process::id()));
    assert!(
        !unpacked.exists(),
        "fallback backend must never touch the filesystem"
    );
}
