//! The invocation pipeline for the native verification entry point.
//!
//! Mechanism only: marshal the prompt, pin the calling thread, make the raw
//! call, decode the status code. The caller supplies the entry point, so the
//! pipeline runs the same against the real module or a test stub.

use tracing::warn;

use crate::error::AuthError;
use crate::outcome::AuthOutcome;
use crate::pin::ThreadPin;
use crate::wide;

/// Marshal `prompt` and run `entry` with the calling thread pinned.
///
/// A marshaling failure is reported without invoking `entry`. The pin covers
/// exactly the native call and is dropped on every exit path.
pub(crate) fn call_entry<F>(prompt: &str, entry: F) -> Result<AuthOutcome, AuthError>
where
    F: FnOnce(*const u16) -> i32,
{
    let message = wide::to_wide_null(prompt)?;

    let raw = {
        let _pin = ThreadPin::acquire();
        entry(message.as_ptr())
    };

    let outcome = AuthOutcome::from_raw(raw);
    if let AuthOutcome::Unavailable(AuthError::UnknownReturn(code)) = &outcome {
        warn!(
            code = *code,
            "native verification backend returned a status outside its contract"
        );
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::call_entry;
    use crate::error::AuthError;
    use crate::outcome::AuthOutcome;

    #[test]
    fn approval_code_round_trips() {
        let outcome = call_entry("verify", |_| 1).expect("call");
        assert!(outcome.is_approved());
    }

    #[test]
    fn declined_code_carries_user_canceled() {
        let outcome = call_entry("verify", |_| 0).expect("call");
        assert_eq!(outcome, AuthOutcome::Declined(AuthError::UserCanceled));
    }

    #[test]
    fn unavailable_codes_carry_their_reasons() {
        assert_eq!(
            call_entry("verify", |_| -1).expect("call"),
            AuthOutcome::Unavailable(AuthError::NotAvailable)
        );
        assert_eq!(
            call_entry("verify", |_| -2).expect("call"),
            AuthOutcome::Unavailable(AuthError::Internal)
        );
        assert_eq!(
            call_entry("verify", |_| 7).expect("call"),
            AuthOutcome::Unavailable(AuthError::UnknownReturn(7))
        );
    }

    #[test]
    fn marshaling_failure_never_reaches_the_entry_point() {
        let calls = AtomicUsize::new(0);

        let result = call_entry("before\0after", |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            1
        });

        assert!(matches!(result, Err(AuthError::InvalidArgument(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn entry_point_runs_exactly_once_per_call() {
        let calls = AtomicUsize::new(0);

        let outcome = call_entry("verify", |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            1
        })
        .expect("call");

        assert!(outcome.is_approved());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn entry_point_receives_a_terminated_message() {
        // The pointer hands over a buffer that stays alive for the call; the
        // marshaled form itself is covered by the wide tests, so here we only
        // check the pointer is non-null.
        let outcome = call_entry("verify", |message| {
            assert!(!message.is_null());
            1
        })
        .expect("call");
        assert!(outcome.is_approved());
    }
}
