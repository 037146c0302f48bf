//! The status-code contract, exercised through the public surface.

use winhello::{AuthError, AuthOutcome};

#[test]
fn status_codes_decode_per_contract() {
    assert!(AuthOutcome::from_raw(1).is_approved());
    assert_eq!(
        AuthOutcome::from_raw(0),
        AuthOutcome::Declined(AuthError::UserCanceled)
    );
    assert_eq!(
        AuthOutcome::from_raw(-1),
        AuthOutcome::Unavailable(AuthError::NotAvailable)
    );
    assert_eq!(
        AuthOutcome::from_raw(-2),
        AuthOutcome::Unavailable(AuthError::Internal)
    );
    assert_eq!(
        AuthOutcome::from_raw(7),
        AuthOutcome::Unavailable(AuthError::UnknownReturn(7))
    );
}

#[test]
fn non_approved_outcomes_always_explain_themselves() {
    for code in [0, -1, -2, 7, 42] {
        let outcome = AuthOutcome::from_raw(code);
        if !outcome.is_approved() {
            assert!(outcome.reason().is_some(), "code {code} lost its reason");
        }
    }
}
