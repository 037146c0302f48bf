//! Tri-state result of a verification attempt.

use crate::error::AuthError;

/// Status codes in the native backend's fixed contract.
const RAW_APPROVED: i32 = 1;
const RAW_DECLINED: i32 = 0;
const RAW_NOT_AVAILABLE: i32 = -1;
const RAW_INTERNAL_ERROR: i32 = -2;

/// Outcome of one verification attempt.
///
/// Non-approved outcomes always carry their reason; a bare boolean would lose
/// the distinction between "the user said no" and "the prompt could not run".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The user passed the native verification prompt.
    Approved,
    /// The user explicitly declined or dismissed the prompt.
    Declined(AuthError),
    /// The prompt could not produce a decision on this machine.
    Unavailable(AuthError),
}

impl AuthOutcome {
    /// Decode a raw status code from the native entry point.
    ///
    /// Codes outside the contract decode to [`AuthOutcome::Unavailable`] with
    /// [`AuthError::UnknownReturn`]; they are never treated as approval.
    #[must_use]
    pub fn from_raw(code: i32) -> Self {
        match code {
            RAW_APPROVED => Self::Approved,
            RAW_DECLINED => Self::Declined(AuthError::UserCanceled),
            RAW_NOT_AVAILABLE => Self::Unavailable(AuthError::NotAvailable),
            RAW_INTERNAL_ERROR => Self::Unavailable(AuthError::Internal),
            other => Self::Unavailable(AuthError::UnknownReturn(other)),
        }
    }

    /// True only for [`AuthOutcome::Approved`].
    #[must_use]
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Why this attempt did not end in approval, if it didn't.
    #[must_use]
    pub fn reason(&self) -> Option<&AuthError> {
        match self {
            Self::Approved => None,
            Self::Declined(reason) | Self::Unavailable(reason) => Some(reason),
        }
    }
}
