//! Error taxonomy for native user verification.

use thiserror::Error;

/// Reasons a verification attempt did not end in approval.
///
/// The set is closed: the native backend speaks a fixed status-code contract,
/// and everything outside it is a loading or marshaling failure. The type is
/// `Clone + Eq` because a failed one-time module load is memoized and
/// re-reported identically on every later call in the same process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The current operating system has no native backend.
    #[error("native user verification is only available on Windows")]
    OsNotSupported,

    /// Windows, but no backend build exists for this CPU architecture.
    #[error("native user verification is only built for x86-64 and ARM64 Windows")]
    ArchNotSupported,

    /// Windows Hello is absent or not configured on this machine.
    #[error("Windows Hello is not available or not configured on this system")]
    NotAvailable,

    /// The user explicitly declined or dismissed the verification prompt.
    #[error("the user canceled the verification prompt")]
    UserCanceled,

    /// Materializing or binding the native module failed.
    #[error("failed to load the native verification module: {0}")]
    DllLoad(String),

    /// The native backend reported an internal failure.
    #[error("the native verification backend reported an internal error")]
    Internal,

    /// The native backend returned a code outside its contract.
    #[error("the native verification backend returned an unknown status code {0}")]
    UnknownReturn(i32),

    /// The prompt text cannot cross the native string boundary.
    #[error("prompt text cannot be passed to the native prompt: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::AuthError;

    #[test]
    fn load_failures_keep_the_underlying_detail() {
        let err = AuthError::DllLoad("access denied (os error 5)".to_string());
        let rendered = err.to_string();
        assert!(rendered.contains("failed to load"));
        assert!(rendered.contains("os error 5"));
    }

    #[test]
    fn unknown_codes_are_named_in_the_message() {
        assert!(AuthError::UnknownReturn(7).to_string().contains('7'));
    }
}
