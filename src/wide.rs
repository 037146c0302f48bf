//! UTF-16 marshaling for the native string boundary.

use crate::error::AuthError;

/// Encode `text` as a NUL-terminated UTF-16 buffer.
///
/// An interior NUL would silently truncate the prompt on the native side, so
/// it is rejected before the boundary instead.
pub(crate) fn to_wide_null(text: &str) -> Result<Vec<u16>, AuthError> {
    if text.contains('\0') {
        return Err(AuthError::InvalidArgument(
            "prompt contains an interior NUL character".to_string(),
        ));
    }

    let mut wide: Vec<u16> = text.encode_utf16().collect();
    wide.push(0);
    Ok(wide)
}
