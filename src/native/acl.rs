//! Owner-only access control for the materialized module file.
//!
//! The unpacked module is executable code, so its DACL is replaced with a
//! single entry granting access to the current user only.

use std::ffi::OsStr;
use std::io;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use windows_sys::Win32::Foundation::{CloseHandle, HANDLE, LocalFree};
use windows_sys::Win32::Security::Authorization::{
    EXPLICIT_ACCESS_W, NO_MULTIPLE_TRUSTEE, SE_FILE_OBJECT, SET_ACCESS, SetEntriesInAclW,
    SetNamedSecurityInfoW, TRUSTEE_IS_SID, TRUSTEE_IS_USER, TRUSTEE_W,
};
use windows_sys::Win32::Security::{
    ACL, CopySid, DACL_SECURITY_INFORMATION, GetLengthSid, GetTokenInformation, NO_INHERITANCE,
    PROTECTED_DACL_SECURITY_INFORMATION, TOKEN_QUERY, TOKEN_USER, TokenUser,
};
use windows_sys::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

const FILE_ALL_ACCESS: u32 = 0x001F_01FF;

struct TokenHandle(HANDLE);

impl Drop for TokenHandle {
    fn drop(&mut self) {
        if !self.0.is_null() {
            // SAFETY: the handle came from OpenProcessToken in this module.
            unsafe {
                let _ = CloseHandle(self.0);
            }
        }
    }
}

/// Replace `path`'s DACL with a single current-user entry.
pub(crate) fn restrict_to_owner(path: &Path) -> io::Result<()> {
    let mut sid = current_user_sid()?;

    let explicit_access = EXPLICIT_ACCESS_W {
        grfAccessPermissions: FILE_ALL_ACCESS,
        grfAccessMode: SET_ACCESS,
        grfInheritance: NO_INHERITANCE,
        Trustee: TRUSTEE_W {
            pMultipleTrustee: ptr::null_mut(),
            MultipleTrusteeOperation: NO_MULTIPLE_TRUSTEE,
            TrusteeForm: TRUSTEE_IS_SID,
            TrusteeType: TRUSTEE_IS_USER,
            ptstrName: sid.as_mut_ptr().cast(),
        },
    };

    let mut acl: *mut ACL = ptr::null_mut();
    // SAFETY: one valid EXPLICIT_ACCESS_W entry and no existing ACL to merge.
    let acl_status =
        unsafe { SetEntriesInAclW(1, &raw const explicit_access, ptr::null_mut(), &raw mut acl) };
    if acl_status != 0 {
        return Err(io::Error::from_raw_os_error(acl_status as i32));
    }

    let mut wide_path = wide_null(path.as_os_str());
    // SAFETY: `wide_path` is NUL-terminated and `acl` was produced above.
    // The protected flag keeps inherited entries from widening access.
    let set_status = unsafe {
        SetNamedSecurityInfoW(
            wide_path.as_mut_ptr(),
            SE_FILE_OBJECT,
            DACL_SECURITY_INFORMATION | PROTECTED_DACL_SECURITY_INFORMATION,
            ptr::null_mut(),
            ptr::null_mut(),
            acl,
            ptr::null_mut(),
        )
    };

    // SAFETY: `acl` was allocated by SetEntriesInAclW.
    unsafe {
        let _ = LocalFree(acl.cast());
    }

    if set_status != 0 {
        return Err(io::Error::from_raw_os_error(set_status as i32));
    }
    Ok(())
}

fn current_user_sid() -> io::Result<Vec<u8>> {
    let mut raw_token: HANDLE = ptr::null_mut();
    // SAFETY: querying the current process token with TOKEN_QUERY rights.
    if unsafe { OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &raw mut raw_token) } == 0 {
        return Err(io::Error::last_os_error());
    }
    let _token = TokenHandle(raw_token);

    let mut needed = 0u32;
    // SAFETY: sizing call; a null buffer with zero length reports the
    // required size in `needed`.
    unsafe {
        let _ = GetTokenInformation(raw_token, TokenUser, ptr::null_mut(), 0, &raw mut needed);
    }
    if needed == 0 {
        return Err(io::Error::last_os_error());
    }

    let mut token_buf = vec![0u8; needed as usize];
    // SAFETY: `token_buf` has exactly the reported capacity.
    if unsafe {
        GetTokenInformation(
            raw_token,
            TokenUser,
            token_buf.as_mut_ptr().cast(),
            needed,
            &raw mut needed,
        )
    } == 0
    {
        return Err(io::Error::last_os_error());
    }

    // SAFETY: a successful TokenUser query fills the buffer with a
    // TOKEN_USER header; the buffer may not be aligned for it.
    let token_user = unsafe { ptr::read_unaligned(token_buf.as_ptr().cast::<TOKEN_USER>()) };
    // SAFETY: the SID pointer targets the same buffer and outlives the copy.
    let sid_len = unsafe { GetLengthSid(token_user.User.Sid) };
    if sid_len == 0 {
        return Err(io::Error::last_os_error());
    }

    let mut sid = vec![0u8; sid_len as usize];
    // SAFETY: destination has `sid_len` bytes as required by CopySid.
    if unsafe { CopySid(sid_len, sid.as_mut_ptr().cast(), token_user.User.Sid) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(sid)
}

fn wide_null(value: &OsStr) -> Vec<u16> {
    let mut wide: Vec<u16> = value.encode_wide().collect();
    wide.push(0);
    wide
}
