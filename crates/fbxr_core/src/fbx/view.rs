//! Primitive views over counted native memory.
//!
//! Every read of the native buffer funnels through these two functions,
//! so the bounds discipline lives in one place: a view of `count` records
//! never touches memory past `base + size_of::<T>() * count`, and the
//! result is always owned — callers keep nothing that points back into
//! native memory.

use std::ffi::CStr;
use std::os::raw::c_char;

/// Copy a counted array of records out of native memory.
///
/// A `count` of 0 yields an empty vector without dereferencing `base`,
/// even when `base` is null.
///
/// # Safety
///
/// For non-zero `count`, `base` must be non-null, aligned, and point to
/// at least `count` consecutive `T` records that stay valid for the
/// duration of the call. A null `base` with non-zero `count` is a caller
/// contract violation and fails fast.
pub(crate) unsafe fn read_records<T: Copy>(base: *const T, count: u32) -> Vec<T> {
    if count == 0 {
        return Vec::new();
    }
    assert!(
        !base.is_null(),
        "counted array with {count} records but a null base pointer"
    );
    std::slice::from_raw_parts(base, count as usize).to_vec()
}

/// Copy a single record out of native memory, or `None` if the pointer
/// is null.
///
/// # Safety
///
/// A non-null `ptr` must be aligned and point to a valid `T`.
pub(crate) unsafe fn read_record<T: Copy>(ptr: *const T) -> Option<T> {
    if ptr.is_null() {
        None
    } else {
        Some(ptr.read())
    }
}

/// Decode a native null-terminated string into owned text.
///
/// Null and empty strings both decode to `None`; invalid UTF-8 is
/// replaced lossily rather than failing, since names and paths from the
/// native parser are display data, not keys.
///
/// # Safety
///
/// A non-null `ptr` must point to a null-terminated byte string.
pub(crate) unsafe fn read_cstr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let text = CStr::from_ptr(ptr).to_string_lossy();
    if text.is_empty() {
        None
    } else {
        Some(text.into_owned())
    }
}
