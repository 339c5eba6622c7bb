use crate::error::{with_last_error_mut, DefaultVec3Error, Vec3Error, Vec3ErrorCode};
use std::ffi::CString;
use vec3_core::Vector3;

/// Set the thread-local error message and code.
/// Accepts any type implementing `Vec3Error` trait.
pub(crate) fn set_last_error(error: &impl Vec3Error) {
    tracing::warn!(code = ?error.code(), msg = error.msg(), "vec3 ffi call failed");
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
/// Called on successful fallible operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = Vec3ErrorCode::Ok;
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl Vec3Error) -> Vec3ErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the outcome of a fallible operation and return its code.
pub(crate) fn track_result(result: Result<(), DefaultVec3Error>) -> Vec3ErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            Vec3ErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Copy a vector out of a caller pointer.
///
/// # Safety
/// `ptr` must be null or point to a readable `Vector3`.
pub(crate) unsafe fn read_vector(
    ptr: *const Vector3,
    param_name: &str,
) -> Result<Vector3, DefaultVec3Error> {
    if ptr.is_null() {
        return Err(DefaultVec3Error::null_pointer(param_name));
    }
    // SAFETY: non-null and readable per the caller contract. Reading by value
    // means no reference outlives this call, so `ptr` may alias an output.
    Ok(unsafe { ptr.read() })
}

/// Write a vector through a caller pointer.
///
/// # Safety
/// `ptr` must be null or point to a writable `Vector3`.
pub(crate) unsafe fn write_vector(
    ptr: *mut Vector3,
    param_name: &str,
    value: Vector3,
) -> Result<(), DefaultVec3Error> {
    if ptr.is_null() {
        return Err(DefaultVec3Error::null_pointer(param_name));
    }
    // SAFETY: non-null and writable per the caller contract.
    unsafe { ptr.write(value) };
    Ok(())
}
