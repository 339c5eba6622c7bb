use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
///
/// # Example
/// ```rust,ignore
/// let err = DefaultVec3Error::null_pointer("out");
/// assert_eq!(err.code(), Vec3ErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'out' cannot be null");
/// ```
pub(crate) trait Vec3Error {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> Vec3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `Vec3Error` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVec3Error {
    code: Vec3ErrorCode,
    msg: String,
}

impl DefaultVec3Error {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out"`, `"a"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: Vec3ErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    ///
    /// # Arguments
    /// * `required` - Bytes needed, including the NUL terminator
    /// * `available` - Bytes the caller provided
    pub fn buffer_too_small(required: usize, available: usize) -> Self {
        Self {
            code: Vec3ErrorCode::BufferTooSmall,
            msg: format!("Buffer too small: need {required} bytes, got {available}"),
        }
    }
}

impl From<vec3_core::Error> for DefaultVec3Error {
    fn from(error: vec3_core::Error) -> Self {
        Self {
            code: Vec3ErrorCode::InvalidArgument,
            msg: error.to_string(),
        }
    }
}

impl Vec3Error for DefaultVec3Error {
    fn code(&self) -> Vec3ErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vec3ErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid argument: a value that is not a number or not a well-formed
    /// vector where one was required.
    InvalidArgument = 2,

    /// Output buffer too small to hold the result.
    BufferTooSmall = 3,
}

impl From<DefaultVec3Error> for Vec3ErrorCode {
    fn from(error: DefaultVec3Error) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored so the pointer handed out by `vec3_get_last_error` stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, Vec3ErrorCode)> = const { RefCell::new((None, Vec3ErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, Vec3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, Vec3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last fallible call failed.
/// - `null` if it succeeded or no fallible call has been made on this thread.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage).
///
/// # Lifetime
/// The returned pointer is valid until the next fallible FFI call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// Vector3 v;
/// double values[2] = {1.0, 2.0};
/// if (vec3_from_array(values, 2, &v) != Ok) {
///     printf("vec3_from_array failed: %s\n", vec3_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn vec3_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if none).
#[no_mangle]
pub extern "C" fn vec3_get_last_error_code() -> Vec3ErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
