//! C ABI for `Vector3`.
//!
//! Value-returning functions take and return `Vector3` by value and cannot
//! fail. Out-parameter functions take raw pointers that **may alias**: every
//! operand is copied out before `out` is written, so `vec3_add(a, a, b)` is
//! well-defined. They return a `Vec3ErrorCode` and record failures for
//! `vec3_get_last_error`.
//!
//! Example:
//! ```c
//! Vector3 pos = vec3_new(1.0, 2.0, 3.0);
//! Vector3 vel = vec3_splat(0.5);
//! vec3_add(&pos, &pos, &vel);          // pos += vel
//! char text[64];
//! vec3_to_string(&pos, text, sizeof text);
//! ```

use std::os::raw::c_char;
use std::ptr;

use vec3_core::Vector3;

use crate::error::{DefaultVec3Error, Vec3ErrorCode};
use crate::helpers::{read_vector, track_error, track_result, write_vector};

/// Apply `op` to two vector operands and store the result in `out`.
///
/// # Safety
/// Pointers must be null or valid for their access; they may alias.
unsafe fn binary_into<F>(
    out: *mut Vector3,
    a: *const Vector3,
    b: *const Vector3,
    op: F,
) -> Result<(), DefaultVec3Error>
where
    F: FnOnce(&mut Vector3, Vector3, Vector3),
{
    let (a, b) = unsafe { (read_vector(a, "a")?, read_vector(b, "b")?) };
    if out.is_null() {
        return Err(DefaultVec3Error::null_pointer("out"));
    }
    // SAFETY: operands were copied above, so this is the only live reference.
    let out = unsafe { &mut *out };
    op(out, a, b);
    Ok(())
}

/// Apply `op` to a vector operand and a scalar and store the result in `out`.
///
/// # Safety
/// Pointers must be null or valid for their access; they may alias.
unsafe fn scale_into<F>(
    out: *mut Vector3,
    a: *const Vector3,
    s: f64,
    op: F,
) -> Result<(), DefaultVec3Error>
where
    F: FnOnce(&mut Vector3, Vector3, f64),
{
    let a = unsafe { read_vector(a, "a")? };
    if out.is_null() {
        return Err(DefaultVec3Error::null_pointer("out"));
    }
    // SAFETY: the operand was copied above, so this is the only live reference.
    let out = unsafe { &mut *out };
    op(out, a, s);
    Ok(())
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Create a vector from three components.
#[no_mangle]
pub extern "C" fn vec3_new(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

/// Create `(s, s, s)`.
#[no_mangle]
pub extern "C" fn vec3_splat(s: f64) -> Vector3 {
    Vector3::splat(s)
}

/// Create the zero vector.
#[no_mangle]
pub extern "C" fn vec3_zero() -> Vector3 {
    Vector3::ZERO
}

/// Create a vector from an array of exactly three doubles.
///
/// # Returns
/// - `Ok` with `out` set
/// - `NullPointer` if `values` or `out` is null
/// - `InvalidArgument` if `len != 3`
///
/// # Safety
/// `values` must point to `len` readable doubles; `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn vec3_from_array(
    values: *const f64,
    len: usize,
    out: *mut Vector3,
) -> Vec3ErrorCode {
    if values.is_null() {
        return track_error(&DefaultVec3Error::null_pointer("values"));
    }
    // SAFETY: non-null and `len` readable elements per the caller contract.
    let values = unsafe { std::slice::from_raw_parts(values, len) };
    let result = Vector3::try_from(values)
        .map_err(DefaultVec3Error::from)
        .and_then(|v| unsafe { write_vector(out, "out", v) });
    track_result(result)
}

// ============================================================================
// OUT-PARAMETER ARITHMETIC
// ============================================================================

/// `out = a + b`. `out` may alias `a` and/or `b`.
///
/// # Safety
/// Non-null pointers must be valid; see the module docs.
#[no_mangle]
pub unsafe extern "C" fn vec3_add(
    out: *mut Vector3,
    a: *const Vector3,
    b: *const Vector3,
) -> Vec3ErrorCode {
    track_result(unsafe {
        binary_into(out, a, b, |out, a, b| {
            out.set_add(a, b);
        })
    })
}

/// `out = a - b`. `out` may alias `a` and/or `b`.
///
/// # Safety
/// Non-null pointers must be valid; see the module docs.
#[no_mangle]
pub unsafe extern "C" fn vec3_sub(
    out: *mut Vector3,
    a: *const Vector3,
    b: *const Vector3,
) -> Vec3ErrorCode {
    track_result(unsafe {
        binary_into(out, a, b, |out, a, b| {
            out.set_sub(a, b);
        })
    })
}

/// `out = a × b`. `out` may alias `a` and/or `b`.
///
/// # Safety
/// Non-null pointers must be valid; see the module docs.
#[no_mangle]
pub unsafe extern "C" fn vec3_cross(
    out: *mut Vector3,
    a: *const Vector3,
    b: *const Vector3,
) -> Vec3ErrorCode {
    track_result(unsafe {
        binary_into(out, a, b, |out, a, b| {
            out.set_cross(a, b);
        })
    })
}

/// `out = a * s`. `out` may alias `a`.
///
/// # Safety
/// Non-null pointers must be valid; see the module docs.
#[no_mangle]
pub unsafe extern "C" fn vec3_mul(out: *mut Vector3, a: *const Vector3, s: f64) -> Vec3ErrorCode {
    track_result(unsafe {
        scale_into(out, a, s, |out, a, s| {
            out.set_mul(a, s);
        })
    })
}

/// `out = a / s`. Division by zero yields `±inf`/`NaN`, not an error.
///
/// # Safety
/// Non-null pointers must be valid; see the module docs.
#[no_mangle]
pub unsafe extern "C" fn vec3_div(out: *mut Vector3, a: *const Vector3, s: f64) -> Vec3ErrorCode {
    track_result(unsafe {
        scale_into(out, a, s, |out, a, s| {
            out.set_div(a, s);
        })
    })
}

/// `out = a / |a|`. A zero-length `a` yields `NaN` in every component.
///
/// # Safety
/// Non-null pointers must be valid; see the module docs.
#[no_mangle]
pub unsafe extern "C" fn vec3_normalize(out: *mut Vector3, a: *const Vector3) -> Vec3ErrorCode {
    let result = unsafe { read_vector(a, "a") }.and_then(|a| {
        if out.is_null() {
            return Err(DefaultVec3Error::null_pointer("out"));
        }
        // SAFETY: `a` was copied above, so this is the only live reference.
        unsafe { &mut *out }.set_normalize(a);
        Ok(())
    });
    track_result(result)
}

// ============================================================================
// QUERIES
// ============================================================================

/// Dot product.
#[no_mangle]
pub extern "C" fn vec3_dot(a: Vector3, b: Vector3) -> f64 {
    a.dot(b)
}

/// Length.
#[no_mangle]
pub extern "C" fn vec3_len(a: Vector3) -> f64 {
    a.len()
}

/// Squared length.
#[no_mangle]
pub extern "C" fn vec3_len2(a: Vector3) -> f64 {
    a.len2()
}

/// Distance between two points.
#[no_mangle]
pub extern "C" fn vec3_dist(a: Vector3, b: Vector3) -> f64 {
    a.dist(b)
}

/// Squared distance between two points.
#[no_mangle]
pub extern "C" fn vec3_dist2(a: Vector3, b: Vector3) -> f64 {
    a.dist2(b)
}

/// `a + s * (b - a)`, unclamped.
#[no_mangle]
pub extern "C" fn vec3_lerp(a: Vector3, b: Vector3, s: f64) -> Vector3 {
    a.lerp(b, s)
}

/// `-a`
#[no_mangle]
pub extern "C" fn vec3_negate(a: Vector3) -> Vector3 {
    -a
}

/// Exact component-wise equality.
#[no_mangle]
pub extern "C" fn vec3_equals(a: Vector3, b: Vector3) -> bool {
    a == b
}

/// Write the three components of `a` to `out_x`, `out_y`, `out_z`.
///
/// # Safety
/// All pointers must be non-null and valid.
#[no_mangle]
pub unsafe extern "C" fn vec3_unpack(
    a: *const Vector3,
    out_x: *mut f64,
    out_y: *mut f64,
    out_z: *mut f64,
) -> Vec3ErrorCode {
    let result = unsafe { read_vector(a, "a") }.and_then(|a| {
        for (ptr, name) in [(out_x, "out_x"), (out_y, "out_y"), (out_z, "out_z")] {
            if ptr.is_null() {
                return Err(DefaultVec3Error::null_pointer(name));
            }
        }
        let (x, y, z) = a.unpack();
        // SAFETY: all three checked non-null above.
        unsafe {
            out_x.write(x);
            out_y.write(y);
            out_z.write(z);
        }
        Ok(())
    });
    track_result(result)
}

/// Render `a` as `(+x.xxx,+y.yyy,+z.zzz)` into a caller buffer, NUL-terminated.
///
/// # Returns
/// - `Ok` with the text in `buf`
/// - `NullPointer` if `a` or `buf` is null
/// - `BufferTooSmall` if `buf_len` cannot hold the text and terminator
///
/// # Safety
/// `buf` must be writable for `buf_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn vec3_to_string(
    a: *const Vector3,
    buf: *mut c_char,
    buf_len: usize,
) -> Vec3ErrorCode {
    let result = unsafe { read_vector(a, "a") }.and_then(|a| {
        if buf.is_null() {
            return Err(DefaultVec3Error::null_pointer("buf"));
        }
        let text = a.to_string();
        let required = text.len() + 1;
        if buf_len < required {
            return Err(DefaultVec3Error::buffer_too_small(required, buf_len));
        }
        // SAFETY: `buf` holds at least `required` bytes; the text never
        // overlaps caller memory.
        unsafe {
            ptr::copy_nonoverlapping(text.as_ptr(), buf.cast::<u8>(), text.len());
            buf.add(text.len()).write(0);
        }
        Ok(())
    });
    track_result(result)
}
