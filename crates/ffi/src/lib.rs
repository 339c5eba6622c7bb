//! C ABI over `vec3-core`.
//!
//! Exposes `Vector3` (a `#[repr(C)]` struct of three doubles) and the
//! `vec3_*` functions to C/C++/C# callers. A C header is generated by the
//! build script with cbindgen.
//!
//! Fallible functions return [`Vec3ErrorCode`]; details of the most recent
//! failure on the calling thread are available via `vec3_get_last_error`.

mod error;
mod helpers;
mod vector;

pub use error::{vec3_get_last_error, vec3_get_last_error_code, Vec3ErrorCode};
pub use vec3_core::Vector3;
pub use vector::*;
