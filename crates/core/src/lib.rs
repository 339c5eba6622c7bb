//! Vector3 Core Library
//!
//! A double-precision 3D vector value type for graphics, physics and math
//! libraries. Provides allocation-free out-parameter arithmetic that tolerates
//! aliasing, value-returning operators, geometric queries (dot/cross product,
//! length, distance, normalization, interpolation) and a fixed human-readable
//! text form.
//!
//! ## Layout
//!
//! - [`Vector3`]: flat `#[repr(C)]` value with `x`, `y`, `z` fields
//! - [`IsVector`]: capability trait for anything exposing numeric `x`/`y`/`z`
//! - [`Operand`] and [`ops`]: dynamically typed operands and the named operator
//!   functions (`negate`, `equals`, `plus`, `times`, `divided_by`) that validate them
//! - [`Error`]: the single `InvalidArgument` failure kind
//!
//! ## Features
//!
//! - `nalgebra` (default): conversions to and from `nalgebra::Vector3<f64>`
//! - `bytemuck`: `Pod`/`Zeroable` and flat `&[f64]` views of vector slices

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod ops;

// Re-export core types
pub use core_types::{is_vector, IsVector, Operand, Vector3};
pub use error::{Error, Result};
