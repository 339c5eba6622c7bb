//! Core types: the vector value, its capability trait and dynamic operands

pub mod capability;
pub mod operand;
pub mod vector3;

pub use capability::IsVector;
pub use operand::{is_vector, Operand};
pub use vector3::Vector3;
