//! Named operator functions over dynamic operands.
//!
//! These mirror `-a`, `a == b`, `a + b`, `a * s` and `a / s` for callers that
//! only hold [`Operand`]s. Each one validates its operands with the
//! [`is_vector`](crate::is_vector) capability check and reports ill-typed
//! input as `InvalidArgument`. Statically typed code should use the operator
//! impls on [`Vector3`] directly.
//!
//! For `times` and `divided_by`, exactly one operand must be a vector. Its
//! position does not matter: `times(s, v)` and `divided_by(s, v)` are the same
//! as `times(v, s)` and `divided_by(v, s)`.

use crate::core_types::{Operand, Vector3};
use crate::error::{Error, Result};

fn require_vector(operand: &Operand, role: &str) -> Result<Vector3> {
    operand.as_vector().ok_or_else(|| {
        tracing::debug!(role, kind = operand.kind(), "operand rejected, not a vector");
        Error::invalid_argument(format!(
            "{role} operand must be a vector, got {}",
            operand.kind()
        ))
    })
}

/// Put the vector first and the scalar second.
fn vector_and_scalar(a: &Operand, b: &Operand) -> Result<(Vector3, f64)> {
    let (vector, other) = match (a.as_vector(), b.as_vector()) {
        (Some(v), None) => (v, b),
        (None, Some(v)) => (v, a),
        (Some(_), Some(_)) => {
            tracing::debug!("operands rejected, both are vectors");
            return Err(Error::invalid_argument(
                "exactly one operand must be a vector, got two vectors",
            ));
        }
        (None, None) => {
            tracing::debug!(left = a.kind(), right = b.kind(), "operands rejected, no vector");
            return Err(Error::invalid_argument(format!(
                "exactly one operand must be a vector, got {} and {}",
                a.kind(),
                b.kind()
            )));
        }
    };

    let scalar = other.as_scalar().ok_or_else(|| {
        tracing::debug!(kind = other.kind(), "operand rejected, not a number");
        Error::invalid_argument(format!(
            "scalar operand must be a number, got {}",
            other.kind()
        ))
    })?;

    Ok((vector, scalar))
}

/// `-a`
///
/// # Errors
/// `InvalidArgument` if `a` is not a vector.
pub fn negate(a: &Operand) -> Result<Vector3> {
    Ok(-require_vector(a, "negated")?)
}

/// `a == b`, exact per component.
///
/// # Errors
/// `InvalidArgument` if either operand is not a vector.
pub fn equals(a: &Operand, b: &Operand) -> Result<bool> {
    Ok(require_vector(a, "left")? == require_vector(b, "right")?)
}

/// `a + b`
///
/// # Errors
/// `InvalidArgument` if either operand is not a vector.
pub fn plus(a: &Operand, b: &Operand) -> Result<Vector3> {
    Ok(require_vector(a, "left")? + require_vector(b, "right")?)
}

/// `v * s` with the vector on either side.
///
/// # Errors
/// `InvalidArgument` unless exactly one operand is a vector and the other is a
/// number.
pub fn times(a: &Operand, b: &Operand) -> Result<Vector3> {
    let (v, s) = vector_and_scalar(a, b)?;
    Ok(v * s)
}

/// `v / s` with the vector on either side.
///
/// # Errors
/// `InvalidArgument` unless exactly one operand is a vector and the other is a
/// number.
pub fn divided_by(a: &Operand, b: &Operand) -> Result<Vector3> {
    let (v, s) = vector_and_scalar(a, b)?;
    Ok(v / s)
}
