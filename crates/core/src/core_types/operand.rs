//! Dynamically typed operands.
//!
//! Scripting bindings and config loaders hand over values whose shape is only
//! known at runtime. `Operand` is the tagged union those layers build, and
//! [`is_vector`] is the capability check the named operator functions in
//! [`crate::ops`] run before treating an operand as a vector.

use std::collections::BTreeMap;

use crate::core_types::vector3::Vector3;
use crate::error::{Error, Result};

/// A runtime value that may or may not be usable as a vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A vector value.
    Vector(Vector3),
    /// A number.
    Scalar(f64),
    /// A string. Never a vector and never a number.
    Text(String),
    /// Positional aggregate, e.g. `{1, 2, 3}`.
    Sequence(Vec<Operand>),
    /// Named-field aggregate, e.g. `{x = 1, y = 2, z = 3}`.
    Record(BTreeMap<String, Operand>),
}

impl Operand {
    /// Build a record operand from `(name, value)` pairs.
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Operand)>,
        K: Into<String>,
    {
        Operand::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short name of the operand's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "vector",
            Operand::Scalar(_) => "number",
            Operand::Text(_) => "string",
            Operand::Sequence(_) => "sequence",
            Operand::Record(_) => "record",
        }
    }

    /// The number held by a `Scalar` operand.
    pub fn as_scalar(&self) -> Option<f64> {
        match *self {
            Operand::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The vector this operand stands for, if it passes the capability check.
    ///
    /// Only `Vector` operands and records with numeric `x`, `y` and `z` fields
    /// qualify. Positional sequences are constructible (see `TryFrom`) but are
    /// not vectors.
    pub fn as_vector(&self) -> Option<Vector3> {
        match self {
            Operand::Vector(v) => Some(*v),
            Operand::Record(fields) => {
                let field = |name: &str| fields.get(name).and_then(Operand::as_scalar);
                Some(Vector3::new(field("x")?, field("y")?, field("z")?))
            }
            _ => None,
        }
    }
}

impl From<Vector3> for Operand {
    fn from(v: Vector3) -> Self {
        Operand::Vector(v)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_owned())
    }
}

/// True iff `v` exposes numeric `x`, `y` and `z`.
pub fn is_vector(v: &Operand) -> bool {
    v.as_vector().is_some()
}

/// Construction from a dynamic value: a vector is copied, a number is
/// broadcast, a sequence of three numbers or a record with numeric `x`/`y`/`z`
/// is copied component-wise. Anything else is an `InvalidArgument`.
impl TryFrom<&Operand> for Vector3 {
    type Error = Error;

    fn try_from(value: &Operand) -> Result<Self> {
        match value {
            Operand::Scalar(s) => Ok(Vector3::splat(*s)),
            Operand::Sequence(items) => {
                if items.len() != 3 {
                    return Err(Error::invalid_argument(format!(
                        "expected 3 components, got {}",
                        items.len()
                    )));
                }
                let mut components = [0.0; 3];
                for (i, (slot, item)) in components.iter_mut().zip(items).enumerate() {
                    *slot = item.as_scalar().ok_or_else(|| {
                        Error::invalid_argument(format!(
                            "component {} must be a number, got {}",
                            i + 1,
                            item.kind()
                        ))
                    })?;
                }
                Ok(Vector3::from(components))
            }
            Operand::Record(_) | Operand::Vector(_) => value.as_vector().ok_or_else(|| {
                Error::invalid_argument("record must have numeric 'x', 'y' and 'z' fields")
            }),
            Operand::Text(_) => Err(Error::invalid_argument(format!(
                "cannot build a vector from a {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Operand> for Vector3 {
    type Error = Error;

    fn try_from(value: Operand) -> Result<Self> {
        Vector3::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz(x: f64, y: f64, z: f64) -> Operand {
        Operand::record([
            ("x", Operand::Scalar(x)),
            ("y", Operand::Scalar(y)),
            ("z", Operand::Scalar(z)),
        ])
    }

    #[test]
    fn test_is_vector_accepts_well_formed() {
        assert!(is_vector(&Operand::Vector(Vector3::ZERO)));
        assert!(is_vector(&xyz(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_is_vector_rejects_others() {
        assert!(!is_vector(&Operand::Scalar(1.0)));
        assert!(!is_vector(&Operand::from("(1,2,3)")));
        assert!(!is_vector(&Operand::Sequence(vec![
            Operand::Scalar(1.0),
            Operand::Scalar(2.0),
            Operand::Scalar(3.0),
        ])));

        let missing_z = Operand::record([("x", Operand::Scalar(1.0)), ("y", Operand::Scalar(2.0))]);
        assert!(!is_vector(&missing_z));

        let text_y = Operand::record([
            ("x", Operand::Scalar(1.0)),
            ("y", Operand::from("2")),
            ("z", Operand::Scalar(3.0)),
        ]);
        assert!(!is_vector(&text_y));
    }

    #[test]
    fn test_construction_paths_agree() {
        let expected = Vector3::new(1.0, 2.0, 3.0);
        let sequence = Operand::Sequence(vec![1.0.into(), 2.0.into(), 3.0.into()]);
        assert_eq!(Vector3::try_from(&sequence), Ok(expected));
        assert_eq!(Vector3::try_from(&xyz(1.0, 2.0, 3.0)), Ok(expected));
        assert_eq!(Vector3::try_from(Operand::Vector(expected)), Ok(expected));
        assert_eq!(Vector3::try_from(Operand::Scalar(2.0)), Ok(Vector3::splat(2.0)));
    }

    #[test]
    fn test_construction_rejects_non_numeric() {
        let bad = Operand::Sequence(vec![1.0.into(), "two".into(), 3.0.into()]);
        assert!(matches!(
            Vector3::try_from(&bad),
            Err(Error::InvalidArgument(msg)) if msg.contains("component 2")
        ));
        assert!(Vector3::try_from(Operand::from("hello")).is_err());
        assert!(Vector3::try_from(Operand::Sequence(vec![1.0.into()])).is_err());
        assert!(Vector3::try_from(Operand::record([("x", Operand::Scalar(1.0))])).is_err());
    }
}
