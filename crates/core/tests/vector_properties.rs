//! Property tests for the vector operation set
//!
//! Each property is checked over a few hundred seeded random samples.

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::Rng;
use common::{integer_vector, random_vector, rng, SAMPLES};
use std::collections::BTreeMap;
use vec3_core::{is_vector, ops, Operand, Vector3};

#[test]
fn test_construction_equivalence() {
    let mut rng = rng(1);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let s = v.x;
        assert_eq!(Vector3::new(s, s, s), Vector3::splat(s));

        let (x, y, z) = v.unpack();
        let positional = Vector3::from([x, y, z]);
        let named = Vector3::try_from(Operand::record([
            ("x", Operand::Scalar(x)),
            ("y", Operand::Scalar(y)),
            ("z", Operand::Scalar(z)),
        ]))
        .unwrap();
        assert_eq!(Vector3::new(x, y, z), positional);
        assert_eq!(positional, named);
    }
}

#[test]
fn test_additive_identity_and_inverse() {
    let mut rng = rng(2);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let mut out = Vector3::ONE;

        out.set_add(a, Vector3::ZERO);
        assert_eq!(out, a);

        out.set_add(a, -a);
        assert_eq!(out, Vector3::ZERO);
        assert_eq!(ops::negate(&Operand::Vector(a)).unwrap(), -a);
    }
}

#[test]
fn test_aliased_out_parameter_matches_temporary() {
    let mut rng = rng(3);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let s: f64 = rng.random_range(0.5..4.0);

        let mut temp = Vector3::ZERO;
        let mut aliased = a;
        temp.set_add(a, b);
        aliased.set_add(aliased, b);
        assert_eq!(aliased, temp);

        let mut aliased = b;
        temp.set_sub(a, b);
        aliased.set_sub(a, aliased);
        assert_eq!(aliased, temp);

        let mut aliased = a;
        temp.set_cross(a, b);
        aliased.set_cross(aliased, b);
        assert_eq!(aliased, temp);

        let mut aliased = a;
        temp.set_mul(a, s);
        aliased.set_mul(aliased, s);
        assert_eq!(aliased, temp);

        let mut aliased = a;
        temp.set_div(a, s);
        aliased.set_div(aliased, s);
        assert_eq!(aliased, temp);

        let mut aliased = a;
        temp.set_normalize(a);
        aliased.set_normalize(aliased);
        assert_eq!(aliased, temp);
    }
}

#[test]
fn test_cross_is_orthogonal() {
    let mut rng = rng(4);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let c = a.cross(b);
        let scale = a.len() * b.len();
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-10 * scale * a.len());
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-10 * scale * b.len());
    }
}

#[test]
fn test_length_relations() {
    let mut rng = rng(5);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_eq!(a.len2(), a.dot(a));
        assert_eq!(a.len(), a.len2().sqrt());
        assert_eq!(a.dist(b), (a - b).len());
        assert_eq!(a.dist2(b), (a - b).len2());
        assert_eq!(a.dist2(b), b.dist2(a));
    }
}

#[test]
fn test_normalize_has_unit_length() {
    let mut rng = rng(6);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let mut n = Vector3::ZERO;
        n.set_normalize(a);
        assert_relative_eq!(n.len(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n * a.len(), a, epsilon = 1e-9);
    }

    let zero = Vector3::ZERO.normalized();
    assert!(zero.x.is_nan());
    assert!(zero.y.is_nan());
    assert!(zero.z.is_nan());
}

#[test]
fn test_lerp_boundaries() {
    let mut rng = rng(7);
    for _ in 0..SAMPLES {
        let a = integer_vector(&mut rng);
        let b = integer_vector(&mut rng);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);

        let fa = random_vector(&mut rng);
        let fb = random_vector(&mut rng);
        assert_eq!(fa.lerp(fb, 0.0), fa);
        assert_relative_eq!(fa.lerp(fb, 1.0), fb, epsilon = 1e-12);
    }
}

#[test]
fn test_scalar_multiply_commutes() {
    let mut rng = rng(8);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let s = random_vector(&mut rng).z;
        let mut out = Vector3::ZERO;
        out.set_mul(a, s);
        assert_eq!(out, a * s);
        assert_eq!(out, s * a);

        let (va, vs) = (Operand::Vector(a), Operand::Scalar(s));
        assert_eq!(ops::times(&va, &vs).unwrap(), out);
        assert_eq!(ops::times(&vs, &va).unwrap(), out);

        out.set_div(a, s);
        assert_eq!(out, a / s);
        assert_eq!(ops::divided_by(&va, &vs).unwrap(), out);
    }
}

#[test]
fn test_is_vector_over_construction_paths() {
    let from_paths = [
        Vector3::default(),
        Vector3::splat(3.0),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::from((1.0, 2.0, 3.0)),
        Vector3::from_aggregate(&[4.0, 5.0, 6.0]),
        "(+1.000,-2.500,+0.000)".parse().unwrap(),
        Vector3::new(1.0, 2.0, 3.0).lerp(Vector3::ZERO, 0.5),
    ];
    for v in from_paths {
        assert!(is_vector(&Operand::Vector(v)));
    }

    let mut partial = BTreeMap::new();
    partial.insert("x".to_owned(), Operand::Scalar(1.0));
    partial.insert("y".to_owned(), Operand::Scalar(2.0));
    assert!(!is_vector(&Operand::Record(partial.clone())));
    partial.insert("z".to_owned(), Operand::Scalar(3.0));
    assert!(is_vector(&Operand::Record(partial)));

    assert!(!is_vector(&Operand::Scalar(1.0)));
    assert!(!is_vector(&Operand::Text("vector".to_owned())));
}

#[test]
fn test_equality_is_exact() {
    let a = Vector3::new(0.1, 0.2, 0.3);
    let b = Vector3::new(0.1 + 1e-15, 0.2, 0.3);
    assert_ne!(a, b);
    assert!(!ops::equals(&Operand::Vector(a), &Operand::Vector(b)).unwrap());
    assert!(ops::equals(&Operand::Vector(a), &Operand::Scalar(0.1)).is_err());
}
