//! Shared setup for integration tests
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vec3_core::Vector3;

/// Samples drawn per property.
pub const SAMPLES: usize = 500;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic generator so failures are reproducible.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Vector with components uniformly drawn from `[-100, 100)`.
pub fn random_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}

/// Vector with small integer components, for properties that only hold
/// exactly when the arithmetic is exact.
pub fn integer_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        f64::from(rng.random_range(-50_i32..50)),
        f64::from(rng.random_range(-50_i32..50)),
        f64::from(rng.random_range(-50_i32..50)),
    )
}
