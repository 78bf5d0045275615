//! Injectable randomness.
//!
//! Every key-generation and encryption entry point in this crate takes an
//! `&mut R: RngCore` rather than reaching for a process-wide generator, so
//! that tests can pin a seed and get reproducible ciphertexts. This mirrors
//! the RNG-as-generic-parameter convention used throughout the reference
//! library this crate is built in the style of.
//!
//! [`UniformSampler`] and [`GaussianSampler`] name the two sampling
//! operations as traits, blanket-implemented for any `R: Rng`, so call
//! sites can be generic over "a source of torus noise" rather than over a
//! concrete RNG type.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// A source of uniformly random torus elements and bits.
pub trait UniformSampler {
    fn sample_uniform_torus(&mut self) -> i32;
    fn sample_uniform_bit(&mut self) -> i32;
}

/// A source of centered-Gaussian torus noise.
pub trait GaussianSampler {
    /// `round((2^31 - 1) * N(0, std_dev))`, matching the scaling used
    /// throughout the reference implementation this crate's noise model
    /// follows. `std_dev` is expressed as a fraction of the torus (e.g.
    /// `2f64.powi(-24)`).
    fn sample_gaussian_torus(&mut self, std_dev: f64) -> i32;
}

impl<R: Rng + ?Sized> UniformSampler for R {
    fn sample_uniform_torus(&mut self) -> i32 {
        self.gen::<i32>()
    }

    fn sample_uniform_bit(&mut self) -> i32 {
        self.gen_range(0..2)
    }
}

impl<R: Rng + ?Sized> GaussianSampler for R {
    fn sample_gaussian_torus(&mut self, std_dev: f64) -> i32 {
        if std_dev == 0.0 {
            return 0;
        }
        let normal = Normal::new(0.0, std_dev).expect("std_dev must be finite and non-negative");
        let sample: f64 = normal.sample(self);
        let scaled = sample * (i32::MAX as f64);
        scaled.round() as i64 as i32
    }
}

/// Samples a uniformly random element of the discretized torus (all of
/// `i32`, interpreted as `Z/2^32`).
pub fn uniform_torus<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.sample_uniform_torus()
}

pub fn uniform_torus_vec<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.sample_uniform_torus()).collect()
}

pub fn gaussian_torus<R: Rng + ?Sized>(rng: &mut R, std_dev: f64) -> i32 {
    rng.sample_gaussian_torus(std_dev)
}

pub fn gaussian_torus_vec<R: Rng + ?Sized>(rng: &mut R, std_dev: f64, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.sample_gaussian_torus(std_dev)).collect()
}

/// Samples a uniformly random bit, used for secret-key coefficients.
pub fn uniform_bit<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.sample_uniform_bit()
}

pub fn uniform_bit_vec<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.sample_uniform_bit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn gaussian_zero_std_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..16 {
            assert_eq!(gaussian_torus(&mut rng, 0.0), 0);
        }
    }

    #[test]
    fn uniform_bit_is_boolean() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..256 {
            let b = uniform_bit(&mut rng);
            assert!(b == 0 || b == 1);
        }
    }

    #[test]
    fn deterministic_with_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(uniform_torus_vec(&mut a, 32), uniform_torus_vec(&mut b, 32));
    }

    #[test]
    fn trait_methods_agree_with_free_functions() {
        let mut a = ChaCha8Rng::seed_from_u64(43);
        let mut b = ChaCha8Rng::seed_from_u64(43);
        assert_eq!(a.sample_uniform_torus(), uniform_torus(&mut b));
        assert_eq!(a.sample_uniform_bit(), uniform_bit(&mut b));
    }
}
