//! RLWE: ring ciphertexts over `R_N`, additively homomorphic and supporting
//! multiplication by a cleartext plaintext polynomial.

use rand::Rng;

use crate::error::{Error, Result};
use crate::lwe::LweSecretKey;
use crate::polynomial::Polynomial;
use crate::random::{gaussian_torus_vec, uniform_bit_vec, uniform_torus_vec};
use crate::torus::{decode, encode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlweConfig {
    pub degree: usize,
    pub noise_std: f64,
}

#[derive(Debug, Clone)]
pub struct RlweSecretKey {
    pub config: RlweConfig,
    /// Coefficients in `{0, 1}`.
    pub key: Polynomial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RlweCiphertext {
    pub config: RlweConfig,
    pub a: Polynomial,
    pub b: Polynomial,
}

pub fn generate_rlwe_key<R: Rng + ?Sized>(config: RlweConfig, rng: &mut R) -> RlweSecretKey {
    RlweSecretKey {
        config,
        key: Polynomial::from_coeffs(uniform_bit_vec(rng, config.degree)),
    }
}

/// Reinterprets an LWE key's bit vector as the coefficients of an RLWE key
/// of matching degree. The two keys are the same object viewed differently.
pub fn convert_lwe_key_to_rlwe(lwe_key: &LweSecretKey, config: RlweConfig) -> Result<RlweSecretKey> {
    if lwe_key.config.dimension != config.degree {
        return Err(Error::ConfigMismatch(
            "lwe dimension does not match rlwe degree",
        ));
    }
    Ok(RlweSecretKey {
        config,
        key: Polynomial::from_coeffs(lwe_key.key.clone()),
    })
}

pub fn encode_rlwe(p: &Polynomial) -> Polynomial {
    Polynomial::from_coeffs(p.coeffs.iter().map(|c| encode(*c)).collect())
}

pub fn decode_rlwe(p: &Polynomial) -> Polynomial {
    Polynomial::from_coeffs(p.coeffs.iter().map(|c| decode(*c)).collect())
}

pub fn zero_plaintext(config: RlweConfig) -> Polynomial {
    Polynomial::zero(config.degree)
}

pub fn monomial_plaintext(c: i32, i: i64, config: RlweConfig) -> Polynomial {
    Polynomial::monomial(c, i, config.degree)
}

pub fn rlwe_encrypt<R: Rng + ?Sized>(
    m: &Polynomial,
    key: &RlweSecretKey,
    rng: &mut R,
) -> RlweCiphertext {
    let a = Polynomial::from_coeffs(uniform_torus_vec(rng, key.config.degree));
    let e = Polynomial::from_coeffs(gaussian_torus_vec(rng, key.config.noise_std, key.config.degree));
    let b = a.multiply(&key.key).add(m).add(&e);
    RlweCiphertext {
        config: key.config,
        a,
        b,
    }
}

pub fn rlwe_decrypt(ct: &RlweCiphertext, key: &RlweSecretKey) -> Polynomial {
    ct.b.subtract(&ct.a.multiply(&key.key))
}

/// A non-randomized ciphertext of `f` with zero noise.
pub fn trivial(f: &Polynomial, config: RlweConfig) -> RlweCiphertext {
    RlweCiphertext {
        config,
        a: Polynomial::zero(config.degree),
        b: f.clone(),
    }
}

pub fn add(lhs: &RlweCiphertext, rhs: &RlweCiphertext) -> RlweCiphertext {
    debug_assert_eq!(lhs.config, rhs.config);
    RlweCiphertext {
        config: lhs.config,
        a: lhs.a.add(&rhs.a),
        b: lhs.b.add(&rhs.b),
    }
}

pub fn subtract(lhs: &RlweCiphertext, rhs: &RlweCiphertext) -> RlweCiphertext {
    debug_assert_eq!(lhs.config, rhs.config);
    RlweCiphertext {
        config: lhs.config,
        a: lhs.a.subtract(&rhs.a),
        b: lhs.b.subtract(&rhs.b),
    }
}

/// Multiplies a cleartext plaintext polynomial `p` into an RLWE ciphertext,
/// producing an encryption of `p * message`. `p` is not torus-encoded: it is
/// treated as a small coefficient polynomial, as used for monomial shifts
/// during blind rotation.
pub fn plaintext_multiply(p: &Polynomial, ct: &RlweCiphertext) -> RlweCiphertext {
    RlweCiphertext {
        config: ct.config,
        a: p.multiply(&ct.a),
        b: p.multiply(&ct.b),
    }
}
