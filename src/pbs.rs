//! Gate bootstrapping: blind rotation, sample extraction, and the
//! noise-refreshing `bootstrap` operation built from them.
//!
//! The pipeline mirrors a mod-down -> blind-rotate -> sample-extract shape:
//! an LWE ciphertext (coarsened to an index into a test polynomial) drives a
//! sequence of CMUX operations that homomorphically rotate the polynomial,
//! after which one coefficient is extracted back into an LWE ciphertext
//! whose noise no longer depends on the input's.

use log::trace;
use rand::Rng;

use crate::gsw::{GswCiphertext, GswConfig};
use crate::lwe::{LweCiphertext, LweConfig, LweSecretKey};
use crate::polynomial::Polynomial;
use crate::rlwe::{self, RlweCiphertext, RlweSecretKey};

/// For each bit of an LWE secret key, a GSW encryption (under the GSW key
/// derived from the RLWE key) of that bit as a constant polynomial.
#[derive(Debug, Clone)]
pub struct BootstrapKey {
    pub lwe_config: LweConfig,
    pub gsw_config: GswConfig,
    pub encrypted_bits: Vec<GswCiphertext>,
}

pub fn generate_bootstrap_key<R: Rng + ?Sized>(
    lwe_key: &LweSecretKey,
    gsw_key: &crate::gsw::GswSecretKey,
    rng: &mut R,
) -> BootstrapKey {
    let n = gsw_key.config.rlwe_config.degree;
    let encrypted_bits = lwe_key
        .key
        .iter()
        .map(|bit| {
            let m = Polynomial::monomial(*bit, 0, n);
            crate::gsw::gsw_encrypt(&m, gsw_key, rng)
        })
        .collect();
    BootstrapKey {
        lwe_config: lwe_key.config,
        gsw_config: gsw_key.config,
        encrypted_bits,
    }
}

/// Rounds `a_i * N / 2^31` to the nearest integer, matching the scaling
/// used by the reference bootstrap this crate follows bit-for-bit: the
/// divisor is `2^31`, not `2^32`, which doubles the effective rotation.
fn scale_to_degree(x: i32, degree: usize) -> i64 {
    let scaled = (x as f64) * (degree as f64) / (1i64 << 31) as f64;
    scaled.round() as i64
}

/// Homomorphically evaluates `X^i * f(X)` where `i` is known only as an LWE
/// encryption `(a, b)`, driven by a `BootstrapKey` encrypting the bits of
/// the LWE secret key used for that encryption.
pub fn blind_rotate(
    ct: &LweCiphertext,
    f: &RlweCiphertext,
    bootstrap_key: &BootstrapKey,
) -> RlweCiphertext {
    let degree = bootstrap_key.gsw_config.rlwe_config.degree;
    let bbar = scale_to_degree(ct.b, degree);

    let mut acc = rlwe::plaintext_multiply(&Polynomial::monomial(1, bbar, degree), f);

    for (a_i, selector) in ct.a.iter().zip(bootstrap_key.encrypted_bits.iter()) {
        let abar_i = scale_to_degree(*a_i, degree);
        let rotated = rlwe::plaintext_multiply(&Polynomial::monomial(1, -abar_i, degree), &acc);
        acc = crate::gsw::cmux(selector, &acc, &rotated);
    }

    acc
}

/// Collapses coefficient `i` of an RLWE ciphertext into an LWE ciphertext of
/// that coefficient, in dimension `N` (the ring degree), keyed by the
/// RLWE key's coefficients read as an LWE key.
pub fn sample_extract(i: usize, ct: &RlweCiphertext) -> LweCiphertext {
    let n = ct.config.degree;
    let mut a = vec![0i32; n];
    for k in 0..n {
        a[k] = if k <= i {
            ct.a.coeffs[i - k]
        } else {
            ct.a.coeffs[n + i - k].wrapping_neg()
        };
    }
    LweCiphertext {
        config: LweConfig {
            dimension: n,
            noise_std: ct.config.noise_std,
        },
        a,
        b: ct.b.coeffs[i],
    }
}

pub fn sample_extract_key(rlwe_key: &RlweSecretKey) -> LweSecretKey {
    LweSecretKey {
        config: LweConfig {
            dimension: rlwe_key.config.degree,
            noise_std: rlwe_key.config.noise_std,
        },
        key: rlwe_key.key.coeffs.clone(),
    }
}

/// The negacyclic step function used as the bootstrap's test polynomial:
/// `-scale/2` on the lower half of indices, `+scale/2` on the upper half.
fn test_polynomial(scale: i32, degree: usize) -> Polynomial {
    let half = scale.wrapping_div(2);
    let mut coeffs = vec![half.wrapping_neg(); degree];
    for c in coeffs.iter_mut().skip(degree / 2) {
        *c = half;
    }
    Polynomial::from_coeffs(coeffs)
}

/// Refreshes the noise of `ct` and maps it onto `{0, scale}` according to
/// the sign of its underlying message: positive (beyond the torus
/// threshold) maps to `scale`, negative maps to `0`. The output's noise is
/// bounded independently of `ct`'s input noise -- the defining property of
/// bootstrapping.
pub fn bootstrap(ct: &LweCiphertext, bootstrap_key: &BootstrapKey, scale: i32) -> LweCiphertext {
    let degree = bootstrap_key.gsw_config.rlwe_config.degree;
    let test_poly = test_polynomial(scale, degree);
    let trivial_rlwe = rlwe::trivial(&test_poly, bootstrap_key.gsw_config.rlwe_config);

    let rotated = blind_rotate(ct, &trivial_rlwe, bootstrap_key);
    let extracted = sample_extract(0, &rotated);

    let half = scale.wrapping_div(2);
    let offset = crate::lwe::trivial(half, extracted.config);
    let result = crate::lwe::add(&extracted, &offset);
    trace!(
        "bootstrap: degree={}, scale={}, output b={}",
        degree,
        scale,
        result.b
    );
    result
}
