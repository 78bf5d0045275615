//! GSW ciphertexts: support homomorphic multiplication of a GSW-encrypted
//! polynomial into an RLWE ciphertext, via gadget (base-`2^log_p`)
//! decomposition. Built on top of [`crate::rlwe`].

use rand::Rng;

use crate::decomposer::Decomposer;
use crate::error::{Error, Result};
use crate::lwe::LweSecretKey;
use crate::polynomial::Polynomial;
use crate::rlwe::{self, RlweCiphertext, RlweConfig, RlweSecretKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GswConfig {
    pub rlwe_config: RlweConfig,
    /// Homomorphic multiplication uses the base-`2^log_p` representation.
    pub log_p: u32,
}

impl GswConfig {
    pub fn new(rlwe_config: RlweConfig, log_p: u32) -> Result<Self> {
        if log_p == 0 || 32 % log_p != 0 {
            return Err(Error::InvalidLogP(log_p));
        }
        Ok(GswConfig {
            rlwe_config,
            log_p,
        })
    }

    pub fn levels(&self) -> usize {
        (32 / self.log_p) as usize
    }

    fn decomposer(&self) -> Decomposer {
        Decomposer::new(self.log_p)
    }
}

/// A GSW key is an RLWE key viewed as the selector polynomial used for
/// encryption; the two are the same object viewed differently.
#[derive(Debug, Clone)]
pub struct GswSecretKey {
    pub config: GswConfig,
    pub key: Polynomial,
}

pub fn convert_rlwe_key_to_gsw(rlwe_key: &RlweSecretKey, config: GswConfig) -> GswSecretKey {
    debug_assert_eq!(rlwe_key.config, config.rlwe_config);
    GswSecretKey {
        config,
        key: rlwe_key.key.clone(),
    }
}

pub fn convert_lwe_key_to_gsw(lwe_key: &LweSecretKey, config: GswConfig) -> Result<GswSecretKey> {
    if lwe_key.config.dimension != config.rlwe_config.degree {
        return Err(Error::ConfigMismatch(
            "lwe dimension does not match gsw ring degree",
        ));
    }
    Ok(GswSecretKey {
        config,
        key: Polynomial::from_coeffs(lwe_key.key.clone()),
    })
}

fn gsw_key_as_rlwe(key: &GswSecretKey) -> RlweSecretKey {
    RlweSecretKey {
        config: key.config.rlwe_config,
        key: key.key.clone(),
    }
}

/// An encryption of a (small, untorus-encoded) selector polynomial `m`, laid
/// out as `2*levels` RLWE encryptions of zero: rows `0..levels` carry
/// `p^i * m` added into their `a` component, rows `levels..2*levels` carry
/// `p^i * m` added into their `b` component.
#[derive(Debug, Clone)]
pub struct GswCiphertext {
    pub config: GswConfig,
    pub rows: Vec<RlweCiphertext>,
}

pub fn gsw_encrypt<R: Rng + ?Sized>(
    m: &Polynomial,
    key: &GswSecretKey,
    rng: &mut R,
) -> GswCiphertext {
    let config = key.config;
    let levels = config.levels();
    let rlwe_key = gsw_key_as_rlwe(key);
    let zero = rlwe::zero_plaintext(config.rlwe_config);

    let mut rows: Vec<RlweCiphertext> = (0..2 * levels)
        .map(|_| rlwe::rlwe_encrypt(&zero, &rlwe_key, rng))
        .collect();

    for i in 0..levels {
        let p_i = 1i32.wrapping_shl(i as u32 * config.log_p);
        let scaled = m.constant_multiply(p_i);
        rows[i].a = rows[i].a.add(&scaled);
        rows[i + levels].b = rows[i + levels].b.add(&scaled);
    }

    GswCiphertext { config, rows }
}

/// Homomorphically multiplies a GSW encryption of `m` into an RLWE
/// encryption of `u`, returning an RLWE encryption of `m * u`.
pub fn gsw_multiply(gsw: &GswCiphertext, ct: &RlweCiphertext) -> RlweCiphertext {
    debug_assert_eq!(gsw.config.rlwe_config, ct.config);
    let decomposer = gsw.config.decomposer();
    let mut digits = decomposer.decompose_polynomial(&ct.a);
    digits.extend(decomposer.decompose_polynomial(&ct.b));

    let n = ct.config.degree;
    let mut a = Polynomial::zero(n);
    let mut b = Polynomial::zero(n);
    for (digit, row) in digits.iter().zip(gsw.rows.iter()) {
        a = a.add(&digit.multiply(&row.a));
        b = b.add(&digit.multiply(&row.b));
    }

    RlweCiphertext {
        config: ct.config,
        a,
        b,
    }
}

/// Homomorphic multiplexer: if `selector` is a GSW encryption of `0`, the
/// output decrypts to `c0`'s message; if `1`, to `c1`'s.
pub fn cmux(selector: &GswCiphertext, c0: &RlweCiphertext, c1: &RlweCiphertext) -> RlweCiphertext {
    let diff = rlwe::subtract(c1, c0);
    rlwe::add(&gsw_multiply(selector, &diff), c0)
}
