//! LWE: scalar ciphertexts over the discretized torus, additively
//! homomorphic under a binary secret key.

use rand::Rng;

use crate::random::{gaussian_torus, uniform_bit_vec, uniform_torus_vec};
use crate::torus::{decode, decode_bool, encode, encode_bool};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LweConfig {
    pub dimension: usize,
    pub noise_std: f64,
}

#[derive(Debug, Clone)]
pub struct LweSecretKey {
    pub config: LweConfig,
    /// Coefficients in `{0, 1}`.
    pub key: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LweCiphertext {
    pub config: LweConfig,
    pub a: Vec<i32>,
    pub b: i32,
}

pub fn generate_lwe_key<R: Rng + ?Sized>(config: LweConfig, rng: &mut R) -> LweSecretKey {
    LweSecretKey {
        config,
        key: uniform_bit_vec(rng, config.dimension),
    }
}

fn dot(a: &[i32], s: &[i32]) -> i32 {
    a.iter()
        .zip(s.iter())
        .fold(0i32, |acc, (ai, si)| acc.wrapping_add(ai.wrapping_mul(*si)))
}

pub fn lwe_encrypt<R: Rng + ?Sized>(m: i32, key: &LweSecretKey, rng: &mut R) -> LweCiphertext {
    let a = uniform_torus_vec(rng, key.config.dimension);
    let e = gaussian_torus(rng, key.config.noise_std);
    let b = dot(&a, &key.key).wrapping_add(m).wrapping_add(e);
    LweCiphertext {
        config: key.config,
        a,
        b,
    }
}

pub fn lwe_encrypt_bool<R: Rng + ?Sized>(
    b: bool,
    key: &LweSecretKey,
    rng: &mut R,
) -> LweCiphertext {
    lwe_encrypt(encode_bool(b), key, rng)
}

pub fn lwe_decrypt(ct: &LweCiphertext, key: &LweSecretKey) -> i32 {
    ct.b.wrapping_sub(dot(&ct.a, &key.key))
}

pub fn lwe_decrypt_bool(ct: &LweCiphertext, key: &LweSecretKey) -> bool {
    decode_bool(lwe_decrypt(ct, key))
}

/// A non-randomized ciphertext with zero noise, e.g. for injecting a public
/// constant into a homomorphic computation.
pub fn trivial(m: i32, config: LweConfig) -> LweCiphertext {
    LweCiphertext {
        config,
        a: vec![0; config.dimension],
        b: m,
    }
}

pub fn add(lhs: &LweCiphertext, rhs: &LweCiphertext) -> LweCiphertext {
    debug_assert_eq!(lhs.config, rhs.config);
    LweCiphertext {
        config: lhs.config,
        a: lhs
            .a
            .iter()
            .zip(rhs.a.iter())
            .map(|(x, y)| x.wrapping_add(*y))
            .collect(),
        b: lhs.b.wrapping_add(rhs.b),
    }
}

pub fn subtract(lhs: &LweCiphertext, rhs: &LweCiphertext) -> LweCiphertext {
    debug_assert_eq!(lhs.config, rhs.config);
    LweCiphertext {
        config: lhs.config,
        a: lhs
            .a
            .iter()
            .zip(rhs.a.iter())
            .map(|(x, y)| x.wrapping_sub(*y))
            .collect(),
        b: lhs.b.wrapping_sub(rhs.b),
    }
}

pub fn scalar_multiply(c: i32, ct: &LweCiphertext) -> LweCiphertext {
    LweCiphertext {
        config: ct.config,
        a: ct.a.iter().map(|x| x.wrapping_mul(c)).collect(),
        b: ct.b.wrapping_mul(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_config() -> LweConfig {
        LweConfig {
            dimension: 64,
            noise_std: 0.0,
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let key = generate_lwe_key(test_config(), &mut rng);
        let ct = lwe_encrypt(encode(-2), &key, &mut rng);
        assert_eq!(decode(lwe_decrypt(&ct, &key)), -2);
    }

    #[test]
    fn homomorphic_add() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let key = generate_lwe_key(test_config(), &mut rng);
        let c1 = lwe_encrypt(encode(-1), &key, &mut rng);
        let c2 = lwe_encrypt(encode(3), &key, &mut rng);
        let sum = add(&c1, &c2);
        assert_eq!(decode(lwe_decrypt(&sum, &key)), 2);
    }

    #[test]
    fn homomorphic_subtract_and_scalar_multiply() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let key = generate_lwe_key(test_config(), &mut rng);
        let c1 = lwe_encrypt(encode(3), &key, &mut rng);
        let c2 = lwe_encrypt(encode(1), &key, &mut rng);
        assert_eq!(decode(lwe_decrypt(&subtract(&c1, &c2), &key)), 2);
        assert_eq!(decode(lwe_decrypt(&scalar_multiply(-1, &c2), &key)), -1);
    }

    #[test]
    fn trivial_decrypts_to_its_message_under_any_key() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let key = generate_lwe_key(test_config(), &mut rng);
        let ct = trivial(encode(1), test_config());
        assert_eq!(decode(lwe_decrypt(&ct, &key)), 1);
    }
}
