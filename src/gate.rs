//! Boolean gates over bootstrapped LWE ciphertexts. `nand` is the single
//! primitive with a bootstrap call; every other gate is composed from it
//! with no additional cryptographic step.

use crate::lwe::{self, LweCiphertext};
use crate::pbs::{self, BootstrapKey};
use crate::torus::encode;

/// `NAND(a, b) = bootstrap(encode(-3) - a - b, BK, encode(2))`.
///
/// The constant `-3` is chosen so that exactly the `(True, True)` input
/// lands on the opposite side of the bootstrap's step threshold from the
/// other three input combinations; see the worked truth table in the
/// crate's top-level documentation.
pub fn nand(a: &LweCiphertext, b: &LweCiphertext, bootstrap_key: &BootstrapKey) -> LweCiphertext {
    let minus_three = lwe::trivial(encode(-3), a.config);
    let t = lwe::subtract(&lwe::subtract(&minus_three, a), b);
    pbs::bootstrap(&t, bootstrap_key, encode(2))
}

pub fn not(a: &LweCiphertext, bootstrap_key: &BootstrapKey) -> LweCiphertext {
    nand(a, a, bootstrap_key)
}

pub fn and(a: &LweCiphertext, b: &LweCiphertext, bootstrap_key: &BootstrapKey) -> LweCiphertext {
    not(&nand(a, b, bootstrap_key), bootstrap_key)
}

pub fn or(a: &LweCiphertext, b: &LweCiphertext, bootstrap_key: &BootstrapKey) -> LweCiphertext {
    nand(&not(a, bootstrap_key), &not(b, bootstrap_key), bootstrap_key)
}

pub fn xor(a: &LweCiphertext, b: &LweCiphertext, bootstrap_key: &BootstrapKey) -> LweCiphertext {
    let o = or(a, b, bootstrap_key);
    let n = nand(a, b, bootstrap_key);
    and(&o, &n, bootstrap_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gsw::{convert_rlwe_key_to_gsw, GswConfig};
    use crate::lwe::{lwe_decrypt_bool, lwe_encrypt_bool, LweSecretKey};
    use crate::pbs::{generate_bootstrap_key, sample_extract_key};
    use crate::rlwe::{generate_rlwe_key, RlweConfig};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Fixture {
        lwe_key: LweSecretKey,
        bootstrap_key: BootstrapKey,
    }

    fn fixture(seed: u64) -> Fixture {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let rlwe_config = RlweConfig {
            degree: 64,
            noise_std: 0.0,
        };
        let gsw_config = GswConfig::new(rlwe_config, 8).unwrap();
        let rlwe_key = generate_rlwe_key(rlwe_config, &mut rng);
        let lwe_key = sample_extract_key(&rlwe_key);
        let gsw_key = convert_rlwe_key_to_gsw(&rlwe_key, gsw_config);
        let bootstrap_key = generate_bootstrap_key(&lwe_key, &gsw_key, &mut rng);
        Fixture {
            lwe_key,
            bootstrap_key,
        }
    }

    fn enc(b: bool, f: &Fixture, rng: &mut ChaCha8Rng) -> LweCiphertext {
        lwe_encrypt_bool(b, &f.lwe_key, rng)
    }

    #[test]
    fn nand_truth_table() {
        let f = fixture(40);
        let mut rng = ChaCha8Rng::seed_from_u64(41);
        let cases = [(false, false, true), (false, true, true), (true, false, true), (true, true, false)];
        for (a, b, expected) in cases {
            let ca = enc(a, &f, &mut rng);
            let cb = enc(b, &f, &mut rng);
            let out = nand(&ca, &cb, &f.bootstrap_key);
            assert_eq!(lwe_decrypt_bool(&out, &f.lwe_key), expected, "nand({a}, {b})");
        }
    }

    #[test]
    fn derived_gate_truth_tables() {
        let f = fixture(42);
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        for a in [false, true] {
            let ca = enc(a, &f, &mut rng);
            let out = not(&ca, &f.bootstrap_key);
            assert_eq!(lwe_decrypt_bool(&out, &f.lwe_key), !a, "not({a})");
            for b in [false, true] {
                let cb = enc(b, &f, &mut rng);
                let and_out = and(&ca, &cb, &f.bootstrap_key);
                assert_eq!(lwe_decrypt_bool(&and_out, &f.lwe_key), a && b, "and({a}, {b})");
                let or_out = or(&ca, &cb, &f.bootstrap_key);
                assert_eq!(lwe_decrypt_bool(&or_out, &f.lwe_key), a || b, "or({a}, {b})");
                let xor_out = xor(&ca, &cb, &f.bootstrap_key);
                assert_eq!(lwe_decrypt_bool(&xor_out, &f.lwe_key), a != b, "xor({a}, {b})");
            }
        }
    }
}
