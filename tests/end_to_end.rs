//! Black-box scenarios against the public API, using small test-only
//! parameters so the suite runs quickly. Canonical-parameter coverage is
//! exercised separately, at a reduced trial count.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tiny_tfhe::client::{ClientKey, Parameters};
use tiny_tfhe::polynomial::Polynomial;

fn small_client(seed: u64) -> (ClientKey, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let client = ClientKey::generate(Parameters::small(64), &mut rng);
    (client, rng)
}

#[test]
fn e1_polynomial_multiply_worked_example() {
    let p = Polynomial::from_coeffs(vec![1, 2, 3, 4]);
    let q = Polynomial::from_coeffs(vec![0, 1, 0, 2]);
    assert_eq!(p.multiply(&q).coeffs, vec![-8, -5, -6, 5]);
}

#[test]
fn e6_nand_false_true_is_true() {
    let (client, mut rng) = small_client(100);
    let a = client.encrypt(false, &mut rng);
    let b = client.encrypt(true, &mut rng);
    let out = a.nand_gate(&b, client.bootstrap_key());
    assert!(client.decrypt(&out));
}

#[test]
fn nand_truth_table_holds_for_every_input() {
    let (client, mut rng) = small_client(101);
    let cases = [
        (false, false, true),
        (false, true, true),
        (true, false, true),
        (true, true, false),
    ];
    for (a, b, expected) in cases {
        let ca = client.encrypt(a, &mut rng);
        let cb = client.encrypt(b, &mut rng);
        let out = ca.nand_gate(&cb, client.bootstrap_key());
        assert_eq!(client.decrypt(&out), expected, "nand({a}, {b})");
    }
}

#[test]
fn derived_gates_match_boolean_definitions() {
    let (client, mut rng) = small_client(102);
    for a in [false, true] {
        let ca = client.encrypt(a, &mut rng);
        assert_eq!(client.decrypt(&ca.not_gate(client.bootstrap_key())), !a);
        for b in [false, true] {
            let cb = client.encrypt(b, &mut rng);
            assert_eq!(
                client.decrypt(&ca.and_gate(&cb, client.bootstrap_key())),
                a && b
            );
            assert_eq!(
                client.decrypt(&ca.or_gate(&cb, client.bootstrap_key())),
                a || b
            );
            assert_eq!(
                client.decrypt(&ca.xor_gate(&cb, client.bootstrap_key())),
                a != b
            );
        }
    }
}

/// A composed circuit: (a AND b) XOR (NOT c), evaluated homomorphically and
/// checked against the same expression evaluated on plaintext booleans.
#[test]
fn composed_circuit_matches_plaintext_evaluation() {
    let (client, mut rng) = small_client(103);
    for a in [false, true] {
        for b in [false, true] {
            for c in [false, true] {
                let ca = client.encrypt(a, &mut rng);
                let cb = client.encrypt(b, &mut rng);
                let cc = client.encrypt(c, &mut rng);
                let bk = client.bootstrap_key();
                let lhs = ca.and_gate(&cb, bk);
                let rhs = cc.not_gate(bk);
                let out = lhs.xor_gate(&rhs, bk);
                let expected = (a && b) != !c;
                assert_eq!(client.decrypt(&out), expected);
            }
        }
    }
}

#[test]
fn canonical_parameters_nand_truth_table() {
    let mut rng = ChaCha8Rng::seed_from_u64(104);
    let client = ClientKey::generate(Parameters::canonical(), &mut rng);
    let a = client.encrypt(true, &mut rng);
    let b = client.encrypt(true, &mut rng);
    let out = a.nand_gate(&b, client.bootstrap_key());
    assert!(!client.decrypt(&out));
}
