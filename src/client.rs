//! Client-facing convenience layer: a parameter bundle, a key that can
//! encrypt and decrypt, and a boolean ciphertext wrapper with gate methods.
//! Built entirely on [`crate::gate`] and [`crate::pbs`] -- it introduces no
//! new cryptographic primitive, only ergonomics.

use rand::Rng;

use crate::error::Result;
use crate::gate;
use crate::gsw::{self, GswConfig};
use crate::lwe::{self, LweConfig, LweSecretKey};
use crate::pbs::{self, BootstrapKey};
use crate::rlwe::{self, RlweConfig};

/// Bundles the three configs key generation needs so call sites thread a
/// single value through instead of three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub lwe: LweConfig,
    pub rlwe: RlweConfig,
    pub gsw: GswConfig,
}

impl Parameters {
    /// `N = n = 1024`, `noise_std = 2^-24`, `log_p = 8` -- the canonical
    /// parameter set.
    pub fn canonical() -> Self {
        Self::with_degree(1024, 2f64.powi(-24), 8).expect("canonical log_p is valid")
    }

    /// A smaller parameter set for fast tests; `log_p` still defaults to 8.
    pub fn small(degree: usize) -> Self {
        Self::with_degree(degree, 0.0, 8).expect("log_p = 8 is always valid")
    }

    pub fn with_degree(degree: usize, noise_std: f64, log_p: u32) -> Result<Self> {
        let lwe = LweConfig {
            dimension: degree,
            noise_std,
        };
        let rlwe = RlweConfig {
            degree,
            noise_std,
        };
        let gsw = GswConfig::new(rlwe, log_p)?;
        Ok(Parameters { lwe, rlwe, gsw })
    }
}

/// Holds the secret LWE key used to encrypt/decrypt and the bootstrap key
/// needed to evaluate gates. Keys are immutable once generated.
#[derive(Debug, Clone)]
pub struct ClientKey {
    pub parameters: Parameters,
    secret_key: LweSecretKey,
    bootstrap_key: BootstrapKey,
}

impl ClientKey {
    pub fn generate<R: Rng + ?Sized>(parameters: Parameters, rng: &mut R) -> Self {
        log::debug!(
            "generating client key: dimension={}, degree={}, log_p={}",
            parameters.lwe.dimension,
            parameters.rlwe.degree,
            parameters.gsw.log_p
        );
        let rlwe_key = rlwe::generate_rlwe_key(parameters.rlwe, rng);
        let secret_key = pbs::sample_extract_key(&rlwe_key);
        let gsw_key = gsw::convert_rlwe_key_to_gsw(&rlwe_key, parameters.gsw);
        let bootstrap_key = pbs::generate_bootstrap_key(&secret_key, &gsw_key, rng);
        ClientKey {
            parameters,
            secret_key,
            bootstrap_key,
        }
    }

    pub fn bootstrap_key(&self) -> &BootstrapKey {
        &self.bootstrap_key
    }

    pub fn encrypt<R: Rng + ?Sized>(&self, message: bool, rng: &mut R) -> FheBool {
        FheBool {
            ct: lwe::lwe_encrypt_bool(message, &self.secret_key, rng),
        }
    }

    pub fn decrypt(&self, ct: &FheBool) -> bool {
        lwe::lwe_decrypt_bool(&ct.ct, &self.secret_key)
    }
}

/// An encrypted boolean. Every gate method takes the `BootstrapKey` the
/// ciphertext was produced under explicitly, rather than through a hidden
/// global "current key": this crate has no thread-local server key.
#[derive(Debug, Clone)]
pub struct FheBool {
    ct: lwe::LweCiphertext,
}

impl FheBool {
    pub fn and_gate(&self, other: &FheBool, bootstrap_key: &BootstrapKey) -> FheBool {
        FheBool {
            ct: gate::and(&self.ct, &other.ct, bootstrap_key),
        }
    }

    pub fn or_gate(&self, other: &FheBool, bootstrap_key: &BootstrapKey) -> FheBool {
        FheBool {
            ct: gate::or(&self.ct, &other.ct, bootstrap_key),
        }
    }

    pub fn xor_gate(&self, other: &FheBool, bootstrap_key: &BootstrapKey) -> FheBool {
        FheBool {
            ct: gate::xor(&self.ct, &other.ct, bootstrap_key),
        }
    }

    pub fn nand_gate(&self, other: &FheBool, bootstrap_key: &BootstrapKey) -> FheBool {
        FheBool {
            ct: gate::nand(&self.ct, &other.ct, bootstrap_key),
        }
    }

    pub fn not_gate(&self, bootstrap_key: &BootstrapKey) -> FheBool {
        FheBool {
            ct: gate::not(&self.ct, bootstrap_key),
        }
    }
}
