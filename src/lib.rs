//! A small, from-scratch implementation of TFHE-style gate bootstrapping:
//! LWE and RLWE ciphertexts, a GSW ciphertext scheme for homomorphic
//! multiplication, blind rotation, sample extraction, and a bootstrapped
//! NAND gate (with AND/OR/XOR/NOT composed from it).
//!
//! The layering, leaf-first:
//!
//! ```text
//! torus -> polynomial -> lwe -\
//!                        rlwe -> decomposer -> gsw -> pbs -> gate -> client
//! ```
//!
//! Every ciphertext type is a plain value; homomorphic operations return
//! fresh ciphertexts rather than mutating their inputs. All coefficient
//! arithmetic wraps modulo `2^32` (the discretized torus); this is not
//! incidental, overflow *is* the group operation.
//!
//! This crate favors clarity over performance and makes no attempt at
//! constant-time execution, side-channel resistance, or parameter
//! selection for cryptographic safety margins -- see `Parameters::small`
//! for a parameter set meant only to make tests fast.

pub mod client;
pub mod decomposer;
pub mod error;
pub mod gate;
pub mod gsw;
pub mod lwe;
pub mod pbs;
pub mod polynomial;
pub mod random;
pub mod rlwe;
pub mod stats;
pub mod torus;

pub use client::{ClientKey, FheBool, Parameters};
pub use error::{Error, Result};
