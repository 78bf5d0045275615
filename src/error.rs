//! Errors raised by fallible constructors and cross-type conversions.
//!
//! Noise-induced decryption corruption is not part of this taxonomy: it is
//! prevented by parameter choice and by bootstrapping, not reported as an
//! error. See the crate-level docs for the noise model.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("shape mismatch: expected length {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("config mismatch: {0}")]
    ConfigMismatch(&'static str),

    #[error("invalid log_p = {0}: must divide 32 and be greater than 0")]
    InvalidLogP(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
