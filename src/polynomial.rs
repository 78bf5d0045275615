//! Arithmetic in the ring `R_N = Z[X]/(X^N + 1)` over signed 32-bit
//! coefficients, i.e. coefficient-wise arithmetic modulo `2^32` plus the
//! negacyclic reduction `X^N = -1`.
//!
//! All coefficient operations use `wrapping_*`: overflow here is not a bug,
//! it is the torus wrapping around.

use std::ops::{Add, Sub};

use crate::error::{Error, Result};

/// An element of `R_N`: `N` signed 32-bit coefficients, lowest degree first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    pub coeffs: Vec<i32>,
}

impl Polynomial {
    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    pub fn zero(n: usize) -> Self {
        Polynomial {
            coeffs: vec![0; n],
        }
    }

    pub fn from_coeffs(coeffs: Vec<i32>) -> Self {
        Polynomial { coeffs }
    }

    pub fn from_coeffs_checked(coeffs: Vec<i32>, n: usize) -> Result<Self> {
        if coeffs.len() != n {
            return Err(Error::ShapeMismatch {
                expected: n,
                got: coeffs.len(),
            });
        }
        Ok(Polynomial { coeffs })
    }

    /// The monomial `c * X^i` reduced in `R_N`, for any integer `i`
    /// (negative or `>= N`). Wraparound past a multiple of `N` flips sign,
    /// per the ring relation `X^N = -1`.
    pub fn monomial(c: i32, i: i64, n: usize) -> Self {
        let n_i64 = n as i64;
        let r = i.rem_euclid(n_i64) as usize;
        let k = (i - r as i64) / n_i64;
        let mut coeffs = vec![0i32; n];
        coeffs[r] = if k % 2 == 0 { c } else { c.wrapping_neg() };
        Polynomial { coeffs }
    }

    pub fn constant_multiply(&self, c: i32) -> Self {
        Polynomial {
            coeffs: self.coeffs.iter().map(|x| x.wrapping_mul(c)).collect(),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.degree(), other.degree());
        Polynomial {
            coeffs: self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .map(|(a, b)| a.wrapping_add(*b))
                .collect(),
        }
    }

    pub fn subtract(&self, other: &Self) -> Self {
        debug_assert_eq!(self.degree(), other.degree());
        Polynomial {
            coeffs: self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .map(|(a, b)| a.wrapping_sub(*b))
                .collect(),
        }
    }

    pub fn neg(&self) -> Self {
        Polynomial {
            coeffs: self.coeffs.iter().map(|x| x.wrapping_neg()).collect(),
        }
    }

    /// Schoolbook convolution in `R_N`: pad to a `2N-1` product, then fold
    /// the upper half back with a sign flip (`X^N = -1`).
    pub fn multiply(&self, other: &Self) -> Self {
        let n = self.degree();
        debug_assert_eq!(n, other.degree());
        let mut product = vec![0i32; 2 * n - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if *a == 0 {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                product[i + j] = product[i + j].wrapping_add(a.wrapping_mul(*b));
            }
        }
        let mut result = vec![0i32; n];
        result[..n].copy_from_slice(&product[..n]);
        for k in 0..n - 1 {
            result[k] = result[k].wrapping_sub(product[n + k]);
        }
        Polynomial { coeffs: result }
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::subtract(self, rhs)
    }
}
