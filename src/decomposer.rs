//! Signed base-`2^log_p` digit decomposition of 32-bit torus elements, the
//! gadget decomposition GSW encryption and multiplication are built on.
//!
//! Reconstructing `x` from its digits requires a bias trick: add an offset
//! that makes every digit's "signed" window land entirely inside an
//! unsigned one, extract with a shift and mask, then remove the per-digit
//! bias. Skipping the unsigned cast silently breaks digits for
//! large-magnitude negative `x`.

use crate::polynomial::Polynomial;

#[derive(Debug, Clone, Copy)]
pub struct Decomposer {
    pub log_p: u32,
    pub levels: usize,
    half_p: i64,
    mask: u32,
    offset: u32,
}

impl Decomposer {
    pub fn new(log_p: u32) -> Self {
        debug_assert!(log_p > 0 && 32 % log_p == 0);
        let levels = (32 / log_p) as usize;
        let half_p = 1i64 << (log_p - 1);
        let mask = (1u32 << log_p) - 1;
        let offset = (0..levels).fold(0u32, |acc, i| {
            acc.wrapping_add((half_p as u32).wrapping_mul(1u32 << (i as u32 * log_p)))
        });
        Decomposer {
            log_p,
            levels,
            half_p,
            mask,
            offset,
        }
    }

    /// Decomposes a single torus element into `levels` signed digits in
    /// `[-p/2, p/2)`, least-significant digit first.
    pub fn decompose_scalar(&self, x: i32) -> Vec<i32> {
        let x_offset = (x as u32).wrapping_add(self.offset);
        (0..self.levels)
            .map(|i| {
                let shifted = x_offset.wrapping_shr(i as u32 * self.log_p);
                (shifted & self.mask) as i64 as i32 - self.half_p as i32
            })
            .collect()
    }

    /// Inverse of [`Self::decompose_scalar`].
    pub fn recompose_scalar(&self, digits: &[i32]) -> i32 {
        debug_assert_eq!(digits.len(), self.levels);
        digits.iter().enumerate().fold(0i32, |acc, (i, d)| {
            let p_i = 1i32.wrapping_shl(i as u32 * self.log_p);
            acc.wrapping_add(p_i.wrapping_mul(*d))
        })
    }

    /// Decomposes a polynomial coefficient-wise into `levels` polynomials,
    /// least-significant first.
    pub fn decompose_polynomial(&self, f: &Polynomial) -> Vec<Polynomial> {
        let n = f.degree();
        let mut levels: Vec<Vec<i32>> = vec![Vec::with_capacity(n); self.levels];
        for coeff in &f.coeffs {
            let digits = self.decompose_scalar(*coeff);
            for (level, d) in levels.iter_mut().zip(digits.into_iter()) {
                level.push(d);
            }
        }
        levels.into_iter().map(Polynomial::from_coeffs).collect()
    }

    pub fn recompose_polynomial(&self, levels: &[Polynomial]) -> Polynomial {
        debug_assert_eq!(levels.len(), self.levels);
        let n = levels[0].degree();
        let mut acc = Polynomial::zero(n);
        for (i, level) in levels.iter().enumerate() {
            let p_i = 1i32.wrapping_shl(i as u32 * self.log_p);
            acc = acc.add(&level.constant_multiply(p_i));
        }
        acc
    }
}
