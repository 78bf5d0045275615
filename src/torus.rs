//! Encoding of small signed integers onto the discretized torus `Z/2^32`,
//! represented here as `i32` with wrapping arithmetic.
//!
//! `encode`/`decode` place a message `m in {-4,...,3}` near a lattice point
//! spaced `2^29` apart so that noise added during encryption (much smaller
//! than `2^29`) can be rounded away at decryption time.

/// `m * 2^29`, wrapping.
pub fn encode(m: i32) -> i32 {
    m.wrapping_shl(29)
}

/// Inverse of [`encode`], tolerant of noise smaller than `2^28`.
pub fn decode(x: i32) -> i32 {
    let scaled = ((x as i64) + (1 << 28)) >> 29;
    let reduced = (scaled + 4).rem_euclid(8);
    (reduced - 4) as i32
}

pub fn encode_bool(b: bool) -> i32 {
    encode(if b { 2 } else { 0 })
}

pub fn decode_bool(x: i32) -> bool {
    decode(x) == 2
}
