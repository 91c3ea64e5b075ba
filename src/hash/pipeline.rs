//! Hash-mapping pipeline: user hash → Fibonacci scatter → Lemire range
//! reduction → home slot, plus the hoisted sub-hash derivation.
//!
//! The user-supplied hash is treated as a black box (a plain `u64` produced
//! by `K: Hash` through some `BuildHasher`); everything here massages that
//! one value into a home slot and a hoisted sub-hash.

use crate::swar::word::Word;

/// Golden-ratio reciprocal constants used to diffuse low-quality hashes
/// before range reduction, one per supported word width.
pub mod fibonacci {
    /// `2^64 / φ`, rounded, used when `W = u64`.
    pub const SCATTER_64: u64 = 0x9E37_79B9_7F4A_7C15;
    /// `2^32 / φ`, rounded, used when `W = u32`.
    pub const SCATTER_32: u32 = 0x9E37_79B9;
}

/// Multiply the raw hash by the width-appropriate Fibonacci constant.
///
/// This is a property of the *word width* `W`, not the lane width `L`, so it
/// is implemented directly on `Word` rather than on `Swar`.
#[inline]
pub fn fibonacci_scatter<W: Word>(raw: W) -> W {
    let k = if W::BITS == 64 {
        W::from_u64(fibonacci::SCATTER_64)
    } else {
        W::from_u64(fibonacci::SCATTER_32 as u64)
    };
    raw.wrapping_mul(k)
}

/// Lemire's range reduction: given a scattered `W`-bit value, reduce to
/// `[0, capacity)` without division.
///
/// Takes the low `W/2` bits of `scattered` as `r`, returns
/// `(capacity · r) >> (W/2)`. Requires `capacity < 2^(W/2)`.
#[inline]
pub fn lemire_reduce<W: Word>(scattered: W, capacity: u64) -> usize {
    let half = W::BITS / 2;
    let r_mask = (1u128 << half) - 1;
    let r = scattered.to_u64() as u128 & r_mask;
    let product = (capacity as u128) * r;
    (product >> half) as usize
}

/// Reduce a raw (already user-hashed) `W`-bit value to a home slot in
/// `[0, capacity)`: Fibonacci scatter, then Lemire reduction.
#[inline]
pub fn home_slot<W: Word>(raw_hash: W, capacity: usize) -> usize {
    let scattered = fibonacci_scatter(raw_hash);
    lemire_reduce(scattered, capacity as u64)
}

/// Derive the `hi_bits`-wide hoisted sub-hash from the *raw* (unscattered)
/// hash via a "top-bits fold": multiply by an all-ones repeating mask and
/// keep the top `hi_bits` bits.
///
/// Decoupled from [`home_slot`] (which operates on the Fibonacci-scattered
/// value) so two keys sharing a home slot are unlikely to share a hoisted
/// hash as well.
#[inline]
pub fn hoisted_hash<W: Word>(raw_hash: W, hi_bits: u32) -> u64 {
    if hi_bits == 0 {
        return 0;
    }
    // All-ones mask of width `W::BITS`, used as the folding multiplier so
    // every input bit has a chance to influence the top `hi_bits` bits of
    // the product.
    let folded = raw_hash.wrapping_mul(!W::ZERO);
    (folded >> (W::BITS - hi_bits)).to_u64()
}
