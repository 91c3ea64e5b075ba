//! Reads a logical SWAR word starting at an arbitrary lane offset from two
//! adjacent, lane-aligned words.
//!
//! The home slot of a key is, in general, not a multiple of `N` (lanes per
//! word), so a metadata scan must be able to start mid-word. Given the two
//! words that straddle the requested start lane, the misaligned reader
//! produces the single logical word whose lane 0 is that start lane:
//!
//! ```text
//! out = (w0 >> (m·L)) | (w1 << ((N − m)·L))
//! ```
//!
//! where `m` is the misalignment in lanes. `m == 0` is special-cased because
//! shifting a `W`-bit integer by `W` bits is undefined behavior for Rust's
//! shift operators, exactly as it would be in C or C++.

use super::core::Swar;
use super::word::Word;

/// Combine two lane-aligned words into the logical word starting `m` lanes
/// into `w0`.
#[inline]
pub fn read_misaligned<W: Word, const L: u32>(w0: Swar<W, L>, w1: Swar<W, L>, m: u32) -> Swar<W, L> {
    if m == 0 {
        return w0;
    }
    let n = Swar::<W, L>::lanes();
    debug_assert!(m < n, "misalignment must be within one word's lane count");
    let low = w0.raw() >> (m * L);
    let high = w1.raw() << ((n - m) * L);
    Swar::from_raw(low | high)
}

/// A cursor over a metadata slice that yields successive logical words
/// starting at a fixed lane misalignment `m`, advancing one base word at a
/// time. Never runs out of data within a valid search because the metadata
/// array carries a Skarupke tail past the logical capacity.
#[derive(Clone, Copy)]
pub struct MisalignedReader<'a, W: Word, const L: u32> {
    words: &'a [Swar<W, L>],
    base: usize,
    m: u32,
}

impl<'a, W: Word, const L: u32> MisalignedReader<'a, W, L> {
    /// `words` is the backing metadata array. `start_word` is the index of
    /// the first word to read from; `m` is the lane misalignment within
    /// that word.
    pub fn new(words: &'a [Swar<W, L>], start_word: usize, m: u32) -> Self {
        Self {
            words,
            base: start_word,
            m,
        }
    }

    /// Read the logical word at the reader's current position. Panics (via
    /// slice indexing) if `base + 1` is out of bounds, which indicates the
    /// caller advanced past the Skarupke tail — a violation of the metadata
    /// sizing invariant, not a recoverable condition.
    #[inline]
    pub fn read(&self) -> Swar<W, L> {
        let w0 = self.words[self.base];
        let w1 = self.words[self.base + 1];
        read_misaligned(w0, w1, self.m)
    }

    /// Advance the reader by one base word (one logical word's worth of
    /// lanes).
    #[inline]
    pub fn advance(&mut self) {
        self.base += 1;
    }

    /// Index of the first lane of the word most recently (or about to be)
    /// returned by [`Self::read`], in absolute slot units.
    #[inline]
    pub fn current_slot(&self) -> usize {
        self.base * (Swar::<W, L>::lanes() as usize) + self.m as usize
    }
}
