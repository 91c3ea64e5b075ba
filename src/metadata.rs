//! The Robin Hood metadata engine: the `potential_matches` primitive that
//! drives every search and insertion, plus needle construction.
//!
//! A metadata word is a [`SubLane`] whose lane `i` represents slot `i`: the
//! low sub-lane holds the PSL (`0` means empty, `k > 0` means the occupant's
//! home is `k − 1` slots before this one) and the high sub-lane holds the
//! hoisted sub-hash.

use crate::swar::sublane::SubLane;
use crate::swar::word::Word;

/// A metadata word, alias for readability at call sites in the table front
/// end.
pub type Metadata<W, const L: u32, const L_LO: u32> = SubLane<W, L, L_LO>;

/// Result of [`potential_matches`]: which lanes are worth a deep key
/// comparison, and whether (and where) the search may stop.
pub struct Probe<W: Word, const L: u32, const L_LO: u32> {
    /// Non-zero iff a deadline lane was found in this word. Isolated to a
    /// single set bit at that lane's position (same representation as a
    /// Boolean SWAR).
    pub deadline: SubLane<W, L, L_LO>,
    /// Boolean SWAR: MSB of lane `i` set iff lane `i` is both a full
    /// (PSL, hash) match with the needle and strictly before the deadline.
    pub matches: SubLane<W, L, L_LO>,
}

impl<W: Word, const L: u32, const L_LO: u32> Probe<W, L, L_LO> {
    #[inline]
    pub fn has_deadline(&self) -> bool {
        !self.deadline.raw().is_zero()
    }

    #[inline]
    pub fn deadline_lane(&self) -> Option<u32> {
        self.deadline.raw().lsb_lane_index()
    }
}

/// Construct a needle: a metadata word whose lane `i` has PSL sub-lane
/// `min(p0 + i + 1, M_lo - 1)` and hash sub-lane `h`.
///
/// The PSL is saturated at `M_lo - 1` (the largest value the sub-lane can
/// hold) rather than let the true `p0 + i + 1` overflow into the hash
/// sub-lane: for `L_lo = 3, N = 8` the very first word of every search has
/// `p0 = 0`, so its last lane's unsaturated PSL would be exactly `N = M_lo`,
/// one past what three bits can encode. No real occupant can ever be
/// stored with that PSL anyway (`RobinHoodTable::rh_insert` never writes a
/// PSL larger than `M_lo - 1`), so comparing against the saturated value
/// instead of the true one only costs a handful of needless extra
/// comparisons at that one lane in a table already at its deepest probe
/// depth — it never produces a wrong answer, since every SWAR-level match
/// is still confirmed against the real key before `find`/`insert`/`erase`
/// trust it.
pub fn make_needle<W: Word, const L: u32, const L_LO: u32>(
    p0: u32,
    h: u64,
) -> SubLane<W, L, L_LO> {
    let n = SubLane::<W, L, L_LO>::raw_lanes();
    let max_psl = (1u64 << L_LO) - 1;

    let mut word = SubLane::<W, L, L_LO>::from_raw(W::ZERO);
    let mut i = 0u32;
    while i < n {
        let psl = ((p0 as u64) + (i as u64) + 1).min(max_psl);
        word = word.set_least(i, psl).set_most(i, h);
        i += 1;
    }
    word
}

impl<W: Word, const L: u32, const L_LO: u32> SubLane<W, L, L_LO> {
    #[inline]
    fn raw_lanes() -> u32 {
        crate::swar::core::Swar::<W, L>::lanes()
    }
}

/// Examine one metadata word against a needle constructed for the current
/// starting PSL, per the five-step algorithm:
///
/// 1. `sames = equals(needle, haystack)`.
/// 2. Extract PSL sub-lanes of both.
/// 3. `richer = ¬ greater_equal_msb_off(needle_psl, haystack_psl)` — lanes
///    where the haystack is strictly less rich than the needle.
/// 4. If no lane is richer, the word contains no deadline: return
///    `(matches = sames, deadline = 0)` and the caller continues scanning.
/// 5. Otherwise isolate the first such lane as the deadline and mask
///    `sames` to only the lanes strictly before it.
pub fn potential_matches<W: Word, const L: u32, const L_LO: u32>(
    needle: SubLane<W, L, L_LO>,
    haystack: SubLane<W, L, L_LO>,
) -> Probe<W, L, L_LO> {
    let sames = SubLane::from_raw(needle.raw().equals(haystack.raw()).raw());

    let needle_psl = needle.least();
    let haystack_psl = haystack.least();

    // `richer`: lanes where the needle's PSL is strictly greater than the
    // haystack's, i.e. NOT (haystack_psl >= needle_psl).
    let haystack_ge_needle = haystack_psl.greater_equal_msb_off(needle_psl);
    let richer = crate::swar::core::Swar::from_raw(!haystack_ge_needle.raw() & haystack_ge_needle_domain::<W, L>());

    if richer.is_zero() {
        return Probe {
            deadline: SubLane::from_raw(W::ZERO),
            matches: sames,
        };
    }

    let deadline_bit = richer.isolate_lsb();
    let deadline_mask = SubLane::<W, L, L_LO>::deadline_mask_below(deadline_bit);
    Probe {
        deadline: SubLane::from_raw(deadline_bit.raw()),
        matches: SubLane::from_raw(sames.raw().and(deadline_mask).raw()),
    }
}

/// `greater_equal_msb_off` only ever sets the MSB of each lane; this mask
/// restricts `!haystack_ge_needle` to exactly those MSB positions so stray
/// low bits of the complement don't pollute lane boundaries.
#[inline]
fn haystack_ge_needle_domain<W: Word, const L: u32>() -> W {
    crate::swar::core::Swar::<W, L>::msbs()
}

impl<W: Word, const L: u32, const L_LO: u32> SubLane<W, L, L_LO> {
    /// Given a Boolean SWAR with exactly one lane's MSB set (the deadline
    /// lane), build a mask selecting every lane strictly before it:
    /// `deadline_bit − 1`, restricted to the lanes actually in play.
    fn deadline_mask_below(deadline_bit: crate::swar::core::Swar<W, L>) -> crate::swar::core::Swar<W, L> {
        crate::swar::core::Swar::from_raw(deadline_bit.raw().wrapping_sub(W::ONE))
    }
}
