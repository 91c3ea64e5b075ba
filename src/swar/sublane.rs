//! Sub-laned SWAR: each `L`-bit lane is split into a low `L_LO`-bit "least"
//! sub-lane (carrying the PSL) and a high `L_HI`-bit "most" sub-lane
//! (carrying the hoisted hash), where `L = L_LO + L_HI`.

use super::core::Swar;
use super::word::Word;

/// A [`Swar<W, L>`] whose lanes are each split into a least sub-lane of
/// `L_LO` bits and a most sub-lane of `L - L_LO` bits.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SubLane<W: Word, const L: u32, const L_LO: u32>(pub Swar<W, L>);

impl<W: Word, const L: u32, const L_LO: u32> SubLane<W, L, L_LO> {
    /// Compile-time check that the low sub-lane fits inside the lane.
    pub const ASSERT_SPLIT_FITS: () = assert!(
        L_LO > 0 && L_LO < L,
        "L_LO must be strictly between 0 and the lane width L"
    );

    /// Bit width of the high ("most") sub-lane.
    #[inline]
    pub fn hi_bits() -> u32 {
        let () = Self::ASSERT_SPLIT_FITS;
        L - L_LO
    }

    /// Word with every lane's low `L_LO` bits set, high bits clear.
    pub fn least_mask() -> Swar<W, L> {
        Swar::broadcast(W::from_u64((1u64 << L_LO) - 1))
    }

    /// Word with every lane's high sub-lane bits set, low bits clear.
    /// Since `W mod L == 0` there is no slack beyond the lanes, so this is
    /// exactly the complement of [`Self::least_mask`].
    pub fn most_mask() -> Swar<W, L> {
        Swar::from_raw(!Self::least_mask().raw())
    }

    #[inline]
    pub fn from_raw(v: W) -> Self {
        SubLane(Swar::from_raw(v))
    }

    #[inline]
    pub fn raw(self) -> Swar<W, L> {
        self.0
    }

    /// Mask out the high sub-lane of every lane.
    #[inline]
    pub fn least(self) -> Swar<W, L> {
        self.0.and(Self::least_mask())
    }

    /// Mask out the low sub-lane of every lane.
    #[inline]
    pub fn most(self) -> Swar<W, L> {
        self.0.and(Self::most_mask())
    }

    /// Integer value of the low sub-lane at lane `i`.
    #[inline]
    pub fn least_at(self, i: u32) -> u64 {
        (self.0.lane_at(i) & W::from_u64((1u64 << L_LO) - 1)).to_u64()
    }

    /// Integer value of the high sub-lane at lane `i`.
    #[inline]
    pub fn most_at(self, i: u32) -> u64 {
        (self.0.lane_at(i) >> L_LO).to_u64()
    }

    /// Return a copy with lane `i`'s low sub-lane replaced by `v`.
    /// `v` must fit in `L_LO` bits.
    pub fn set_least(self, i: u32, v: u64) -> Self {
        let lo_mask = (1u64 << L_LO) - 1;
        let lane_mask = W::from_u64(lo_mask) << (i * L);
        let cleared = self.0.raw() & !lane_mask;
        let inserted = cleared | (W::from_u64(v & lo_mask) << (i * L));
        SubLane(Swar::from_raw(inserted))
    }

    /// Return a copy with lane `i`'s high sub-lane replaced by `v`.
    /// `v` must fit in `Self::hi_bits()` bits.
    pub fn set_most(self, i: u32, v: u64) -> Self {
        let hi_bits = L - L_LO;
        let hi_mask = ((1u64 << hi_bits) - 1) << L_LO;
        let lane_mask = W::from_u64(hi_mask) << (i * L);
        let cleared = self.0.raw() & !lane_mask;
        let shifted = (v & ((1u64 << hi_bits) - 1)) << L_LO;
        let inserted = cleared | (W::from_u64(shifted) << (i * L));
        SubLane(Swar::from_raw(inserted))
    }
}
