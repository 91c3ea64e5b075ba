// Tests for src/swar/sublane.rs — PSL/hash sub-laning within a Swar lane.

use robin_swar::swar::{SubLane, Swar};

type Sub64 = SubLane<u64, 8, 3>;

#[test]
fn hi_bits_is_l_minus_l_lo() {
    assert_eq!(Sub64::hi_bits(), 5);
}

#[test]
fn least_mask_covers_low_l_lo_bits_per_lane() {
    let mask = Sub64::least_mask();
    assert_eq!(mask.lane_at(0), 0b0000_0111);
}

#[test]
fn most_mask_is_complement_of_least_mask() {
    let least = Sub64::least_mask().raw();
    let most = Sub64::most_mask().raw();
    assert_eq!(least | most, u64::MAX);
    assert_eq!(least & most, 0);
}

#[test]
fn set_least_then_read_back() {
    let s = Sub64::from_raw(0).set_least(2, 5);
    assert_eq!(s.least_at(2), 5);
    assert_eq!(s.most_at(2), 0);
}

#[test]
fn set_most_then_read_back() {
    let s = Sub64::from_raw(0).set_most(4, 17);
    assert_eq!(s.most_at(4), 17);
    assert_eq!(s.least_at(4), 0);
}

#[test]
fn set_least_does_not_disturb_most_sub_lane() {
    let s = Sub64::from_raw(0).set_most(1, 9).set_least(1, 3);
    assert_eq!(s.least_at(1), 3);
    assert_eq!(s.most_at(1), 9);
}

#[test]
fn least_and_most_partition_the_lane() {
    let s = Sub64::from_raw(0).set_least(0, 7).set_most(0, 31);
    let combined = s.raw().lane_at(0);
    assert_eq!(combined, 7 | (31 << 3));
}

#[test]
fn set_least_ignores_overflow_bits() {
    // L_LO = 3, so values above 7 must be masked down silently.
    let s = Sub64::from_raw(0).set_least(0, 0b1_1010);
    assert_eq!(s.least_at(0), 0b010);
}

#[test]
fn sublane_over_u32_word() {
    type Sub32 = SubLane<u32, 4, 2>;
    let s = Sub32::from_raw(0).set_least(1, 3).set_most(1, 1);
    assert_eq!(s.least_at(1), 3);
    assert_eq!(s.most_at(1), 1);
    let _ = Swar::<u32, 4>::lanes();
}
