// Tests for src/swar/core.rs — lane-partitioned word arithmetic.

use robin_swar::swar::Swar;

type S8 = Swar<u64, 8>;
type S4 = Swar<u32, 4>;

#[test]
fn lanes_count() {
    assert_eq!(S8::lanes(), 8);
    assert_eq!(S4::lanes(), 8);
}

#[test]
fn broadcast_replicates_into_every_lane() {
    let w = S8::broadcast(0x2A);
    for i in 0..8 {
        assert_eq!(w.lane_at(i), 0x2A);
    }
}

#[test]
fn broadcast_masks_to_lane_width() {
    // L = 8, so only the low 8 bits of the seed should survive.
    let w = S8::broadcast(0x1_2A);
    assert_eq!(w.lane_at(0), 0x2A);
}

#[test]
fn msbs_sets_only_top_bit_of_each_lane() {
    let m = S8::msbs();
    assert_eq!(m, 0x8080_8080_8080_8080u64);
}

#[test]
fn set_lane_then_clear_lane_round_trips() {
    let w = S8::zero().set_lane(3, 0xFF);
    assert_eq!(w.lane_at(3), 0xFF);
    let cleared = w.clear_lane(3);
    assert_eq!(cleared.lane_at(3), 0);
}

#[test]
fn set_lane_does_not_disturb_neighbors() {
    let w = S8::zero().set_lane(2, 0x11).set_lane(3, 0x22);
    assert_eq!(w.lane_at(2), 0x11);
    assert_eq!(w.lane_at(3), 0x22);
    assert_eq!(w.lane_at(1), 0);
    assert_eq!(w.lane_at(4), 0);
}

#[test]
fn equals_flags_matching_lanes_only() {
    let a = S8::broadcast(5).set_lane(1, 9);
    let b = S8::broadcast(5).set_lane(1, 7);
    let eq = a.equals(b);
    // lane 1 differs, every other lane matches.
    assert_eq!(eq.lane_at(1), 0);
    for i in [0, 2, 3, 4, 5, 6, 7] {
        assert_ne!(eq.lane_at(i), 0);
    }
}

#[test]
fn equals_of_identical_words_is_all_lanes() {
    let a = S8::broadcast(0x2A);
    let eq = a.equals(a);
    for i in 0..8 {
        assert_ne!(eq.lane_at(i), 0, "lane {i} should compare equal");
    }
}

#[test]
fn greater_equal_msb_off_basic() {
    // Lane values must leave the MSB clear for this op's precondition.
    let lhs = S8::zero().set_lane(0, 5).set_lane(1, 2);
    let rhs = S8::zero().set_lane(0, 3).set_lane(1, 2);
    let ge = lhs.greater_equal_msb_off(rhs);
    assert_ne!(ge.lane_at(0), 0, "5 >= 3");
    assert_ne!(ge.lane_at(1), 0, "2 >= 2");
}

#[test]
fn greater_equal_msb_off_false_when_strictly_less() {
    let lhs = S8::zero().set_lane(0, 1);
    let rhs = S8::zero().set_lane(0, 3);
    let ge = lhs.greater_equal_msb_off(rhs);
    assert_eq!(ge.lane_at(0), 0, "1 >= 3 is false");
}

#[test]
fn isolate_lsb_keeps_only_lowest_set_bit() {
    let w = S8::from_raw(0b0110_1000u64);
    assert_eq!(w.isolate_lsb().raw(), 0b0000_1000u64);
}

#[test]
fn clear_lsb_removes_only_lowest_set_bit() {
    let w = S8::from_raw(0b0110_1000u64);
    assert_eq!(w.clear_lsb().raw(), 0b0110_0000u64);
}

#[test]
fn lsb_lane_index_of_zero_is_none() {
    assert_eq!(S8::zero().lsb_lane_index(), None);
}

#[test]
fn lsb_lane_index_finds_first_set_lane() {
    let w = S8::zero().set_lane(3, 0x80);
    assert_eq!(w.lsb_lane_index(), Some(3));
}

#[test]
fn shift_lanes_by_zero_is_identity() {
    let w = S8::broadcast(7);
    assert_eq!(w.shift_lanes(0), w);
}

#[test]
fn shift_lanes_moves_lane_values_up() {
    let w = S8::zero().set_lane(0, 0x11);
    let shifted = w.shift_lanes(2);
    assert_eq!(shifted.lane_at(2), 0x11);
    assert_eq!(shifted.lane_at(0), 0);
}

#[test]
fn shift_lanes_by_full_width_is_zero() {
    let w = S8::broadcast(0xFF);
    assert_eq!(w.shift_lanes(S8::lanes()).raw(), 0);
    assert_eq!(w.shift_lanes(S8::lanes() + 3).raw(), 0);
}
