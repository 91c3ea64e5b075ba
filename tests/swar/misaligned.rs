// Tests for src/swar/misaligned.rs — cross-word reads at a lane offset.

use robin_swar::swar::{read_misaligned, MisalignedReader, Swar};

type S8 = Swar<u64, 8>;

#[test]
fn zero_misalignment_returns_first_word_unchanged() {
    let w0 = S8::broadcast(0x11);
    let w1 = S8::broadcast(0x22);
    let out = read_misaligned(w0, w1, 0);
    assert_eq!(out, w0);
}

#[test]
fn misaligned_read_stitches_lanes_from_both_words() {
    // Lane i of w0 holds i, lane i of w1 holds 10 + i.
    let mut w0 = S8::zero();
    let mut w1 = S8::zero();
    for i in 0..8 {
        w0 = w0.set_lane(i, i as u64);
        w1 = w1.set_lane(i, 10 + i as u64);
    }

    let out = read_misaligned(w0, w1, 3);
    // Logical lane 0 is w0's lane 3, logical lane 4 is w0's lane 7,
    // logical lane 5 is w1's lane 0, logical lane 7 is w1's lane 2.
    assert_eq!(out.lane_at(0), 3);
    assert_eq!(out.lane_at(4), 7);
    assert_eq!(out.lane_at(5), 10);
    assert_eq!(out.lane_at(7), 12);
}

#[test]
fn reader_advances_one_base_word_at_a_time() {
    let words = vec![S8::broadcast(1), S8::broadcast(2), S8::broadcast(3)];
    let mut reader = MisalignedReader::new(&words, 0, 2);

    let first = reader.read();
    assert_eq!(first.lane_at(0), 1);
    assert_eq!(first.lane_at(6), 2);

    reader.advance();
    let second = reader.read();
    assert_eq!(second.lane_at(0), 2);
    assert_eq!(second.lane_at(6), 3);
}

#[test]
fn current_slot_accounts_for_base_and_misalignment() {
    let words = vec![S8::zero(), S8::zero(), S8::zero()];
    let reader = MisalignedReader::new(&words, 1, 5);
    assert_eq!(reader.current_slot(), 1 * 8 + 5);
}
