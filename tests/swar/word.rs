// Tests for src/swar/word.rs — the Word trait over u32/u64.

use robin_swar::swar::Word;

#[test]
fn bits_width() {
    assert_eq!(u32::BITS, 32);
    assert_eq!(u64::BITS, 64);
}

#[test]
fn zero_one_roundtrip() {
    assert_eq!(<u32 as Word>::ZERO, 0u32);
    assert_eq!(<u32 as Word>::ONE, 1u32);
    assert_eq!(<u64 as Word>::ZERO, 0u64);
    assert_eq!(<u64 as Word>::ONE, 1u64);
}

#[test]
fn wrapping_add_wraps() {
    assert_eq!(Word::wrapping_add(u32::MAX, 1u32), 0u32);
    assert_eq!(Word::wrapping_add(u64::MAX, 1u64), 0u64);
}

#[test]
fn wrapping_sub_wraps() {
    assert_eq!(Word::wrapping_sub(0u32, 1u32), u32::MAX);
}

#[test]
fn wrapping_neg_of_one_is_all_ones() {
    assert_eq!(Word::wrapping_neg(1u32), u32::MAX);
    assert_eq!(Word::wrapping_neg(1u64), u64::MAX);
}

#[test]
fn trailing_zeros_of_zero_is_bit_width() {
    assert_eq!(Word::trailing_zeros(0u32), 32);
    assert_eq!(Word::trailing_zeros(0u64), 64);
}

#[test]
fn count_ones_matches_std() {
    assert_eq!(Word::count_ones(0b1011_0010u32), 0b1011_0010u32.count_ones());
}

#[test]
fn from_u64_truncates_to_width() {
    let v: u32 = Word::from_u64(0x1_0000_0001);
    assert_eq!(v, 1);
}

#[test]
fn to_u64_zero_extends() {
    let v: u64 = Word::to_u64(0xFFFF_FFFFu32);
    assert_eq!(v, 0xFFFF_FFFF);
}

#[test]
fn is_zero() {
    assert!(Word::is_zero(0u32));
    assert!(!Word::is_zero(1u32));
}
