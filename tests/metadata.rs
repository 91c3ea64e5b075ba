// Tests for src/metadata.rs — needle construction and potential_matches.

use robin_swar::metadata::{make_needle, potential_matches};
use robin_swar::swar::SubLane;

type Meta = SubLane<u64, 8, 3>;

#[test]
fn needle_has_ascending_psl_and_fixed_hash() {
    let needle: Meta = make_needle(0, 0b10101);
    // L_LO = 3 encodes PSL up to 7, so lane 7's unsaturated value of 8
    // saturates down to the encodable maximum.
    for lane in 0..7u32 {
        assert_eq!(needle.least_at(lane), (lane + 1) as u64);
        assert_eq!(needle.most_at(lane), 0b10101);
    }
    assert_eq!(needle.least_at(7), 7);
    assert_eq!(needle.most_at(7), 0b10101);
}

#[test]
fn needle_honors_nonzero_p0() {
    let needle: Meta = make_needle(2, 7);
    assert_eq!(needle.least_at(0), 3);
    assert_eq!(needle.least_at(1), 4);
}

#[test]
fn potential_matches_finds_matching_lane_with_no_deadline() {
    // Haystack has one occupied lane whose (psl, hash) equals the needle's
    // lane-3 entry, and everything after it is empty (psl 0) — an empty
    // lane always counts as "richer" in the search, so an empty trailing
    // lane becomes the deadline here once scanned.
    let h = 5u64;
    let needle: Meta = make_needle(0, h);
    let haystack = Meta::from_raw(0).set_least(3, 4).set_most(3, h);

    let probe = potential_matches(needle, haystack);
    assert!(probe.has_deadline(), "empty lanes are richer than any needle");
    // Lane 0 is empty (psl 0), which is immediately richer than needle psl 1.
    assert_eq!(probe.deadline_lane(), Some(0));
    assert!(probe.matches.raw().is_zero(), "no lane before the deadline matches");
}

#[test]
fn potential_matches_reports_match_before_deadline() {
    let h = 9u64;
    let needle: Meta = make_needle(0, h);
    // Lane 0 matches the needle's lane-0 entry (psl 1, hash h); lane 1 is
    // empty and becomes the deadline.
    let haystack = Meta::from_raw(0).set_least(0, 1).set_most(0, h);

    let probe = potential_matches(needle, haystack);
    assert!(probe.has_deadline());
    assert_eq!(probe.deadline_lane(), Some(1));
    assert_ne!(probe.matches.raw().lane_at(0), 0, "lane 0 should be reported as a match");
}

#[test]
fn potential_matches_no_deadline_when_haystack_all_richer_occupied() {
    // Every lane occupied with a PSL higher than the needle would ever
    // reach at that lane, and no hash collisions — no deadline in this
    // word, the caller must keep scanning forward.
    let h = 1u64;
    let needle: Meta = make_needle(0, h);
    let mut haystack = Meta::from_raw(0);
    for lane in 0..8u32 {
        haystack = haystack.set_least(lane, 7).set_most(lane, h + 1);
    }

    let probe = potential_matches(needle, haystack);
    assert!(!probe.has_deadline());
    assert!(probe.matches.raw().is_zero());
}
