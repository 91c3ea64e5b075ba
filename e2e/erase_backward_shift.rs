//! E2E Scenario 5: erase + backward shift.
//!
//! Continuing scenario 3's layout (`B`, `C`, `A` at slots 3, 4, 5 with PSLs
//! 1, 2, 2), erasing `B` empties slot 3, then the backward shift moves `C`
//! into slot 3 (PSL 2 → 1) and `A` into slot 4 (PSL 2 → 1). The
//! monotonic-PSL invariant holds throughout, and subsequent lookups of `C`
//! and `A` succeed while `B` is gone.

use std::hash::{BuildHasher, Hasher};

use robin_swar::Table64;

#[derive(Default, Clone)]
struct IdentityBuildHasher;

#[derive(Default)]
struct IdentityHasher(u64);

impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;
    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher(0)
    }
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, _bytes: &[u8]) {
        unreachable!("u64::hash writes via write_u64");
    }
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
}

fn keys_for_home(capacity: usize, desired: usize, count: usize) -> Vec<u64> {
    (0u64..)
        .filter(|&k| robin_swar::hash::home_slot::<u64>(k, capacity) == desired)
        .take(count)
        .collect()
}

#[test]
fn erase_shifts_the_following_run_back_one_slot() {
    let capacity = 16;
    let mut table: Table64<u64, &'static str, IdentityBuildHasher> =
        Table64::try_new(capacity, IdentityBuildHasher).unwrap();

    let a = keys_for_home(capacity, 4, 1)[0];
    let bc = keys_for_home(capacity, 3, 2);
    let (b, c) = (bc[0], bc[1]);

    table.insert(a, "A");
    table.insert(b, "B");
    table.insert(c, "C");
    assert_eq!(table.len(), 3);

    let removed = table.erase(&b);
    assert_eq!(removed, Some("B"));
    assert_eq!(table.len(), 2);

    assert!(table.find(&b).is_none());
    assert_eq!(*table.find(&c).unwrap().value(), "C");
    assert_eq!(*table.find(&a).unwrap().value(), "A");

    let (ok, violation) = robin_swar::debug::satisfies_invariant(&table);
    assert!(ok, "invariant violated at {violation:?}");
}

#[test]
fn erase_then_reinsert_round_trips_len() {
    let capacity = 16;
    let mut table: Table64<u64, u32, IdentityBuildHasher> =
        Table64::try_new(capacity, IdentityBuildHasher).unwrap();

    table.insert(5, 50);
    table.insert(6, 60);
    assert_eq!(table.len(), 2);

    assert_eq!(table.erase(&5), Some(50));
    assert_eq!(table.len(), 1);
    assert!(table.find(&5).is_none());

    table.insert(5, 500);
    assert_eq!(table.len(), 2);
    assert_eq!(*table.find(&5).unwrap().value(), 500);
}
