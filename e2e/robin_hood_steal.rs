//! E2E Scenario 3: Robin Hood steal.
//!
//! Insert `A` with home 4 (lands at slot 4, PSL 1), then `B` with home 3
//! (lands at slot 3, PSL 1), then `C` with home 3 as well — it wants slot 3
//! but `B` already holds it with an equal PSL, so `C` probes on to slot 4.
//! There its own PSL (2) exceeds `A`'s stored PSL (1), so `C` evicts `A`,
//! which is carried forward and lands in the first empty slot, 5, with PSL
//! 2. Final layout: slots 3, 4, 5 hold `B`, `C`, `A` with PSLs 1, 2, 2.

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

/// `count` distinct raw hash values (used directly as `u64` keys, since
/// [`IdentityHasher`] passes a key's value straight through) whose home slot
/// under the table's Fibonacci/Lemire pipeline is exactly `desired`.
fn keys_for_home(capacity: usize, desired: usize, count: usize) -> Vec<u64> {
    (0u64..)
        .filter(|&k| robin_swar::hash::home_slot::<u64>(k, capacity) == desired)
        .take(count)
        .collect()
}

/// Shared setup for scenarios 3 and 5: insert `A` (home 4), `B` (home 3),
/// `C` (home 3) in that order and return the table plus the three keys.
fn build_steal_scenario() -> (Table64<u64, &'static str, IdentityBuildHasher>, u64, u64, u64) {
    let capacity = 16;
    let mut table = Table64::try_new(capacity, IdentityBuildHasher).unwrap();

    let a = keys_for_home(capacity, 4, 1)[0];
    let bc = keys_for_home(capacity, 3, 2);
    let (b, c) = (bc[0], bc[1]);

    table.insert(a, "A");
    table.insert(b, "B");
    table.insert(c, "C");

    (table, a, b, c)
}

#[test]
fn later_arrival_evicts_the_richer_of_two_colliding_homes() {
    let (table, a, b, c) = build_steal_scenario();

    assert_eq!(table.len(), 3);
    assert_eq!(*table.find(&b).unwrap().value(), "B");
    assert_eq!(*table.find(&c).unwrap().value(), "C");
    assert_eq!(*table.find(&a).unwrap().value(), "A");

    let (ok, violation) = robin_swar::debug::satisfies_invariant(&table);
    assert!(ok, "invariant violated at {violation:?}");
}
