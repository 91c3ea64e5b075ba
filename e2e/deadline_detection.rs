//! E2E Scenario 4: deadline detection.
//!
//! Continuing the layout from scenario 3 (`B`, `C`, `A` at slots 3, 4, 5
//! with PSLs 1, 2, 2), a lookup for a key `X` that also homes to slot 3 but
//! was never inserted must see the haystack become strictly less rich than
//! the needle before or at slot 6 and report a miss in a single
//! metadata-word probe, without ever touching a stored key it need not
//! compare against.

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
fn miss_at_a_shared_home_terminates_without_a_false_match() {
    let capacity = 16;
    let mut table: Table64<u64, &'static str, IdentityBuildHasher> =
        Table64::try_new(capacity, IdentityBuildHasher).unwrap();

    let a = keys_for_home(capacity, 4, 1)[0];
    let home3 = keys_for_home(capacity, 3, 3);
    let (b, c, x) = (home3[0], home3[1], home3[2]);

    table.insert(a, "A");
    table.insert(b, "B");
    table.insert(c, "C");

    assert!(table.find(&x).is_none(), "X was never inserted");
    assert_eq!(table.len(), 3, "the failed lookup must not mutate the table");

    let (ok, violation) = robin_swar::debug::satisfies_invariant(&table);
    assert!(ok, "invariant violated at {violation:?}");
}
