//! E2E Scenario 1: single insert/find.
//!
//! `W = 64, L_LO = 3, L_HI = 5` (the `Table64` alias), capacity 16, hash =
//! identity. `insert(5, "a")` lands at slot 5 with PSL 1; `find(5)` returns
//! it, `find(6)` returns none.

use std::hash::{BuildHasher, Hasher};

use robin_swar::{InsertResult, Table64};

/// Identity hasher over a single `u64` key, matching the scenario's
/// "hash = identity" setup so home slots are predictable by hand.
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

#[test]
fn single_insert_then_find() {
    let mut table: Table64<u64, &'static str, IdentityBuildHasher> =
        Table64::try_new(16, IdentityBuildHasher).unwrap();

    assert!(matches!(table.insert(5, "a"), InsertResult::Inserted));
    assert_eq!(table.len(), 1);

    let found = table.find(&5).expect("key 5 must be present");
    assert_eq!(*found.value(), "a");
    assert_eq!(*found.key(), 5);

    assert!(table.find(&6).is_none());
}

#[test]
fn insert_into_empty_table_lands_at_home_with_psl_one() {
    let mut table: Table64<u64, u32, IdentityBuildHasher> =
        Table64::try_new(16, IdentityBuildHasher).unwrap();
    table.insert(5, 500);

    let (ok, violation) = robin_swar::debug::satisfies_invariant(&table);
    assert!(ok, "invariant violated at {violation:?}");
}
