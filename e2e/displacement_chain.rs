//! E2E Scenario 2: displacement chain.
//!
//! With `hash(k) = 0` for every key, inserting `A, B, C` in order fills
//! slots 0, 1, 2 with PSLs 1, 2, 3 respectively (each new key collides with
//! the home slot and probes forward past every prior occupant). `find` of
//! each returns the correct slot; `find` of a fourth key `D` (never
//! inserted) returns none, with the miss detected at slot 3.

use std::hash::{BuildHasher, Hasher};

use robin_swar::Table64;

/// Every key hashes to zero, forcing every insert to collide at home slot 0
/// and chain forward.
#[derive(Default, Clone)]
struct ZeroBuildHasher;

#[derive(Default)]
struct ZeroHasher;

impl BuildHasher for ZeroBuildHasher {
    type Hasher = ZeroHasher;
    fn build_hasher(&self) -> ZeroHasher {
        ZeroHasher
    }
}

impl Hasher for ZeroHasher {
    fn finish(&self) -> u64 {
        0
    }
    fn write(&mut self, _bytes: &[u8]) {}
}

#[test]
fn chained_collisions_probe_forward_in_insertion_order() {
    let mut table: Table64<&'static str, u32, ZeroBuildHasher> =
        Table64::try_new(16, ZeroBuildHasher).unwrap();

    table.insert("A", 1);
    table.insert("B", 2);
    table.insert("C", 3);
    assert_eq!(table.len(), 3);

    assert_eq!(*table.find(&"A").unwrap().value(), 1);
    assert_eq!(*table.find(&"B").unwrap().value(), 2);
    assert_eq!(*table.find(&"C").unwrap().value(), 3);

    assert!(table.find(&"D").is_none());

    let (ok, violation) = robin_swar::debug::satisfies_invariant(&table);
    assert!(ok, "invariant violated at {violation:?}");
}
