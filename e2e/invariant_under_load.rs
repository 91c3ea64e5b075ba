//! E2E Scenario 6: full scan invariant.
//!
//! After 100 random inserts into a capacity-128 table, `satisfies_invariant`
//! must hold, every inserted key must be found, and every key that was
//! never inserted must report a miss.

use robin_swar::Table64;

/// Small xorshift PRNG so the scenario is deterministic without pulling in
/// a `rand` dependency the table itself has no other use for.
struct Xorshift64(u64);

impl Xorshift64 {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

#[test]
fn hundred_random_inserts_preserve_the_monotone_psl_invariant() {
    let mut table: Table64<u64, u64> = Table64::new(128);
    let mut rng = Xorshift64(0x243F_6A88_85A3_08D3);

    let mut inserted = std::collections::HashSet::new();
    while inserted.len() < 100 {
        let key = rng.next() % 1_000_000;
        if inserted.insert(key) {
            table.insert(key, key * 2);
        }
    }

    assert_eq!(table.len(), 100);

    let (ok, violation) = robin_swar::debug::satisfies_invariant(&table);
    assert!(ok, "invariant violated at {violation:?}");

    for &key in &inserted {
        let found = table.find(&key).unwrap_or_else(|| panic!("missing key {key}"));
        assert_eq!(*found.value(), key * 2);
    }

    let mut misses = 0;
    for probe in 1_000_000..1_000_200u64 {
        if table.find(&probe).is_none() {
            misses += 1;
        }
    }
    assert_eq!(misses, 200, "keys outside the inserted set must never be found");
}
