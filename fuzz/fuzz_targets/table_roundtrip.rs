#![no_main]
use libfuzzer_sys::fuzz_target;

use robin_swar::{InsertResult, Table64};

/// Turn arbitrary bytes into a bounded sequence of `u64` keys, eight bytes
/// at a time, so the fuzzer's raw corpus drives real `u64` traffic instead
/// of being reinterpreted byte-by-byte.
fn keys_from(data: &[u8]) -> Vec<u64> {
    data.chunks_exact(8)
        .take(256)
        .map(|c| u64::from_le_bytes(c.try_into().unwrap()))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let keys = keys_from(data);
    if keys.is_empty() {
        return;
    }

    let mut table: Table64<u64, u64> = Table64::new(512);
    let mut present = std::collections::HashMap::new();

    for &k in &keys {
        match table.insert(k, k.wrapping_mul(31)) {
            InsertResult::Inserted | InsertResult::Replaced(_) => {
                present.insert(k, k.wrapping_mul(31));
            }
            InsertResult::Err(_) => {
                // Skarupke tail exhausted; stop feeding more inserts, but
                // everything accepted so far must still be correct.
                break;
            }
        }
    }

    let (ok, violation) = robin_swar::debug::satisfies_invariant(&table);
    assert!(ok, "invariant violated at slot {violation:?}");
    assert_eq!(table.len(), present.len());

    for (&k, &v) in &present {
        let found = table.find(&k).unwrap_or_else(|| panic!("lost key {k} after insert"));
        assert_eq!(*found.value(), v);
    }
});
