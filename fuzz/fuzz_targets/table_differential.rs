#![no_main]
use libfuzzer_sys::fuzz_target;

use robin_swar::Table64;
use std::collections::HashMap;

/// One operation decoded from a byte, keeping the key space small (`key %
/// 64`) so insert/erase traffic actually collides and exercises Robin Hood
/// displacement rather than scattering one key per slot.
enum Op {
    Insert(u64, u64),
    Erase(u64),
    Find(u64),
}

fn ops_from(data: &[u8]) -> Vec<Op> {
    data.chunks_exact(3)
        .take(512)
        .map(|c| {
            let key = (c[1] % 64) as u64;
            let value = c[2] as u64;
            match c[0] % 3 {
                0 => Op::Insert(key, value),
                1 => Op::Erase(key),
                _ => Op::Find(key),
            }
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let ops = ops_from(data);
    if ops.is_empty() {
        return;
    }

    let mut table: Table64<u64, u64> = Table64::new(128);
    let mut model: HashMap<u64, u64> = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(k, v) => {
                let table_old = table.insert(k, v).into_replaced();
                let model_old = model.insert(k, v);
                assert_eq!(table_old, model_old, "insert({k}, {v}) replaced-value mismatch");
            }
            Op::Erase(k) => {
                let table_old = table.erase(&k);
                let model_old = model.remove(&k);
                assert_eq!(table_old, model_old, "erase({k}) mismatch");
            }
            Op::Find(k) => {
                let table_val = table.find(&k).map(|s| *s.value());
                let model_val = model.get(&k).copied();
                assert_eq!(table_val, model_val, "find({k}) mismatch");
            }
        }
    }

    assert_eq!(table.len(), model.len());
    let (ok, violation) = robin_swar::debug::satisfies_invariant(&table);
    assert!(ok, "invariant violated at slot {violation:?}");
});
