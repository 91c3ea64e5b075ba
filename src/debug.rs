//! Invariant checking and human-readable dumps of a table's metadata
//! (component G). Intended for tests and for debugging a table that is
//! misbehaving, not for the hot path.

use crate::swar::Word;
use crate::table::RobinHoodTable;

/// Check the monotonic-PSL invariant over every occupiable slot: adjacent
/// slots must satisfy `PSL[i+1] <= PSL[i] + 1` (a PSL may drop by any
/// amount, including to 0, but never jump up by more than one), and every
/// occupied slot's implied home (`slot + 1 - psl`) lies within the table's
/// logical capacity.
///
/// Returns `(true, None)` if the invariant holds, or `(false, Some(slot))`
/// naming the first slot where it is violated.
pub fn satisfies_invariant<K, V, W: Word, const L: u32, const L_LO: u32, S>(
    table: &RobinHoodTable<K, V, W, L, L_LO, S>,
) -> (bool, Option<usize>) {
    let occupiable = table.capacity() + tail_len(L_LO);
    let mut prev_psl: u64 = 0;

    for slot in 0..occupiable {
        let psl = table.psl_at(slot);
        if psl == 0 {
            prev_psl = 0;
            continue;
        }

        let home = match (slot + 1).checked_sub(psl as usize) {
            Some(home) => home,
            None => return (false, Some(slot)),
        };
        if home >= table.capacity() {
            return (false, Some(slot));
        }

        if psl > prev_psl + 1 {
            return (false, Some(slot));
        }
        prev_psl = psl;
    }

    (true, None)
}

#[inline]
fn tail_len(l_lo: u32) -> usize {
    (1usize << l_lo) - 1
}

/// Render `slots[range]` as one line per slot: index, PSL, hoisted hash,
/// and (if occupied) key/value via their `Debug` impls.
pub fn display<K, V, W: Word, const L: u32, const L_LO: u32, S>(
    table: &RobinHoodTable<K, V, W, L, L_LO, S>,
    range: std::ops::Range<usize>,
) -> String
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    use std::fmt::Write;
    let mut out = String::new();
    for slot in range {
        let psl = table.psl_at(slot);
        if psl == 0 {
            let _ = writeln!(out, "{slot:>6}: empty");
            continue;
        }
        let hash = table.hash_at(slot);
        match table.entry_at(slot) {
            Some((k, v)) => {
                let _ = writeln!(out, "{slot:>6}: psl={psl} hash={hash:#x} key={k:?} value={v:?}");
            }
            None => {
                let _ = writeln!(out, "{slot:>6}: psl={psl} hash={hash:#x}");
            }
        }
    }
    out
}
