//! The table front end (component F): `RobinHoodTable` itself, built on top
//! of the metadata engine's `potential_matches` primitive.
//!
//! Every operation below follows the same shape: compute a home slot and a
//! hoisted hash from the key, then scan metadata words starting at that home
//! slot via a [`MisalignedReader`], feeding each word through
//! [`potential_matches`] until a deadline lane says where to stop.

use std::hash::{BuildHasher, Hash, Hasher};

use crate::error::{InvalidParameter, TableFull};
use crate::hash::pipeline::{home_slot, hoisted_hash};
use crate::metadata::{make_needle, potential_matches};
use crate::swar::{MisalignedReader, SubLane, Swar, Word};

use super::storage::Slots;
use super::{InsertResult, SlotRef};

/// An open-addressed Robin Hood hash table with a SWAR metadata lane.
///
/// `W` is the machine word backing the metadata (`u32` or `u64`), `L` is the
/// lane width in bits, and `L_LO` is the width of the PSL sub-lane within
/// each lane (the remaining `L - L_LO` bits hold the hoisted hash). `S` is
/// the `BuildHasher` used to turn keys into the single `u64` this table
/// treats as a black box.
pub struct RobinHoodTable<K, V, W: Word, const L: u32, const L_LO: u32, S> {
    metadata: Vec<Swar<W, L>>,
    slots: Slots<K, V>,
    hash_builder: S,
    capacity: usize,
    tail: usize,
    len: usize,
}

/// Where a key search landed: either an occupied slot holding it, or the
/// slot a new entry for that key should be written to (which may itself be
/// occupied by a poorer entry that needs evicting first).
enum ProbeResult {
    Found(usize),
    InsertAt(usize),
}

impl<K, V, W: Word, const L: u32, const L_LO: u32, S> RobinHoodTable<K, V, W, L, L_LO, S> {
    #[inline]
    fn lanes() -> usize {
        Swar::<W, L>::lanes() as usize
    }

    #[inline]
    fn hi_bits() -> u32 {
        L - L_LO
    }

    /// Construct a table with logical capacity `capacity` (the number of
    /// home slots `[0, capacity)` keys hash into) and the given hasher.
    ///
    /// The backing storage additionally carries a Skarupke overflow tail of
    /// `2^L_LO - 1` slots past `capacity`, plus one guard metadata word so a
    /// [`MisalignedReader`] never reads out of bounds.
    pub fn try_new(capacity: usize, hash_builder: S) -> Result<Self, InvalidParameter> {
        if capacity == 0 {
            return Err(InvalidParameter::CapacityIsZero);
        }
        let limit = 1usize << (W::BITS / 2);
        if capacity >= limit {
            return Err(InvalidParameter::CapacityTooLarge { capacity, limit });
        }

        let n = Self::lanes();
        let tail = (1usize << L_LO) - 1;
        let occupiable = capacity + tail;
        let metadata_words = (occupiable + n - 1) / n + 1;
        let total_slots = metadata_words * n;

        Ok(RobinHoodTable {
            metadata: vec![Swar::from_raw(W::ZERO); metadata_words],
            slots: Slots::with_len(total_slots),
            hash_builder,
            capacity,
            tail,
            len: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn occupiable(&self) -> usize {
        self.capacity + self.tail
    }

    /// PSL of `slot`'s metadata lane (`0` means empty), exposed crate-wide
    /// for [`crate::debug`]'s invariant checker and dumper.
    pub(crate) fn psl_at(&self, slot: usize) -> u64 {
        let n = Self::lanes();
        let word = self.metadata[slot / n];
        SubLane::<W, L, L_LO>::from_raw(word.raw()).least_at((slot % n) as u32)
    }

    /// Hoisted hash of `slot`'s metadata lane, meaningful only when
    /// `psl_at(slot) != 0`.
    pub(crate) fn hash_at(&self, slot: usize) -> u64 {
        let n = Self::lanes();
        let word = self.metadata[slot / n];
        SubLane::<W, L, L_LO>::from_raw(word.raw()).most_at((slot % n) as u32)
    }

    /// Key/value reference at `slot` if occupied, for [`crate::debug`].
    pub(crate) fn entry_at(&self, slot: usize) -> Option<(&K, &V)> {
        if self.psl_at(slot) == 0 {
            None
        } else {
            let (k, v) = unsafe { self.slots.assume_ref(slot) };
            Some((k, v))
        }
    }

    fn write_metadata(&mut self, slot: usize, psl: u64, hash: u64) {
        let n = Self::lanes();
        let word_index = slot / n;
        let lane = (slot % n) as u32;
        let combined = (psl & ((1u64 << L_LO) - 1)) | (hash << L_LO);
        self.metadata[word_index] = self.metadata[word_index].set_lane(lane, W::from_u64(combined));
    }

    fn clear_metadata(&mut self, slot: usize) {
        let n = Self::lanes();
        let word_index = slot / n;
        let lane = (slot % n) as u32;
        self.metadata[word_index] = self.metadata[word_index].clear_lane(lane);
    }

    /// Drop every currently-occupied slot's payload and reset all metadata
    /// to empty, without shrinking the backing storage.
    pub fn clear(&mut self) {
        if std::mem::needs_drop::<(K, V)>() {
            for slot in 0..self.occupiable() {
                if self.psl_at(slot) != 0 {
                    unsafe { self.slots.drop_in_place(slot) };
                }
            }
        }
        for word in self.metadata.iter_mut() {
            *word = Swar::from_raw(W::ZERO);
        }
        self.len = 0;
    }
}

impl<K, V, W: Word, const L: u32, const L_LO: u32, S: Default> RobinHoodTable<K, V, W, L, L_LO, S> {
    /// Construct a table with the default hasher, panicking if `capacity`
    /// violates the table's constraints. Use [`Self::try_new`] to handle
    /// that case instead of panicking.
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity, S::default()).expect("invalid RobinHoodTable capacity")
    }
}

impl<K: Eq, V, W: Word, const L: u32, const L_LO: u32, S: BuildHasher> RobinHoodTable<K, V, W, L, L_LO, S>
where
    K: Hash,
{
    fn raw_hash(&self, key: &K) -> W {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        W::from_u64(hasher.finish())
    }

    /// Scan metadata starting at `home` for `key`, returning either the
    /// slot it occupies or the slot a new entry for it should land in.
    fn probe(&self, key: &K, home: usize, h: u64) -> ProbeResult {
        let n = Self::lanes() as u32;
        let word_index = home / (n as usize);
        let m = (home % (n as usize)) as u32;

        let mut reader = MisalignedReader::new(&self.metadata, word_index, m);
        let mut current_slot = home;
        let mut p0 = 0u32;

        loop {
            let haystack = SubLane::<W, L, L_LO>::from_raw(reader.read().raw());
            let needle = make_needle::<W, L, L_LO>(p0, h);
            let probe = potential_matches(needle, haystack);

            let mut matches = probe.matches.raw();
            while !matches.is_zero() {
                let lane = matches.lsb_lane_index().expect("nonzero SWAR has a set lane");
                let idx = current_slot + lane as usize;
                if unsafe { self.slots.assume_ref(idx) }.0 == *key {
                    return ProbeResult::Found(idx);
                }
                matches = matches.clear_lsb();
            }

            if probe.has_deadline() {
                let lane = probe.deadline_lane().expect("has_deadline implies a lane index");
                return ProbeResult::InsertAt(current_slot + lane as usize);
            }

            current_slot += n as usize;
            reader.advance();
            p0 += n;
        }
    }

    fn locate(&self, key: &K) -> ProbeResult {
        let raw = self.raw_hash(key);
        let home = home_slot::<W>(raw, self.capacity);
        let h = hoisted_hash::<W>(raw, Self::hi_bits());
        self.probe(key, home, h)
    }

    /// Find `key`, returning a handle to its slot if present. The handle
    /// borrows the table and is invalidated by any mutating operation.
    pub fn find(&self, key: &K) -> Option<SlotRef<'_, K, V>> {
        match self.locate(key) {
            ProbeResult::Found(idx) => Some(SlotRef::new(&self.slots, idx)),
            ProbeResult::InsertAt(_) => None,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        matches!(self.locate(key), ProbeResult::Found(_))
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match self.locate(key) {
            ProbeResult::Found(idx) => Some(unsafe { &self.slots.assume_ref(idx).1 }),
            ProbeResult::InsertAt(_) => None,
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.locate(key) {
            ProbeResult::Found(idx) => Some(unsafe { &mut self.slots.assume_mut(idx).1 }),
            ProbeResult::InsertAt(_) => None,
        }
    }

    /// Insert `key`/`value`, replacing and returning any existing value for
    /// an equal key, or evicting poorer entries down the probe sequence per
    /// Robin Hood hashing. Fails with [`TableFull`] if eviction runs off the
    /// end of the Skarupke tail before finding a home.
    pub fn insert(&mut self, key: K, value: V) -> InsertResult<V> {
        let raw = self.raw_hash(&key);
        let home = home_slot::<W>(raw, self.capacity);
        let h = hoisted_hash::<W>(raw, Self::hi_bits());

        match self.probe(&key, home, h) {
            ProbeResult::Found(idx) => {
                let slot = unsafe { self.slots.assume_mut(idx) };
                InsertResult::Replaced(std::mem::replace(&mut slot.1, value))
            }
            ProbeResult::InsertAt(insertion_point) => match self.rh_insert(insertion_point, home, h, key, value) {
                Ok(()) => InsertResult::Inserted,
                Err(e) => InsertResult::Err(e),
            },
        }
    }

    /// Walk the probe sequence forward from `slot`, placing `(key, value)`
    /// in the first empty slot and evicting (swapping in) any occupant
    /// whose PSL is lower than the entry currently being carried.
    fn rh_insert(&mut self, mut slot: usize, home: usize, hash: u64, key: K, value: V) -> Result<(), TableFull> {
        let occupiable = self.occupiable();
        let mut carried_psl = (slot - home + 1) as u64;
        let mut carried_hash = hash;
        let mut carried_kv = (key, value);

        loop {
            if slot >= occupiable {
                return Err(TableFull);
            }

            let resident_psl = self.psl_at(slot);
            if resident_psl == 0 {
                self.write_metadata(slot, carried_psl, carried_hash);
                self.slots.write(slot, carried_kv);
                self.len += 1;
                return Ok(());
            }

            if resident_psl < carried_psl {
                let resident_hash = self.hash_at(slot);
                let evicted = unsafe { self.slots.swap_in(slot, carried_kv) };
                self.write_metadata(slot, carried_psl, carried_hash);
                carried_kv = evicted;
                carried_psl = resident_psl;
                carried_hash = resident_hash;
            }

            carried_psl += 1;
            slot += 1;
        }
    }

    /// Remove `key` if present, shifting every following run of the same
    /// probe sequence back one slot (decrementing their PSL) so the
    /// monotonic-PSL invariant holds afterward.
    pub fn erase(&mut self, key: &K) -> Option<V> {
        let idx = match self.locate(key) {
            ProbeResult::Found(idx) => idx,
            ProbeResult::InsertAt(_) => return None,
        };

        let (_, value) = unsafe { self.slots.take(idx) };
        self.clear_metadata(idx);
        self.len -= 1;

        let occupiable = self.occupiable();
        let mut cur = idx;
        loop {
            let next = cur + 1;
            if next >= occupiable {
                break;
            }
            let next_psl = self.psl_at(next);
            if next_psl <= 1 {
                break;
            }
            unsafe { self.slots.move_within(next, cur) };
            let next_hash = self.hash_at(next);
            self.write_metadata(cur, next_psl - 1, next_hash);
            self.clear_metadata(next);
            cur = next;
        }

        Some(value)
    }
}

impl<K, V, W: Word, const L: u32, const L_LO: u32, S> Drop for RobinHoodTable<K, V, W, L, L_LO, S> {
    fn drop(&mut self) {
        if std::mem::needs_drop::<(K, V)>() {
            let occupiable = self.capacity + self.tail;
            for slot in 0..occupiable {
                if self.psl_at(slot) != 0 {
                    unsafe { self.slots.drop_in_place(slot) };
                }
            }
        }
    }
}
