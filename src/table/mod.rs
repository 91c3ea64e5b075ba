//! The table front end (component F): `RobinHoodTable` and the handles and
//! result types its public operations return.

mod core;
mod storage;

pub use self::core::RobinHoodTable;
use self::storage::Slots;

use crate::error::TableFull;
use crate::hash::DefaultHashBuilder;

/// Outcome of [`RobinHoodTable::insert`].
#[derive(Debug)]
pub enum InsertResult<V> {
    /// The key was not previously present; it was inserted fresh.
    Inserted,
    /// The key was already present; the old value is returned.
    Replaced(V),
    /// Insertion ran off the end of the Skarupke tail without finding a
    /// home for the entry.
    Err(TableFull),
}

impl<V> InsertResult<V> {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertResult::Inserted)
    }

    pub fn into_replaced(self) -> Option<V> {
        match self {
            InsertResult::Replaced(v) => Some(v),
            _ => None,
        }
    }
}

/// A handle to an occupied slot returned by [`RobinHoodTable::find`].
/// Borrows the table immutably, so it is invalidated by any subsequent
/// mutating call the borrow checker would already reject.
pub struct SlotRef<'a, K, V> {
    slots: &'a Slots<K, V>,
    idx: usize,
}

impl<'a, K, V> SlotRef<'a, K, V> {
    pub(crate) fn new(slots: &'a Slots<K, V>, idx: usize) -> Self {
        SlotRef { slots, idx }
    }

    pub fn key(&self) -> &K {
        unsafe { &self.slots.assume_ref(self.idx).0 }
    }

    pub fn value(&self) -> &V {
        unsafe { &self.slots.assume_ref(self.idx).1 }
    }
}

/// Convenience alias for a 64-bit-word table: `L = 8`, `L_LO = 3` (max PSL
/// 7), `L_HI = 5` (32-way hoisted hash).
pub type Table64<K, V, S = DefaultHashBuilder> = RobinHoodTable<K, V, u64, 8, 3, S>;

/// Convenience alias for a 32-bit-word table: `L = 4`, `L_LO = 2` (max PSL
/// 3), `L_HI = 2`.
pub type Table32<K, V, S = DefaultHashBuilder> = RobinHoodTable<K, V, u32, 4, 2, S>;
