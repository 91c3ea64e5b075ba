//! An open-addressed Robin Hood hash table backed by a SWAR metadata lane.
//!
//! Instead of one metadata byte per slot (as in the open-addressing schemes
//! popularized by SwissTable/F14), this table packs PSL and a hoisted hash
//! into sub-lanes of a plain machine word ([`swar`]) and searches a word at
//! a time with branch-free bit tricks ([`metadata::potential_matches`])
//! rather than a SIMD intrinsic. The result behaves like a byte-metadata
//! table without requiring any target-feature-gated code path.
//!
//! [`table::RobinHoodTable`] is the front end; [`table::Table64`] and
//! [`table::Table32`] are ready-made aliases for the two supported word
//! widths. [`hash::DefaultHashBuilder`] is a convenience hasher, but the
//! table is generic over any `S: BuildHasher`, the same seam
//! `std::collections::HashMap` uses.

pub mod config;
pub mod debug;
pub mod error;
pub mod hash;
pub mod metadata;
pub mod swar;
pub mod table;

pub use error::{InvalidParameter, TableFull};
pub use hash::DefaultHashBuilder;
pub use table::{InsertResult, RobinHoodTable, SlotRef, Table32, Table64};
