//! The hash-mapping pipeline (component E): turning a user-supplied hash
//! into a home slot and a hoisted sub-hash, plus the crate's default
//! `BuildHasher`.

pub mod build_hasher;
pub mod pipeline;

pub use build_hasher::{DefaultHashBuilder, XxHasher64};
pub use pipeline::{fibonacci_scatter, hoisted_hash, home_slot, lemire_reduce};
