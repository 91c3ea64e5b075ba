//! Error types returned by the table's fallible operations.
//!
//! Plain `Debug`/`Clone`/`Copy`/`PartialEq`/`Eq` enums with a hand-written
//! `Display` and `std::error::Error` impl, no `thiserror`/`anyhow` — the
//! same texture as `block::decompress_core::DecompressError` and
//! `frame::types::Lz4FError`. There is no CLI layer in this crate, so there
//! is nothing for `anyhow` to glue together.

use std::fmt;

/// Insertion exhausted the Skarupke overflow tail before finding a slot for
/// the new entry. The table remains in a valid state: the key that
/// overflowed is not stored. The caller must construct a larger table and
/// re-insert; this crate does not retry or resize on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFull;

impl fmt::Display for TableFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("insertion exhausted the Skarupke overflow tail; table must be resized")
    }
}

impl std::error::Error for TableFull {}

/// A runtime construction parameter violates the table's constraints.
/// Compile-time constraints (`L_LO + L_HI == L`, `L` divides `W`) are
/// instead enforced as const-generic assertions and fail the build, not
/// this error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    /// `capacity >= 2^(W/2)`, which Lemire range reduction cannot handle.
    CapacityTooLarge { capacity: usize, limit: usize },
    /// `capacity + (2^L_LO - 1) == 0`, i.e. a zero-sized table with no
    /// Skarupke tail either — there would be nowhere to put anything.
    CapacityIsZero,
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParameter::CapacityTooLarge { capacity, limit } => write!(
                f,
                "capacity {capacity} must be less than 2^(W/2) = {limit} for Lemire range reduction"
            ),
            InvalidParameter::CapacityIsZero => {
                f.write_str("capacity plus the Skarupke tail must be greater than zero")
            }
        }
    }
}

impl std::error::Error for InvalidParameter {}
