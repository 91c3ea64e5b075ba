//! The one concrete, opt-in default hasher, built the same way
//! `crate::xxhash` thinly wraps `xxhash-rust` for checksums: a small
//! `Hasher`/`BuildHasher` pair over `xxhash_rust::xxh64`.
//!
//! Callers are never required to use this type — `RobinHoodTable` is
//! generic over any `S: BuildHasher`, matching the seam
//! `std::collections::HashMap` itself uses to keep the hash function a
//! black box.

use std::hash::{BuildHasher, Hasher};

/// [`Hasher`] backed by `xxhash_rust::xxh64`'s streaming state.
pub struct XxHasher64(xxhash_rust::xxh64::Xxh64);

impl Default for XxHasher64 {
    fn default() -> Self {
        XxHasher64(xxhash_rust::xxh64::Xxh64::new(0))
    }
}

impl Hasher for XxHasher64 {
    #[inline]
    fn finish(&self) -> u64 {
        self.0.digest()
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }
}

/// [`BuildHasher`] producing [`XxHasher64`] instances, used as the default
/// hasher for [`crate::table::RobinHoodTable`] when the caller does not
/// supply their own.
#[derive(Clone, Default)]
pub struct DefaultHashBuilder;

impl BuildHasher for DefaultHashBuilder {
    type Hasher = XxHasher64;

    #[inline]
    fn build_hasher(&self) -> XxHasher64 {
        XxHasher64::default()
    }
}
