// config.rs — Compile-time tuning constants collected in one place, rather
// than scattered as magic numbers through the table/metadata/hash modules.

/// Default lane width in bits for the convenience 64-bit table aliases:
/// `L_LO = 3` (max PSL 7), `L_HI = 5` (32-way hoisted hash), `L = 8`.
pub const DEFAULT_L_LO_64: u32 = 3;
pub const DEFAULT_L_HI_64: u32 = 5;
pub const DEFAULT_L_64: u32 = DEFAULT_L_LO_64 + DEFAULT_L_HI_64;

/// Default lane width in bits for the convenience 32-bit table aliases:
/// `L_LO = 2` (max PSL 3), `L_HI = 2`, `L = 4`.
pub const DEFAULT_L_LO_32: u32 = 2;
pub const DEFAULT_L_HI_32: u32 = 2;
pub const DEFAULT_L_32: u32 = DEFAULT_L_LO_32 + DEFAULT_L_HI_32;

/// `2^64 / φ`, rounded — re-exported here for discoverability alongside the
/// other tuning constants; the canonical definition lives in
/// [`crate::hash::pipeline::fibonacci`].
pub use crate::hash::pipeline::fibonacci::{SCATTER_32, SCATTER_64};
