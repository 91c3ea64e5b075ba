//! SIMD-within-a-register (SWAR) algebra over register-sized words.
//!
//! A SWAR word is a `W`-bit integer partitioned into `N = W / L` lanes of
//! `L` bits each; ordinary integer arithmetic on the whole word operates on
//! every lane at once, branch-free. This module provides that algebra
//! ([`core::Swar`]), a further split of each lane into a PSL/hash sub-lane
//! pair ([`sublane::SubLane`]), and a reader that produces a logical word
//! starting at an arbitrary lane offset ([`misaligned::MisalignedReader`]).

pub mod core;
pub mod misaligned;
pub mod sublane;
pub mod word;

pub use self::core::Swar;
pub use self::misaligned::{read_misaligned, MisalignedReader};
pub use self::sublane::SubLane;
pub use self::word::Word;
