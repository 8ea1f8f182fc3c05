//! Bump-pointer region allocation for the Keel toolkit.
//!
//! An [`Arena`] is a fixed-capacity region that hands out contiguous
//! byte ranges by advancing a cursor. Individual allocations are never
//! freed — the whole region is reclaimed at once with
//! [`Arena::reset`], or partially with the [`Arena::mark`] /
//! [`Arena::rewind`] temp-memory pattern.
//!
//! The arena owns its backing buffer directly and does not go through
//! the `keel-core` allocator capability: its entire purpose is to be a
//! memory *source*, pre-sized once and carved up with no per-allocation
//! bookkeeping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;

pub use arena::{Arena, ArenaMark};
pub use error::ArenaError;
