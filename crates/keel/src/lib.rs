//! Keel: a memory-and-container toolkit for engine-style software.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Keel sub-crates. For most users, adding `keel` as a single
//! dependency is sufficient.
//!
//! Keel lets callers choose *how* memory is supplied (heap, bump
//! arena, fixed-capacity pool) and provides allocator-agnostic
//! containers on top: fixed and growable arrays, open-addressing maps,
//! and a bucket allocator whose locators stay valid across growth.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! // A growable array over the default heap allocator.
//! let mut scores: Array<u32> = Array::new();
//! scores.push(90).unwrap();
//! scores.push(75).unwrap();
//! assert_eq!(scores.index_of(&75), Some(1));
//!
//! // A bucket array hands out locators that survive growth.
//! let mut entities: BucketArray<u64> = BucketArray::new(64);
//! let hero = entities.insert(1).unwrap();
//! for monster in 2..500 {
//!     entities.insert(monster).unwrap();
//! }
//! assert_eq!(entities[hero], 1);
//!
//! // A bump arena with the temp-memory pattern.
//! let mut frame = Arena::new(4096);
//! let name = frame.push_copy(b"player-one").unwrap();
//! let mark = frame.mark();
//! frame.push_bytes(1024).unwrap(); // scratch
//! frame.rewind(mark);
//! assert_eq!(frame.bytes(name, 10), b"player-one");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `keel-core` | `Allocator`, `HeapAllocator`, `MapKey`, `AllocError` |
//! | [`arena`] | `keel-arena` | `Arena`, `ArenaMark`, `ArenaError` |
//! | [`containers`] | `keel-containers` | `FixedArray`, `Array`, `FixedMap`, `FixedStringMap` |
//! | [`pool`] | `keel-pool` | `FreeList`, `BucketArray`, `BucketLocator` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Allocator capability, default heap allocator, and core traits
/// (`keel-core`).
pub use keel_core as types;

/// Bump-pointer region allocation (`keel-arena`).
pub use keel_arena as arena;

/// Sequence and map containers (`keel-containers`).
pub use keel_containers as containers;

/// Slot pools and the stable-locator bucket allocator (`keel-pool`).
pub use keel_pool as pool;

/// Common imports for typical Keel usage.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    // Allocation policy
    pub use keel_core::{AllocError, Allocator, HeapAllocator, MapKey};

    // Arena
    pub use keel_arena::{Arena, ArenaError, ArenaMark};

    // Containers
    pub use keel_containers::{
        Array, CapacityError, FixedArray, FixedMap, FixedStringMap, MapError,
    };

    // Pools
    pub use keel_pool::{BucketArray, BucketLocator, FreeList, PoolSlot};
}
