//! Core abstractions for the Keel memory-and-container toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Allocator`] capability that every Keel container is
//! parameterized over, the default [`HeapAllocator`], the shared
//! [`AllocError`] type, and the [`MapKey`] hashing capability used by
//! the fixed-capacity maps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod error;
pub mod key;

pub use alloc::{Allocator, HeapAllocator};
pub use error::AllocError;
pub use key::MapKey;
