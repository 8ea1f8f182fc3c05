//! Slot pools and the stable-locator bucket allocator.
//!
//! Two allocators that hand out *handles* instead of pointers:
//!
//! - [`FreeList`]: a fixed pool of equal-sized byte slots with an
//!   occupancy bitmap; hands out [`PoolSlot`] indices.
//! - [`BucketArray`]: a two-level allocator over a growing collection
//!   of fixed-size buckets; hands out [`BucketLocator`]s that stay
//!   valid for an element's entire lifetime, no matter how many other
//!   elements are inserted or removed around it.
//!
//! Handles are indices, never cached pointers: the bucket collection
//! may relocate its `Bucket` structs when it grows, so every access
//! re-derives the bucket from the locator's index. Each bucket's own
//! slot storage is created once and never moves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bucket;
pub mod free_list;

pub use bucket::{Bucket, BucketArray, BucketLocator};
pub use free_list::{FreeList, PoolSlot};
