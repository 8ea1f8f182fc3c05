//! Allocator-agnostic sequence and map containers for the Keel toolkit.
//!
//! Every container here is parameterized over the `keel-core`
//! [`Allocator`](keel_core::Allocator) capability, either injected at
//! construction (`*_in` constructors) or defaulted to the process-heap
//! [`HeapAllocator`](keel_core::HeapAllocator):
//!
//! - [`FixedArray`]: a sequence with caller-declared, fixed capacity.
//! - [`Array`]: a growable sequence with doubling growth through its
//!   allocator.
//! - [`FixedMap`]: a fixed-capacity open-addressing hash table with
//!   linear probing.
//! - [`FixedStringMap`]: the string-keyed variant that owns copies of
//!   its keys.
//!
//! None of the containers synchronize access; exclusive ownership is
//! the caller's, enforced by `&mut`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod fixed;
pub mod map;
pub mod string_map;

pub use array::Array;
pub use error::{CapacityError, MapError};
pub use fixed::FixedArray;
pub use map::FixedMap;
pub use string_map::FixedStringMap;
