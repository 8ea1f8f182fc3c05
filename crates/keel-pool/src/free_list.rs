//! A fixed pool of equal-sized byte slots.

use keel_core::{AllocError, Allocator};
use keel_containers::FixedArray;

/// Handle to an occupied slot in a [`FreeList`].
///
/// Opaque and `Copy`; stays meaningful until the slot is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct PoolSlot(usize);

impl PoolSlot {
    /// The slot's index within the pool.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A fixed pool of `capacity` slots, each `item_size` bytes.
///
/// Allocation is a linear scan of the occupancy bitmap for the first
/// free slot: O(capacity), no free-slot cache. A full pool is a
/// normal runtime condition ([`allocate`](FreeList::allocate) returns
/// `None`); handing back a slot that is out of range or already free
/// is a programmer error and panics.
pub struct FreeList {
    item_size: usize,
    data: Vec<u8>,
    occupancy: FixedArray<bool>,
}

impl FreeList {
    /// Create a heap-backed pool.
    ///
    /// # Panics
    ///
    /// Panics if `item_size` or `capacity` is zero.
    pub fn new(item_size: usize, capacity: usize) -> Self {
        assert!(item_size > 0, "pool item size must be non-zero");
        assert!(capacity > 0, "pool capacity must be non-zero");
        Self {
            item_size,
            data: vec![0; item_size * capacity],
            occupancy: FixedArray::filled(false, capacity),
        }
    }

    /// Create a pool with storage from `allocator`.
    ///
    /// # Panics
    ///
    /// Panics if `item_size` or `capacity` is zero.
    pub fn new_in<A: Allocator>(
        item_size: usize,
        capacity: usize,
        allocator: &A,
    ) -> Result<Self, AllocError> {
        assert!(item_size > 0, "pool item size must be non-zero");
        assert!(capacity > 0, "pool capacity must be non-zero");
        let total = item_size * capacity;
        let mut data = allocator.allocate(total)?;
        data.resize(total, 0);
        Ok(Self {
            item_size,
            data,
            occupancy: FixedArray::filled_in(false, capacity, allocator)?,
        })
    }

    /// Claim the first free slot, or `None` if the pool is full.
    ///
    /// The slot's bytes are zeroed before the handle is returned.
    ///
    /// # Panics
    ///
    /// Panics if `size` differs from the pool's configured item size —
    /// all slots are one size by construction.
    pub fn allocate(&mut self, size: usize) -> Option<PoolSlot> {
        assert_eq!(
            size, self.item_size,
            "pool allocates fixed {}-byte slots",
            self.item_size
        );
        let index = self.occupancy.iter().position(|&occupied| !occupied)?;
        self.occupancy[index] = true;
        let start = index * self.item_size;
        self.data[start..start + self.item_size].fill(0);
        Some(PoolSlot(index))
    }

    /// Release a slot back to the pool.
    ///
    /// # Panics
    ///
    /// Panics if the slot is out of range or already free.
    pub fn release(&mut self, slot: PoolSlot) {
        assert!(
            slot.0 < self.occupancy.capacity(),
            "slot {} out of range for pool of {}",
            slot.0,
            self.occupancy.capacity()
        );
        assert!(self.occupancy[slot.0], "releasing a free slot {}", slot.0);
        self.occupancy[slot.0] = false;
    }

    /// The bytes of an occupied slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot is out of range or not occupied.
    pub fn slot(&self, slot: PoolSlot) -> &[u8] {
        assert!(self.occupancy[slot.0], "slot {} is not occupied", slot.0);
        let start = slot.0 * self.item_size;
        &self.data[start..start + self.item_size]
    }

    /// Mutable variant of [`slot`](FreeList::slot).
    ///
    /// # Panics
    ///
    /// Panics if the slot is out of range or not occupied.
    pub fn slot_mut(&mut self, slot: PoolSlot) -> &mut [u8] {
        assert!(self.occupancy[slot.0], "slot {} is not occupied", slot.0);
        let start = slot.0 * self.item_size;
        &mut self.data[start..start + self.item_size]
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.occupancy.iter().filter(|&&occupied| occupied).count()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.occupancy.iter().all(|&occupied| occupied)
    }

    /// Number of slots in the pool.
    pub fn capacity(&self) -> usize {
        self.occupancy.capacity()
    }

    /// Configured size of each slot in bytes.
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Memory reserved for slot storage and the bitmap, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() + self.occupancy.memory_bytes()
    }
}
