//! The two-level bucket allocator with identity-stable locators.

use std::fmt;
use std::ops::{Index, IndexMut};

use keel_core::{AllocError, Allocator, HeapAllocator};
use keel_containers::{Array, FixedArray};

/// Stable handle to an element in a [`BucketArray`].
///
/// Addresses the element by bucket index and slot index, never by
/// pointer. It stays valid for the element's entire lifetime
/// regardless of how many other elements are inserted or removed, and
/// regardless of the bucket collection relocating its `Bucket` structs
/// as it grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct BucketLocator {
    bucket: u32,
    slot: u32,
}

impl BucketLocator {
    fn new(bucket: u32, slot: u32) -> Self {
        Self { bucket, slot }
    }

    /// Index of the bucket holding the element.
    pub fn bucket_index(self) -> u32 {
        self.bucket
    }

    /// Slot index within that bucket.
    pub fn slot_index(self) -> u32 {
        self.slot
    }
}

impl fmt::Display for BucketLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(bucket {}, slot {})", self.bucket, self.slot)
    }
}

/// One fixed-capacity block of slots inside a [`BucketArray`].
///
/// Slot storage and the occupancy bitmap are created at full length
/// when the bucket is and never relocate afterwards; unoccupied slots
/// hold `T::default()`.
pub struct Bucket<T> {
    items: FixedArray<T>,
    occupancy: FixedArray<bool>,
    filled_count: usize,
    index: usize,
}

impl<T> Bucket<T> {
    /// Number of occupied slots.
    pub fn filled_count(&self) -> usize {
        self.filled_count
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.filled_count == self.items.capacity()
    }
}

/// A two-level allocator handing out identity-stable [`BucketLocator`]s.
///
/// Elements live in fixed-size buckets; the collection of buckets
/// grows one bucket at a time as needed and never shrinks. Insertion
/// picks the first bucket known to have room (oldest-not-full first)
/// and the lowest free slot within it — good locality for sequential
/// insert/remove churn, though callers may only rely on "some free
/// slot in some not-full bucket".
///
/// Growing `all_buckets` may move the `Bucket` structs themselves,
/// which is why the unfull-bucket list holds bucket *indices* and
/// every access re-derives the bucket from the locator; nothing here
/// caches a reference across an insertion.
pub struct BucketArray<T, A: Allocator = HeapAllocator> {
    all_buckets: Array<Bucket<T>, A>,
    unfull_buckets: Array<u32, A>,
    allocator: A,
    len: usize,
    bucket_capacity: usize,
}

impl<T> BucketArray<T> {
    /// Create a heap-backed bucket array.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_capacity` is zero.
    pub fn new(bucket_capacity: usize) -> Self {
        Self::new_in(bucket_capacity, HeapAllocator)
    }
}

impl<T, A: Allocator + Clone> BucketArray<T, A> {
    /// Create a bucket array that draws bucket storage from
    /// `allocator`. No bucket is allocated until the first insert.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_capacity` is zero.
    pub fn new_in(bucket_capacity: usize, allocator: A) -> Self {
        assert!(bucket_capacity > 0, "bucket capacity must be non-zero");
        Self {
            all_buckets: Array::new_in(allocator.clone()),
            unfull_buckets: Array::new_in(allocator.clone()),
            allocator,
            len: 0,
            bucket_capacity,
        }
    }
}

impl<T, A: Allocator> BucketArray<T, A> {
    /// Insert an element and return its locator.
    ///
    /// Allocates a fresh bucket only when no existing bucket has a
    /// free slot; allocation failure is returned with the structure
    /// unchanged.
    pub fn insert(&mut self, item: T) -> Result<BucketLocator, AllocError>
    where
        T: Default + Clone,
    {
        if self.unfull_buckets.is_empty() {
            let bucket = Bucket {
                items: FixedArray::filled_in(T::default(), self.bucket_capacity, &self.allocator)?,
                occupancy: FixedArray::filled_in(false, self.bucket_capacity, &self.allocator)?,
                filled_count: 0,
                index: self.all_buckets.len(),
            };
            let index = self.all_buckets.push(bucket)?;
            // Unfull-list capacity must cover every bucket:
            // `remove` re-registers without allocating.
            if let Err(err) = self.unfull_buckets.ensure_capacity(self.all_buckets.capacity()) {
                self.all_buckets.remove(index);
                return Err(err);
            }
            self.unfull_buckets
                .push(index as u32)
                .expect("unfull list capacity covers every bucket");
        }

        let bucket_index = self.unfull_buckets[0] as usize;
        let bucket = &mut self.all_buckets[bucket_index];
        let slot = bucket
            .occupancy
            .iter()
            .position(|&occupied| !occupied)
            .expect("a bucket in the unfull list always has a free slot");

        bucket.occupancy[slot] = true;
        bucket.items[slot] = item;
        bucket.filled_count += 1;
        let locator = BucketLocator::new(bucket.index as u32, slot as u32);

        if bucket.filled_count == self.bucket_capacity {
            self.unfull_buckets.remove(0);
        }
        self.len += 1;
        Ok(locator)
    }

    /// Remove the element at `locator` and return it.
    ///
    /// The slot is refilled with `T::default()` and becomes available
    /// to future inserts; a bucket that had been full is re-registered
    /// at the end of the unfull list.
    ///
    /// # Panics
    ///
    /// Panics if the locator's slot is not occupied, including a
    /// locator that was already removed.
    pub fn remove(&mut self, locator: BucketLocator) -> T
    where
        T: Default,
    {
        let bucket_index = locator.bucket as usize;
        assert!(
            bucket_index < self.all_buckets.len(),
            "locator {locator} addresses a bucket that does not exist"
        );
        let bucket = &mut self.all_buckets[bucket_index];
        let slot = locator.slot as usize;
        assert!(
            *bucket.occupancy.get(slot).unwrap_or(&false),
            "locator {locator} is not occupied"
        );

        let was_full = bucket.filled_count == self.bucket_capacity;
        bucket.occupancy[slot] = false;
        bucket.filled_count -= 1;
        let item = std::mem::take(&mut bucket.items[slot]);
        self.len -= 1;

        if was_full {
            self.unfull_buckets
                .push(locator.bucket)
                .expect("unfull list capacity covers every bucket");
        }
        item
    }

    /// The element at `locator`, or `None` if the slot is unoccupied
    /// or the locator is out of range.
    pub fn get(&self, locator: BucketLocator) -> Option<&T> {
        let bucket = self.all_buckets.get(locator.bucket as usize)?;
        let slot = locator.slot as usize;
        if !*bucket.occupancy.get(slot)? {
            return None;
        }
        bucket.items.get(slot)
    }

    /// Mutable variant of [`get`](BucketArray::get).
    pub fn get_mut(&mut self, locator: BucketLocator) -> Option<&mut T> {
        let bucket = self.all_buckets.get_mut(locator.bucket as usize)?;
        let slot = locator.slot as usize;
        if !*bucket.occupancy.get(slot)? {
            return None;
        }
        bucket.items.get_mut(slot)
    }

    /// Iterate over occupied slots in bucket, then slot, order.
    pub fn iter(&self) -> impl Iterator<Item = (BucketLocator, &T)> {
        self.all_buckets.iter().flat_map(|bucket| {
            bucket
                .occupancy
                .iter()
                .enumerate()
                .filter(|&(_, &occupied)| occupied)
                .map(move |(slot, _)| {
                    (
                        BucketLocator::new(bucket.index as u32, slot as u32),
                        &bucket.items[slot],
                    )
                })
        })
    }

    /// Shared view of the bucket at `index`, if it exists.
    pub fn bucket(&self, index: usize) -> Option<&Bucket<T>> {
        self.all_buckets.get(index)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no element is live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets allocated so far.
    pub fn bucket_count(&self) -> usize {
        self.all_buckets.len()
    }

    /// Number of buckets currently having at least one free slot.
    pub fn unfull_bucket_count(&self) -> usize {
        self.unfull_buckets.len()
    }

    /// Configured number of slots per bucket.
    pub fn bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }

    /// Memory reserved by all buckets' slot storage and bitmaps,
    /// in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.all_buckets
            .iter()
            .map(|bucket| bucket.items.memory_bytes() + bucket.occupancy.memory_bytes())
            .sum()
    }
}

impl<T, A: Allocator> Index<BucketLocator> for BucketArray<T, A> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the locator's slot is not occupied.
    fn index(&self, locator: BucketLocator) -> &T {
        match self.get(locator) {
            Some(item) => item,
            None => panic!("locator {locator} is not occupied"),
        }
    }
}

impl<T, A: Allocator> IndexMut<BucketLocator> for BucketArray<T, A> {
    /// # Panics
    ///
    /// Panics if the locator's slot is not occupied.
    fn index_mut(&mut self, locator: BucketLocator) -> &mut T {
        match self.get_mut(locator) {
            Some(item) => item,
            None => panic!("locator {locator} is not occupied"),
        }
    }
}
