//! The string-keyed fixed-capacity map.

use keel_core::{AllocError, Allocator, MapKey};

use crate::error::MapError;
use crate::map::MapEntry;

/// A fixed-capacity, linear-probing table keyed by strings.
///
/// The table owns its keys: [`put`](FixedStringMap::put) duplicates
/// the borrowed key into an owned `String`, and
/// [`remove`](FixedStringMap::remove) releases that copy when the
/// entry goes. Callers never hand over ownership and never get a
/// dangling key.
///
/// Hashing is the sum of the key's UTF-8 bytes modulo capacity.
/// Probe-chain semantics are identical to
/// [`FixedMap`](crate::FixedMap): duplicate `put`s insert second
/// entries, and lookups scan a full probe cycle so removal holes
/// cannot hide keys.
pub struct FixedStringMap<V> {
    slots: Vec<Option<MapEntry<String, V>>>,
    len: usize,
}

impl<V> FixedStringMap<V> {
    /// Create a heap-backed table with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "map capacity must be non-zero");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    /// Create a table with storage from `allocator`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity_in<A: Allocator>(
        capacity: usize,
        allocator: &A,
    ) -> Result<Self, AllocError> {
        assert!(capacity > 0, "map capacity must be non-zero");
        let mut slots = allocator.allocate(capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self { slots, len: 0 })
    }

    /// Insert an entry under an owned copy of `key`.
    ///
    /// A key that is already present is inserted again, not updated.
    pub fn put(&mut self, key: &str, value: V) -> Result<(), MapError> {
        if self.len == self.slots.len() {
            return Err(MapError::Full {
                capacity: self.slots.len(),
            });
        }
        let mut index = self.home_slot(key);
        loop {
            if self.slots[index].is_none() {
                self.slots[index] = Some(MapEntry {
                    key: key.to_owned(),
                    value,
                });
                self.len += 1;
                return Ok(());
            }
            index = (index + 1) % self.slots.len();
        }
    }

    /// Insert a key with a default value: set-like use of the table.
    pub fn slot_in(&mut self, key: &str) -> Result<(), MapError>
    where
        V: Default,
    {
        self.put(key, V::default())
    }

    /// Look up the value for `key`.
    ///
    /// Scans at most `capacity` slots from the home slot; unoccupied
    /// slots on the way are skipped, not treated as end-of-chain.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut index = self.home_slot(key);
        for _ in 0..self.slots.len() {
            if let Some(entry) = &self.slots[index] {
                if entry.key == key {
                    return Some(&entry.value);
                }
            }
            index = (index + 1) % self.slots.len();
        }
        None
    }

    /// Mutable variant of [`get`](FixedStringMap::get).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut index = self.home_slot(key);
        for _ in 0..self.slots.len() {
            if let Some(entry) = &self.slots[index] {
                if entry.key == key {
                    break;
                }
            }
            index = (index + 1) % self.slots.len();
        }
        match &mut self.slots[index] {
            Some(entry) if entry.key == key => Some(&mut entry.value),
            _ => None,
        }
    }

    /// Remove the first entry matching `key` in probe order, dropping
    /// the table's owned copy of the key and returning the value.
    /// `None` if the key is absent.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let mut index = self.home_slot(key);
        for _ in 0..self.slots.len() {
            let matches = self.slots[index]
                .as_ref()
                .is_some_and(|entry| entry.key == key);
            if matches {
                let entry = self.slots[index].take();
                self.len -= 1;
                return entry.map(|e| e.value);
            }
            index = (index + 1) % self.slots.len();
        }
        None
    }

    /// Whether at least one entry holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over live entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|entry| (entry.key.as_str(), &entry.value)))
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The table's fixed capacity.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is claimed.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    fn home_slot(&self, key: &str) -> usize {
        key.checksum() as usize % self.slots.len()
    }
}
