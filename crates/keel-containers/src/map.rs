//! Fixed-capacity open-addressing hash table with linear probing.

use keel_core::{AllocError, Allocator, MapKey};

use crate::error::MapError;

/// An occupied slot: the key and its value.
pub(crate) struct MapEntry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// A fixed-capacity hash table with linear probing.
///
/// The table never resizes: `capacity` slots are allocated up front
/// and [`put`](FixedMap::put) reports [`MapError::Full`] once they are
/// all claimed. Collisions probe forward from the key's home slot
/// (checksum modulo capacity), wrapping at the end of the table.
///
/// Two deliberate properties, both pinned by tests:
///
/// - `put` **inserts, it never updates.** Putting a key that is
///   already present adds a second live entry; `get` returns
///   whichever comes first in probe order. Remove one and the other
///   becomes reachable.
/// - There are no tombstones. `get` and `remove` scan a full probe
///   cycle (up to `capacity` slots) instead of stopping at the first
///   hole, so holes left by earlier removals can never hide a key.
///   The cost is O(capacity) worst-case lookups for absent keys,
///   acceptable for the small, pre-sized tables this is built for.
pub struct FixedMap<K, V> {
    slots: Vec<Option<MapEntry<K, V>>>,
    len: usize,
}

impl<K: MapKey, V> FixedMap<K, V> {
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

    /// Insert an entry, claiming the first unoccupied slot on the
    /// probe path from the key's home slot.
    ///
    /// A key that is already present is inserted again, not updated.
    pub fn put(&mut self, key: K, value: V) -> Result<(), MapError> {
        if self.len == self.slots.len() {
            return Err(MapError::Full {
                capacity: self.slots.len(),
            });
        }
        let mut index = self.home_slot(&key);
        loop {
            if self.slots[index].is_none() {
                self.slots[index] = Some(MapEntry { key, value });
                self.len += 1;
                return Ok(());
            }
            index = (index + 1) % self.slots.len();
        }
    }

    /// Insert a key with a default value: set-like use of the table.
    pub fn slot_in(&mut self, key: K) -> Result<(), MapError>
    where
        V: Default,
    {
        self.put(key, V::default())
    }

    /// Look up the value for `key`.
    ///
    /// Scans at most `capacity` slots from the home slot and returns
    /// the first exact match; unoccupied slots on the way are skipped,
    /// not treated as end-of-chain.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut index = self.home_slot(key);
        for _ in 0..self.slots.len() {
            if let Some(entry) = &self.slots[index] {
                if entry.key == *key {
                    return Some(&entry.value);
                }
            }
            index = (index + 1) % self.slots.len();
        }
        None
    }

    /// Mutable variant of [`get`](FixedMap::get).
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut index = self.home_slot(key);
        for _ in 0..self.slots.len() {
            if let Some(entry) = &self.slots[index] {
                if entry.key == *key {
                    break;
                }
            }
            index = (index + 1) % self.slots.len();
        }
        match &mut self.slots[index] {
            Some(entry) if entry.key == *key => Some(&mut entry.value),
            _ => None,
        }
    }

    /// Remove the first entry matching `key` in probe order and return
    /// its value, or `None` if the key is absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut index = self.home_slot(key);
        for _ in 0..self.slots.len() {
            let matches = self.slots[index]
                .as_ref()
                .is_some_and(|entry| entry.key == *key);
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
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over live entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|entry| (&entry.key, &entry.value)))
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

    /// Memory reserved for the slot table in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<Option<MapEntry<K, V>>>()
    }

    fn home_slot(&self, key: &K) -> usize {
        key.checksum() as usize % self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_round_trip() {
        let mut map = FixedMap::with_capacity(8);
        map.put(1u32, "one").unwrap();
        map.put(2u32, "two").unwrap();
        assert_eq!(map.get(&1), Some(&"one"));
        assert_eq!(map.get(&2), Some(&"two"));
        assert_eq!(map.get(&3), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn colliding_keys_probe_forward() {
        // 1 and 9 both land in slot 1 of an 8-slot table.
        let mut map = FixedMap::with_capacity(8);
        map.put(1u32, 100).unwrap();
        map.put(9u32, 900).unwrap();
        // get(9) scans slot 1 (key mismatch), then slot 2 (match).
        assert_eq!(map.get(&9), Some(&900));
        assert_eq!(map.get(&1), Some(&100));
    }

    #[test]
    fn put_at_capacity_fails() {
        let mut map = FixedMap::with_capacity(2);
        map.put(1u8, ()).unwrap();
        map.put(2u8, ()).unwrap();
        assert_eq!(map.put(3u8, ()), Err(MapError::Full { capacity: 2 }));
        assert!(map.is_full());
    }

    #[test]
    fn remove_returns_the_value() {
        let mut map = FixedMap::with_capacity(4);
        map.put(7u32, 70).unwrap();
        assert_eq!(map.remove(&7), Some(70));
        assert_eq!(map.remove(&7), None);
        assert!(map.is_empty());
    }

    #[test]
    fn remove_from_empty_is_none() {
        let mut map: FixedMap<u32, u32> = FixedMap::with_capacity(4);
        assert_eq!(map.remove(&1), None);
    }

    #[test]
    fn holes_do_not_end_probe_chains() {
        // 1, 9, 17 all hash to slot 1 of an 8-slot table and chain
        // into slots 1, 2, 3. Removing 9 leaves a hole at slot 2;
        // 17 in slot 3 must still be found.
        let mut map = FixedMap::with_capacity(8);
        map.put(1u32, 100).unwrap();
        map.put(9u32, 900).unwrap();
        map.put(17u32, 1700).unwrap();
        assert_eq!(map.remove(&9), Some(900));
        assert_eq!(map.get(&17), Some(&1700));
        assert_eq!(map.get(&1), Some(&100));
    }

    #[test]
    fn duplicate_put_inserts_a_second_entry() {
        let mut map = FixedMap::with_capacity(8);
        map.put(5u32, "first").unwrap();
        map.put(5u32, "second").unwrap();
        assert_eq!(map.len(), 2);
        // The first entry in probe order wins lookups.
        assert_eq!(map.get(&5), Some(&"first"));
        // Removing it uncovers the second.
        assert_eq!(map.remove(&5), Some("first"));
        assert_eq!(map.get(&5), Some(&"second"));
        assert_eq!(map.remove(&5), Some("second"));
        assert_eq!(map.get(&5), None);
    }

    #[test]
    fn slot_in_stores_default_value() {
        let mut set: FixedMap<u32, ()> = FixedMap::with_capacity(4);
        set.slot_in(3).unwrap();
        assert!(set.contains_key(&3));
        assert!(!set.contains_key(&4));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = FixedMap::with_capacity(4);
        map.put(2u32, 20).unwrap();
        *map.get_mut(&2).unwrap() = 25;
        assert_eq!(map.get(&2), Some(&25));
        assert_eq!(map.get_mut(&99), None);
    }

    #[test]
    fn wrapping_probe_crosses_table_end() {
        // Capacity 4: key 3 homes at slot 3, key 7 also homes at
        // slot 3 and must wrap to slot 0.
        let mut map = FixedMap::with_capacity(4);
        map.put(3u32, 30).unwrap();
        map.put(7u32, 70).unwrap();
        assert_eq!(map.get(&7), Some(&70));
    }

    #[test]
    fn iter_visits_every_live_entry() {
        let mut map = FixedMap::with_capacity(8);
        map.put(1u32, 10).unwrap();
        map.put(2u32, 20).unwrap();
        map.put(3u32, 30).unwrap();
        map.remove(&2);
        let mut pairs: Vec<(u32, i32)> = map.iter().map(|(&k, &v)| (k, v)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(1, 10), (3, 30)]);
    }

    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn zero_capacity_panics() {
        let _ = FixedMap::<u32, u32>::with_capacity(0);
    }

    #[test]
    fn with_capacity_in_uses_the_allocator() {
        let map: FixedMap<u32, u32> =
            FixedMap::with_capacity_in(16, &keel_core::HeapAllocator).unwrap();
        assert_eq!(map.capacity(), 16);
        assert!(map.is_empty());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use std::collections::HashSet;

        use proptest::prelude::*;

        proptest! {
            #[test]
            fn distinct_keys_round_trip(
                keys in proptest::collection::hash_set(0u32..10_000, 1..32),
            ) {
                let keys: Vec<u32> = keys.into_iter().collect();
                let mut map = FixedMap::with_capacity(keys.len());
                for &k in &keys {
                    map.put(k, u64::from(k) * 3).unwrap();
                }
                for &k in &keys {
                    prop_assert_eq!(map.get(&k), Some(&(u64::from(k) * 3)));
                }
            }

            #[test]
            fn holes_never_hide_surviving_keys(
                keys in proptest::collection::hash_set(0u32..1000, 2..24),
                remove_seed: usize,
            ) {
                let keys: Vec<u32> = keys.into_iter().collect();
                let mut map = FixedMap::with_capacity(keys.len());
                for &k in &keys {
                    map.put(k, k).unwrap();
                }
                // Remove roughly half the keys, scattered by the seed.
                let mut removed = HashSet::new();
                for (i, &k) in keys.iter().enumerate() {
                    if (i + remove_seed) % 2 == 0 {
                        prop_assert_eq!(map.remove(&k), Some(k));
                        removed.insert(k);
                    }
                }
                for &k in &keys {
                    if removed.contains(&k) {
                        prop_assert_eq!(map.get(&k), None);
                    } else {
                        prop_assert_eq!(map.get(&k), Some(&k));
                    }
                }
            }
        }
    }
}
