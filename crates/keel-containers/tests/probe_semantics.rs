//! End-to-end probe-chain scenarios shared by both map variants.

use keel_containers::{FixedMap, FixedStringMap};

#[test]
fn colliding_integer_keys_chain_and_survive_removal() {
    // Capacity 8: keys 1, 9, 17, 25 all home at slot 1.
    let mut map = FixedMap::with_capacity(8);
    for k in [1u32, 9, 17, 25] {
        map.put(k, k * 10).unwrap();
    }
    // Punch two holes in the middle of the chain.
    assert_eq!(map.remove(&9), Some(90));
    assert_eq!(map.remove(&17), Some(170));

    assert_eq!(map.get(&1), Some(&10));
    assert_eq!(map.get(&25), Some(&250));
    assert_eq!(map.get(&9), None);
    assert_eq!(map.len(), 2);
}

#[test]
fn map_fills_to_capacity_through_collisions() {
    // Every key hashes to the same home slot; the chain must wrap
    // through the whole table and still fill every slot.
    let capacity = 8;
    let mut map = FixedMap::with_capacity(capacity);
    let keys: Vec<u32> = (0..capacity as u32).map(|i| 1 + i * 8).collect();
    for &k in &keys {
        map.put(k, u64::from(k)).unwrap();
    }
    assert!(map.is_full());
    for &k in &keys {
        assert_eq!(map.get(&k), Some(&u64::from(k)));
    }
}

#[test]
fn string_map_mirrors_integer_map_semantics() {
    let mut names = FixedStringMap::with_capacity(16);
    names.put("arena", 1).unwrap();
    names.put("pool", 2).unwrap();
    names.put("bucket", 3).unwrap();

    assert_eq!(names.remove("pool"), Some(2));
    assert_eq!(names.get("arena"), Some(&1));
    assert_eq!(names.get("bucket"), Some(&3));

    // Duplicate put inserts a second entry under a fresh owned key.
    names.put("arena", 10).unwrap();
    assert_eq!(names.len(), 3);
    assert_eq!(names.remove("arena"), Some(1));
    assert_eq!(names.get("arena"), Some(&10));
}
