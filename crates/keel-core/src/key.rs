//! The [`MapKey`] hashing capability for the fixed-capacity maps.
//!
//! The maps use a checksum-style hash: the sum of the key's bytes,
//! reduced modulo table capacity at the call site. It is deliberately
//! simple and non-avalanching — keys that differ only in byte order
//! collide, and dense small-integer key sets cluster. The maps'
//! full-cycle probing keeps lookups correct regardless.

/// A key usable in the fixed-capacity open-addressing maps.
///
/// `checksum` must be deterministic and consistent with `Eq`: equal
/// keys return equal checksums. The impls below sum the key's byte
/// representation (little-endian for integers, UTF-8 for strings), so
/// types with padding or interior identity never feed garbage into
/// the hash.
pub trait MapKey: Eq {
    /// Sum of the key's bytes. Reduced modulo capacity by the map.
    fn checksum(&self) -> u32;
}

fn byte_sum(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |sum, &b| sum.wrapping_add(u32::from(b)))
}

macro_rules! impl_map_key_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MapKey for $ty {
                fn checksum(&self) -> u32 {
                    byte_sum(&self.to_le_bytes())
                }
            }
        )*
    };
}

impl_map_key_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl MapKey for bool {
    fn checksum(&self) -> u32 {
        u32::from(*self)
    }
}

impl MapKey for char {
    fn checksum(&self) -> u32 {
        u32::from(*self).checksum()
    }
}

impl<const N: usize> MapKey for [u8; N] {
    fn checksum(&self) -> u32 {
        byte_sum(self)
    }
}

impl MapKey for str {
    fn checksum(&self) -> u32 {
        byte_sum(self.as_bytes())
    }
}

impl MapKey for String {
    fn checksum(&self) -> u32 {
        self.as_str().checksum()
    }
}

impl<K: MapKey + ?Sized> MapKey for &K {
    fn checksum(&self) -> u32 {
        (*self).checksum()
    }
}

impl<A: MapKey, B: MapKey> MapKey for (A, B) {
    fn checksum(&self) -> u32 {
        self.0.checksum().wrapping_add(self.1.checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_checksum_is_byte_sum() {
        // 0x0109 little-endian is [0x09, 0x01].
        assert_eq!(0x0109u16.checksum(), 0x09 + 0x01);
        assert_eq!(1u32.checksum(), 1);
        assert_eq!(9u32.checksum(), 9);
    }

    #[test]
    fn negative_integers_hash_their_twos_complement_bytes() {
        assert_eq!((-1i8).checksum(), 0xFF);
        assert_eq!((-1i32).checksum(), 0xFF * 4);
    }

    #[test]
    fn string_checksum_sums_utf8_bytes() {
        assert_eq!("ab".checksum(), u32::from(b'a') + u32::from(b'b'));
        assert_eq!("ab".checksum(), String::from("ab").checksum());
    }

    #[test]
    fn reference_matches_value() {
        let key = 42u64;
        assert_eq!((&key).checksum(), key.checksum());
    }

    #[test]
    fn pair_checksum_is_component_sum() {
        assert_eq!((3u8, 4u8).checksum(), 7);
    }

    #[test]
    fn byte_order_permutations_collide() {
        // The checksum is order-insensitive, a documented property of
        // the hash. Relied on by nothing, but worth pinning.
        assert_eq!([1u8, 2, 3].checksum(), [3u8, 2, 1].checksum());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn equal_strings_have_equal_checksums(s in ".*") {
                let copy = s.clone();
                prop_assert_eq!(s.checksum(), copy.checksum());
            }

            #[test]
            fn u64_checksum_bounded_by_max_byte_sum(v: u64) {
                prop_assert!(v.checksum() <= 8 * 255);
            }
        }
    }
}
