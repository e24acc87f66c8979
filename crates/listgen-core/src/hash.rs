//! Fast hash map and hash set type aliases.
//!
//! Derived identifiers and excluded file names are short string keys, which
//! is the case the Fx hash from `rustc-hash` is built for. None of these
//! tables are exposed to untrusted input at a scale where hash flooding
//! matters.
//!
//! # Examples
//!
//! ```
//! use listgen_core::{FxHashMap, FxHashSet, fx_hash_map, fx_hash_set};
//!
//! let mut names: FxHashMap<String, String> = fx_hash_map();
//! names.insert("Colors".to_owned(), "colors.txt".to_owned());
//!
//! let excluded: FxHashSet<&str> = fx_hash_set();
//! assert!(excluded.is_empty());
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// Creates a new empty [`FxHashMap`].
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new empty [`FxHashSet`].
#[inline]
#[must_use]
pub fn fx_hash_set<V>() -> FxHashSet<V> {
    FxHashSet::default()
}

/// Creates a new [`FxHashMap`] able to hold `capacity` entries without
/// reallocating.
///
/// # Examples
///
/// ```
/// use listgen_core::hash::fx_hash_map_with_capacity;
///
/// let map: listgen_core::FxHashMap<String, usize> = fx_hash_map_with_capacity(16);
/// assert!(map.capacity() >= 16);
/// ```
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fx_hash_map_operations() {
        let mut map: FxHashMap<&str, &str> = fx_hash_map();
        map.insert("StaticLists", "static-lists.txt");
        assert_eq!(map.get("StaticLists"), Some(&"static-lists.txt"));
        assert_eq!(map.get("Colors"), None);
    }

    #[test]
    fn test_fx_hash_set_operations() {
        let mut set: FxHashSet<&str> = fx_hash_set();
        assert!(set.insert("static-lists.go"));
        assert!(!set.insert("static-lists.go"));
        assert!(set.contains("static-lists.go"));
    }

    #[test]
    fn test_fx_hash_map_with_capacity() {
        let map: FxHashMap<String, usize> = fx_hash_map_with_capacity(100);
        assert!(map.capacity() >= 100);
    }
}
