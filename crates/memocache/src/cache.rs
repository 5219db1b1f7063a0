//! LRU cache façade: key index plus recency list.
//!
//! The index maps each key to a handle into the recency list; the list keeps
//! access order with the most-recent entry at the front. Every public
//! operation leaves the two structures in lockstep: same key set, and each
//! mapped handle resolves to a node holding that key.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::error::{Error, Result};
use crate::list::{Handle, RecencyList};

/// Fixed-capacity cache that evicts the least-recently-used entry.
///
/// `get` and `put` both count as an access and promote the touched key to
/// most-recent. Inserting a new key while full evicts exactly one entry, the
/// current least-recent one.
pub struct LruCache<K, V> {
    map: HashMap<K, Handle, RandomState>,
    list: RecencyList<K, V>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: RecencyList::with_capacity(capacity),
            capacity,
        })
    }

    /// Get a value, promoting the key to most-recent on a hit.
    ///
    /// A miss has no side effect.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let handle = *self.map.get(key)?;
        self.list.move_to_front(handle);
        self.list.value(handle)
    }

    /// Read a value without touching recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key).and_then(|&handle| self.list.value(handle))
    }

    /// The least-recently-used entry, next in line for eviction.
    ///
    /// Read-only; does not promote anything.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let handle = self.list.peek_back().ok()?;
        Some((self.list.key(handle)?, self.list.value(handle)?))
    }

    /// Insert or update a key-value pair, returning the evicted entry if the
    /// insert pushed the cache past capacity.
    ///
    /// Updating an existing key replaces its value in place and promotes it;
    /// the size is unchanged and nothing is evicted.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&handle) = self.map.get(&key) {
            if let Some(slot) = self.list.value_mut(handle) {
                *slot = value;
            }
            self.list.move_to_front(handle);
            return None;
        }

        let handle = self.list.push_front(key.clone(), value);
        self.map.insert(key, handle);

        if self.map.len() > self.capacity {
            // Size exceeds capacity by exactly one, so the list is non-empty.
            match self.list.pop_back() {
                Ok((evicted_key, evicted_value)) => {
                    self.map.remove(&evicted_key);
                    return Some((evicted_key, evicted_value));
                }
                Err(_) => {
                    debug_assert!(false, "evicting from an empty recency list");
                }
            }
        }

        debug_assert_eq!(self.map.len(), self.list.len());
        None
    }

    /// Remove a key, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let handle = self.map.remove(key)?;
        self.list.remove(handle).map(|(_, value)| value)
    }

    /// Current number of entries, at most `capacity`.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check for a key without touching recency.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Drop every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    /// Keys in access order, most-recent first.
    ///
    /// Read-only diagnostic; does not promote anything.
    pub fn snapshot(&self) -> Vec<K> {
        self.list.iter().map(|(key, _)| key.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Index and list must always agree on the key set.
    fn assert_consistent<K: Hash + Eq + Clone, V>(cache: &LruCache<K, V>) {
        let snapshot = cache.snapshot();
        assert_eq!(snapshot.len(), cache.len());
        for key in &snapshot {
            assert!(cache.contains(key));
        }
    }

    #[test]
    fn test_insert_order() {
        let mut cache = LruCache::new(3).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);
        cache.put(3, 30);

        assert_eq!(cache.snapshot(), vec![3, 2, 1]);
        assert_consistent(&cache);
    }

    #[test]
    fn test_get_promotes() {
        let mut cache = LruCache::new(3).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);
        cache.put(3, 30);

        assert_eq!(cache.get(&2), Some(&20));
        assert_eq!(cache.snapshot(), vec![2, 3, 1]);
    }

    #[test]
    fn test_eviction_takes_lru() {
        let mut cache = LruCache::new(3).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);
        cache.put(3, 30);
        cache.get(&2);

        let evicted = cache.put(4, 40);

        assert_eq!(evicted, Some((1, 10)));
        assert_eq!(cache.snapshot(), vec![4, 2, 3]);
        assert_eq!(cache.get(&1), None);
        assert_consistent(&cache);
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = LruCache::new(1).unwrap();

        cache.put(1, 10);
        assert_eq!(cache.put(2, 20), Some((1, 10)));

        assert_eq!(cache.snapshot(), vec![2]);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_update_keeps_size() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, 10);
        assert_eq!(cache.put(1, 20), None);

        assert_eq!(cache.get(&1), Some(&20));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_update_promotes() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);
        cache.put(1, 11); // Refresh 1; 2 becomes LRU

        assert_eq!(cache.put(3, 30), Some((2, 20)));
        assert_eq!(cache.snapshot(), vec![3, 1]);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result: Result<LruCache<u32, u32>> = LruCache::new(0);
        assert_eq!(result.err(), Some(Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_miss_has_no_side_effect() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);
        let before = cache.snapshot();

        assert_eq!(cache.get(&9), None);
        assert_eq!(cache.snapshot(), before);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_peek_does_not_promote() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);

        assert_eq!(cache.peek(&1), Some(&10));
        assert_eq!(cache.snapshot(), vec![2, 1]);

        // 1 is still LRU despite the peek
        assert_eq!(cache.put(3, 30), Some((1, 10)));
    }

    #[test]
    fn test_peek_lru() {
        let mut cache = LruCache::new(3).unwrap();

        assert_eq!(cache.peek_lru(), None);

        cache.put(1, 10);
        cache.put(2, 20);
        assert_eq!(cache.peek_lru(), Some((&1, &10)));

        cache.get(&1);
        assert_eq!(cache.peek_lru(), Some((&2, &20)));
        assert_eq!(cache.snapshot(), vec![1, 2]); // Peek did not promote
    }

    #[test]
    fn test_remove() {
        let mut cache = LruCache::new(3).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);
        cache.put(3, 30);

        assert_eq!(cache.remove(&2), Some(20));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.snapshot(), vec![3, 1]);
        assert_consistent(&cache);
    }

    #[test]
    fn test_remove_missing() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, 10);
        assert_eq!(cache.remove(&9), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = LruCache::new(3).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.snapshot(), Vec::<u32>::new());
        assert_eq!(cache.capacity(), 3);

        // Still usable after clearing
        cache.put(4, 40);
        assert_eq!(cache.get(&4), Some(&40));
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut cache = LruCache::new(4).unwrap();

        for i in 0..100u32 {
            cache.put(i % 7, i);
            assert!(cache.len() <= cache.capacity());
            assert_consistent(&cache);
        }
        for i in 0..100u32 {
            cache.get(&(i % 11));
            assert!(cache.len() <= cache.capacity());
            assert_consistent(&cache);
        }
    }

    #[test]
    fn test_readd_after_eviction() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put(1, 10);
        cache.put(2, 20);
        cache.put(3, 30); // Evicts 1

        cache.put(1, 11);
        assert_eq!(cache.get(&1), Some(&11));
        assert_eq!(cache.snapshot(), vec![1, 3]);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = LruCache::new(2).unwrap();
        let mut b = LruCache::new(2).unwrap();

        a.put(1, "a");
        b.put(1, "b");

        assert_eq!(a.get(&1), Some(&"a"));
        assert_eq!(b.get(&1), Some(&"b"));
    }

    #[test]
    fn test_string_keys() {
        let mut cache = LruCache::new(2).unwrap();

        cache.put("alpha".to_string(), 1);
        cache.put("beta".to_string(), 2);
        cache.put("gamma".to_string(), 3);

        assert_eq!(cache.get(&"alpha".to_string()), None);
        assert_eq!(cache.get(&"beta".to_string()), Some(&2));
        assert_eq!(cache.get(&"gamma".to_string()), Some(&3));
    }
}
