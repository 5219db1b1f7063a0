//! Thread-safe wrapper around [`LruCache`].
//!
//! Every operation, `get` included, mutates recency, so the whole cache sits
//! behind one exclusive lock. Locking the index and the recency list
//! separately would open a window where the two disagree.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::LruCache;
use crate::error::Result;

/// Cloneable handle to an [`LruCache`] shared across threads.
///
/// Clones point at the same underlying cache. Lock hold time is O(1) per
/// operation; `get` clones the value out so the lock is released before the
/// caller touches it.
pub struct SharedLruCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> SharedLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a shared cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity)?)),
        })
    }

    /// Get a clone of the value, promoting the key to most-recent on a hit.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    /// Insert or update a key-value pair, returning any evicted entry.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().put(key, value)
    }

    /// Remove a key, returning its value if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Drop every entry, keeping the capacity.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    /// Keys in access order, most-recent first.
    pub fn snapshot(&self) -> Vec<K> {
        self.inner.lock().snapshot()
    }
}

impl<K, V> Clone for SharedLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
