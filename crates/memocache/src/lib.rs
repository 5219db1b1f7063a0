//! # memocache
//!
//! Fixed-capacity LRU key-value cache with O(1) lookup, insertion, and
//! eviction.
//!
//! ## Architecture
//! - **Index**: AHash-keyed map from key to a handle (O(1) lookup)
//! - **Recency list**: arena-backed doubly-linked list, most-recent first
//!   (O(1) promotion and eviction)
//! - **Shared wrapper**: one `parking_lot::Mutex` over the whole cache for
//!   cross-thread use
//!
//! The index and the list always hold the same key set; a full cache evicts
//! the least-recently-used entry to make room.
//!
//! ```
//! use memocache::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3); // Evicts "b", the least recently used
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.snapshot(), vec!["c", "a"]);
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod list;
mod shared;

pub use cache::LruCache;
pub use error::{Error, Result};
pub use shared::SharedLruCache;
