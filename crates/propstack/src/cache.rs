use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use parking_lot::Mutex;

use crate::source::{is_blank, Source};

/// Capacity used when a cache is requested with a capacity below 1.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// A fixed-capacity map with least-recently-used eviction.
///
/// `get` on a hit refreshes the entry's recency; `put` inserts or updates the
/// entry as most-recently-used and evicts the least-recently-used entry once
/// the capacity is exceeded. Not internally synchronized — wrap it in a lock
/// for shared use (see [`CacheSource`]).
pub struct LruCache<K, V> {
    capacity: usize,
    map: HashMap<K, V>,
    // Recency order, least-recently-used at the front.
    order: VecDeque<K>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries. A capacity below 1
    /// is corrected to [`DEFAULT_CACHE_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity < 1 {
            DEFAULT_CACHE_CAPACITY
        } else {
            capacity
        };
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if !self.map.contains_key(key) {
            return None;
        }
        self.promote(key);
        self.map.get(key).cloned()
    }

    pub fn put(&mut self, key: K, value: V) {
        if self.map.insert(key.clone(), value).is_some() {
            self.promote(&key);
            return;
        }
        self.order.push_back(key);
        if self.map.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.map.remove(&evicted);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn promote<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        if let Some(pos) = self.order.iter().position(|k| k.borrow() == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }
}

/// A [`Source`] that answers from its own LRU cache.
///
/// The resolver chain populates it through [`CacheSource::touch`], which only
/// inserts when the key is not already cached — under concurrent misses the
/// first writer wins and later resolutions see its value.
pub struct CacheSource {
    cache: Mutex<LruCache<String, String>>,
}

impl CacheSource {
    /// Create an instance with an internal cache of the specified size. Sizes
    /// below 1 fall back to [`DEFAULT_CACHE_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Insert the key/value pair only if the key is not already cached. A
    /// cached key keeps its existing value (and gets its recency refreshed).
    pub fn touch(&self, key: &str, value: &str) {
        let mut cache = self.cache.lock();
        if cache.get(key).is_none() {
            cache.put(key.to_owned(), value.to_owned());
        }
    }
}

impl Source for CacheSource {
    fn get(&self, key: &str) -> Option<String> {
        if is_blank(key) {
            return None;
        }
        self.cache.lock().get(key)
    }
}
