//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order tracking.

use std::borrow::Borrow;
use std::collections::{vec_deque, HashMap};
use std::hash::Hash;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, InsertionOrder};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == FIFO Cache ==
/// A key-value cache holding at most `capacity` entries.
///
/// Once a put of a new key pushes the size past capacity, the entry whose
/// key was inserted earliest is evicted in the same call. Reads and value
/// replacement never change an entry's position.
///
/// Not synchronized; see [`SharedFifoCache`](crate::cache::SharedFifoCache)
/// for a lock-guarded handle.
///
/// # Example
/// ```
/// use fifo_cache::FifoCache;
///
/// let mut cache = FifoCache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.put("c", 3);
///
/// assert!(!cache.contains("a"));
/// assert_eq!(cache.get("c"), Some(&3));
/// ```
#[derive(Debug, Clone)]
pub struct FifoCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// First-insertion order of keys
    order: InsertionOrder<K>,
    /// Maximum number of entries allowed
    capacity: usize,
}

/// Returns true if `key` is present and was stamped with `seq`.
fn is_live<K, V>(entries: &HashMap<K, CacheEntry<V>>, key: &K, seq: u64) -> bool
where
    K: Hash + Eq,
{
    entries.get(key).is_some_and(|entry| entry.seq == seq)
}

impl<K, V> FifoCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a new cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Creates a new cache from an already-validated capacity.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        debug!("Creating FIFO cache with capacity={}", capacity);
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            capacity: capacity.get(),
        }
    }

    /// Creates a new cache sized by `config.capacity`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Put ==
    /// Stores a key-value pair, returning the previous value for `key`.
    ///
    /// An existing key keeps its place in insertion order and never causes
    /// an eviction. A new key is appended as the newest entry; if that puts
    /// the cache over capacity, exactly one entry (the oldest) is dropped.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.entries.get_mut(&key) {
            return Some(entry.replace(value));
        }

        let seq = self.order.push(key.clone());
        self.entries.insert(key, CacheEntry::new(value, seq));

        if self.entries.len() > self.capacity && self.pop_oldest().is_some() {
            trace!(
                "Evicted oldest entry (capacity={}, len={})",
                self.capacity,
                self.entries.len()
            );
        }

        None
    }

    // == Get ==
    /// Returns a reference to the value for `key`. Does not affect eviction order.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value for `key`. Does not affect eviction order.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key).map(|entry| &mut entry.value)
    }

    // == Remove ==
    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.entries.remove(key)?;
        self.compact_if_sparse();
        Some(entry.into_value())
    }

    // == Contains ==
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Oldest ==
    /// Returns the entry that would be evicted next, without removing it.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        let entries = &self.entries;
        let key = self.order.peek_oldest(|key, seq| is_live(entries, key, seq))?;
        entries.get(key).map(|entry| (key, &entry.value))
    }

    /// Removes and returns the oldest entry.
    pub fn pop_oldest(&mut self) -> Option<(K, V)> {
        let entries = &self.entries;
        let key = self.order.pop_oldest(|key, seq| is_live(entries, key, seq))?;
        let entry = self.entries.remove(&key)?;
        Some((key, entry.into_value()))
    }

    // == Clear ==
    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!("Clearing FIFO cache ({} entries)", self.entries.len());
        }
        self.entries.clear();
        self.order.clear();
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Iteration ==
    /// Iterates over entries from oldest to newest insertion.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            order: self.order.iter(),
            entries: &self.entries,
            remaining: self.entries.len(),
        }
    }

    /// Iterates over keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over values from oldest to newest insertion.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    // == Compaction ==
    /// Drops tombstones once they outnumber live entries, keeping the
    /// order queue within twice the live size.
    fn compact_if_sparse(&mut self) {
        if self.order.len() > 2 * self.entries.len() {
            let entries = &self.entries;
            self.order.compact(|key, seq| is_live(entries, key, seq));
        }
    }
}

impl<K, V> Extend<(K, V)> for FifoCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Puts each pair in turn, so each pair evicts at most one entry.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a FifoCache<K, V>
where
    K: Hash + Eq + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// == Iterator ==
/// Insertion-order iterator over a [`FifoCache`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    order: vec_deque::Iter<'a, (u64, K)>,
    entries: &'a HashMap<K, CacheEntry<V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Hash + Eq,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entries: &'a HashMap<K, CacheEntry<V>> = self.entries;
        for (seq, key) in self.order.by_ref() {
            if let Some(entry) = entries.get(key) {
                if entry.seq == *seq {
                    self.remaining -= 1;
                    return Some((key, &entry.value));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> where K: Hash + Eq {}
