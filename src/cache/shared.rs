//! Shared Cache Module
//!
//! A cloneable, lock-guarded handle around [`FifoCache`] for use across threads.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::FifoCache;
use crate::error::Result;

// == Shared FIFO Cache ==
/// Thread-safe variant of [`FifoCache`].
///
/// Every operation takes one exclusive lock for its whole duration, so a
/// put and the eviction it triggers are observed as a single step. Clones
/// share the same underlying cache.
///
/// Lookups hand back clones of the stored value since the guard cannot
/// outlive the call. Use [`with`](Self::with) to borrow instead.
#[derive(Debug)]
pub struct SharedFifoCache<K, V> {
    inner: Arc<Mutex<FifoCache<K, V>>>,
}

impl<K, V> Clone for SharedFifoCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> From<FifoCache<K, V>> for SharedFifoCache<K, V> {
    fn from(cache: FifoCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

impl<K, V> SharedFifoCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        FifoCache::new(capacity).map(Self::from)
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with<R>(&self, f: impl FnOnce(&mut FifoCache<K, V>) -> R) -> R {
        let mut cache = self.inner.lock();
        f(&mut cache)
    }

    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    /// Returns a clone of the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
