//! Cache Entry Module
//!
//! Defines the slot that holds a stored value together with its insertion stamp.

// == Cache Entry ==
/// A stored value plus the sequence number assigned when its key was first inserted.
///
/// The sequence number is what ties an entry to its position in the
/// insertion-order queue. Replacing the value keeps the stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion sequence number, strictly increasing per cache
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `seq`.
    pub fn new(value: V, seq: u64) -> Self {
        Self { value, seq }
    }

    // == Replace ==
    /// Swaps in a new value, returning the old one. The stamp is untouched.
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry and returns the value.
    pub fn into_value(self) -> V {
        self.value
    }
}
