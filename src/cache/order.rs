//! Insertion Order Module
//!
//! Tracks the order in which keys first entered the cache.

use std::collections::vec_deque;
use std::collections::VecDeque;

// == Insertion Order ==
/// Queue of keys in first-insertion order, each tagged with a sequence number.
///
/// Keys are stored in a VecDeque where:
/// - Front = oldest insertion
/// - Back = newest insertion
///
/// Removing a key from the cache does not touch this queue. The stale
/// `(seq, key)` pair stays behind as a tombstone and is skipped by
/// [`pop_oldest`](Self::pop_oldest) once the owner reports it dead.
#[derive(Debug, Clone, Default)]
pub struct InsertionOrder<K> {
    /// Keys with their insertion stamps
    queue: VecDeque<(u64, K)>,
    /// Stamp handed to the next pushed key
    next_seq: u64,
}

impl<K> InsertionOrder<K> {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            next_seq: 0,
        }
    }

    // == Push ==
    /// Appends a key as the newest insertion and returns its stamp.
    pub fn push(&mut self, key: K) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push_back((seq, key));
        seq
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest key for which `is_live` holds.
    ///
    /// Tombstones in front of it are dropped along the way.
    pub fn pop_oldest<F>(&mut self, mut is_live: F) -> Option<K>
    where
        F: FnMut(&K, u64) -> bool,
    {
        while let Some((seq, key)) = self.queue.pop_front() {
            if is_live(&key, seq) {
                return Some(key);
            }
        }
        None
    }

    // == Peek Oldest ==
    /// Returns the oldest key for which `is_live` holds, without removing it.
    pub fn peek_oldest<F>(&self, mut is_live: F) -> Option<&K>
    where
        F: FnMut(&K, u64) -> bool,
    {
        self.queue
            .iter()
            .find(|(seq, key)| is_live(key, *seq))
            .map(|(_, key)| key)
    }

    // == Compact ==
    /// Drops every tombstone, keeping live keys in order.
    pub fn compact<F>(&mut self, mut is_live: F)
    where
        F: FnMut(&K, u64) -> bool,
    {
        self.queue.retain(|(seq, key)| is_live(key, *seq));
    }

    /// Iterates over all tracked pairs, tombstones included, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, (u64, K)> {
        self.queue.iter()
    }

    // == Length ==
    /// Returns the number of tracked pairs, tombstones included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    // == Clear ==
    /// Forgets every key. Stamps keep increasing afterwards.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order: InsertionOrder<&str> = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_order_push_assigns_increasing_seq() {
        let mut order = InsertionOrder::new();

        assert_eq!(order.push("a"), 0);
        assert_eq!(order.push("b"), 1);
        assert_eq!(order.push("c"), 2);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_order_pop_oldest_all_live() {
        let mut order = InsertionOrder::new();
        order.push("a");
        order.push("b");

        assert_eq!(order.pop_oldest(|_, _| true), Some("a"));
        assert_eq!(order.pop_oldest(|_, _| true), Some("b"));
        assert_eq!(order.pop_oldest(|_, _| true), None);
    }

    #[test]
    fn test_order_pop_oldest_skips_tombstones() {
        let mut order = InsertionOrder::new();
        order.push("a");
        order.push("b");
        order.push("c");

        // "a" and "b" were removed by the owner
        let popped = order.pop_oldest(|key, _| *key == "c");
        assert_eq!(popped, Some("c"));
        assert!(order.is_empty());
    }

    #[test]
    fn test_order_pop_oldest_matches_on_seq() {
        let mut order = InsertionOrder::new();
        order.push("a"); // seq 0, stale
        order.push("a"); // seq 1, live

        let popped = order.pop_oldest(|key, seq| *key == "a" && seq == 1);
        assert_eq!(popped, Some("a"));
        assert!(order.is_empty());
    }

    #[test]
    fn test_order_peek_oldest_does_not_remove() {
        let mut order = InsertionOrder::new();
        order.push("a");
        order.push("b");

        assert_eq!(order.peek_oldest(|key, _| *key != "a"), Some(&"b"));
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_order_compact_keeps_order() {
        let mut order = InsertionOrder::new();
        for key in ["a", "b", "c", "d"] {
            order.push(key);
        }

        order.compact(|key, _| *key == "b" || *key == "d");

        let keys: Vec<_> = order.iter().map(|(_, key)| *key).collect();
        assert_eq!(keys, vec!["b", "d"]);
    }

    #[test]
    fn test_order_clear_keeps_seq_monotonic() {
        let mut order = InsertionOrder::new();
        order.push("a");
        order.push("b");
        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.push("c"), 2);
    }
}
