//! AVL tree implementation in Rust with dict-like API.
//!
//! This crate provides an ordered key/value map backed by a height-balanced
//! binary search tree, supporting insertion, deletion, point lookup,
//! membership test, and minimum/maximum retrieval in O(log n) worst case,
//! regardless of insertion order.
//!
//! Ordering and key equality come exclusively from a comparator fixed at
//! construction: the keys' natural `Ord` by default, or any total order
//! supplied through [`AvlTreeMap::with_cmp`].
//!
//! # Examples
//!
//! ```
//! use avltree::AvlTreeMap;
//!
//! let mut tree = AvlTreeMap::new();
//! tree.insert(3, "three");
//! tree.insert(1, "one");
//! tree.insert(2, "two");
//!
//! assert_eq!(tree.get(&2), Some(&"two"));
//! assert_eq!(tree.find_minimum(), Some(&1));
//! assert_eq!(tree.remove(&1), Some("one"));
//! assert_eq!(tree.len(), 2);
//! ```

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod node;
mod types;
mod validation;

pub use error::{AvlTreeError, KeyResult, TreeResult};
pub use types::AvlTreeMap;

use compare::Compare;

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    // ========================================================================
    // SIZE AND MISC OPERATIONS
    // ========================================================================

    /// Returns the number of elements in the tree. O(1).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Height of the tree: 0 for a single node, -1 for an empty tree
    /// (absent subtrees count as -1 throughout).
    pub fn height(&self) -> i32 {
        node::height_of(&self.root)
    }

    /// Drops every element from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }
}

#[cfg(test)]
mod round_trip_tests {
    use super::*;

    #[test]
    fn test_insert_get_remove_round_trip() {
        let mut tree = AvlTreeMap::new();
        for key in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
            assert!(tree.insert(key, key * 100));
            assert_eq!(tree.get(&key), Some(&(key * 100)));
        }
        assert_eq!(tree.len(), 9);

        for key in 1..=9 {
            assert_eq!(tree.remove(&key), Some(key * 100));
            assert!(!tree.contains_key(&key));
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_is_empty_follows_insert_and_remove() {
        let mut tree = AvlTreeMap::new();
        assert!(tree.is_empty());
        tree.insert(1, ());
        assert!(!tree.is_empty());
        tree.remove(&1);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_size_counts_up_to_ten() {
        let mut tree = AvlTreeMap::new();
        assert_eq!(tree.len(), 0);
        for key in 1..=10 {
            tree.insert(key, ());
            assert_eq!(tree.len(), key as usize);
        }
    }

    #[test]
    fn test_clear_resets_the_tree() {
        let mut tree = AvlTreeMap::new();
        for key in 0..10 {
            tree.insert(key, ());
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.find_minimum(), None);

        // The tree is fully usable after a clear.
        tree.insert(1, ());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_height_of_small_trees() {
        let mut tree = AvlTreeMap::new();
        assert_eq!(tree.height(), -1);
        tree.insert(1, ());
        assert_eq!(tree.height(), 0);
        tree.insert(2, ());
        assert_eq!(tree.height(), 1);
        tree.insert(3, ());
        // The right-right rotation keeps three nodes at height 1.
        assert_eq!(tree.height(), 1);
    }
}
