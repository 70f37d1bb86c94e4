//! GET operations for AvlTreeMap.
//!
//! This module contains the read operations: key lookup, membership test,
//! and minimum/maximum retrieval. All of them are comparator-guided descents
//! bounded by the tree height.

use std::cmp::Ordering;

use compare::Compare;

use crate::error::{AvlTreeError, KeyResult};
use crate::types::AvlTreeMap;

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    // ========================================================================
    // PUBLIC GET OPERATIONS
    // ========================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// Returns `None` when the key is absent. "Found" and "not found" are
    /// distinct by construction; a stored value is never conflated with
    /// absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Get a mutable reference to the value associated with a key.
    ///
    /// This is the supported way to replace a stored value, since
    /// [`insert`](AvlTreeMap::insert) deliberately does not overwrite on a
    /// duplicate key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    /// if let Some(value) = tree.get_mut(&1) {
    ///     *value = "uno";
    /// }
    /// assert_eq!(tree.get(&1), Some(&"uno"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Check if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    /// assert!(tree.contains_key(&1));
    /// assert!(!tree.contains_key(&2));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Get the value for a key, or a default when the key is absent.
    pub fn get_or_default<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Get the value for a key, returning an error if the key doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get_item(&1).unwrap(), &"one");
    /// assert!(tree.get_item(&2).is_err());
    /// ```
    pub fn get_item(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(AvlTreeError::KeyNotFound)
    }

    // ========================================================================
    // MINIMUM / MAXIMUM
    // ========================================================================

    /// The smallest key in the tree under the comparator, `None` when empty.
    ///
    /// Follows the all-left chain from the root.
    pub fn find_minimum(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree under the comparator, `None` when empty.
    ///
    /// Follows the all-right chain from the root.
    pub fn find_maximum(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }
}
