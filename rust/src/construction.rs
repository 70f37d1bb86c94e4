//! Construction and initialization logic for AvlTreeMap.
//!
//! This module contains construction with the natural or a caller-supplied
//! comparator, plus the `Default`, `Clone`, `FromIterator`, and `Extend`
//! implementations.

use compare::{natural, Compare};

use crate::types::AvlTreeMap;

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map ordered by the keys' natural order.
    ///
    /// Even on this path, key equality is decided by the comparator
    /// (`Natural<K>`) returning `Equal`, never by `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let tree: AvlTreeMap<i32, String> = AvlTreeMap::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_cmp(natural())
    }
}

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Creates an empty map ordered by the given comparator.
    ///
    /// The comparator must be a strict total order over `K`; behavior under
    /// a non-total order is unspecified. It is fixed for the lifetime of the
    /// map and used for every ordering and equality decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    /// use compare::{natural, Compare};
    ///
    /// let mut tree = AvlTreeMap::with_cmp(natural().rev());
    /// tree.insert(1, "one");
    /// tree.insert(2, "two");
    /// assert_eq!(tree.find_minimum(), Some(&2));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlTreeMap {
            root: None,
            size: 0,
            cmp,
        }
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Clone for AvlTreeMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Compare<K> + Clone,
{
    fn clone(&self) -> Self {
        AvlTreeMap {
            root: self.root.clone(),
            size: self.size,
            cmp: self.cmp.clone(),
        }
    }
}

impl<K: Ord + Clone, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    /// Builds a map from an iterator of entries.
    ///
    /// Because duplicate insertion is a no-op, the *first* occurrence of a
    /// key wins and later occurrences are dropped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = AvlTreeMap::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Clone, V, C: Compare<K>> Extend<(K, V)> for AvlTreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
