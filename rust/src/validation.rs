//! Validation and debugging utilities for AvlTreeMap.
//!
//! This module contains the invariant checks, the crate-private in-order
//! traversal they (and `Debug`) rely on, and a debug printer for the tree
//! structure.

use std::fmt::Debug;

use compare::Compare;

use crate::error::{AvlTreeError, TreeResult};
use crate::types::{AvlTreeMap, Link, Node, EMPTY_HEIGHT};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Check if the tree maintains the AVL invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies, for every reachable node: strict key ordering under the
    /// comparator, exactness of the cached height, and a balance factor in
    /// `{-1, 0, 1}`; and that the size counter equals the number of live
    /// nodes.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        if let Some(root) = self.root.as_deref() {
            self.check_node(root, None, None)?;
        }

        let live_nodes = Self::count_nodes(&self.root);
        if live_nodes != self.size {
            return Err(AvlTreeError::corrupted_tree(
                "size counter",
                &format!("{} live nodes vs size {}", live_nodes, self.size),
            ));
        }
        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> TreeResult<()> {
        self.check_invariants_detailed()
    }

    /// Recursively check one node, threading the open key interval it must
    /// lie in. Returns the node's computed height.
    fn check_node(
        &self,
        node: &Node<K, V>,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> TreeResult<i32> {
        if let Some(lower) = lower {
            if !self.cmp.compares_lt(lower, &node.key) {
                return Err(AvlTreeError::corrupted_tree(
                    "ordering",
                    "key does not lie above its lower bound",
                ));
            }
        }
        if let Some(upper) = upper {
            if !self.cmp.compares_lt(&node.key, upper) {
                return Err(AvlTreeError::corrupted_tree(
                    "ordering",
                    "key does not lie below its upper bound",
                ));
            }
        }

        let left_height = match node.left.as_deref() {
            Some(left) => self.check_node(left, lower, Some(&node.key))?,
            None => EMPTY_HEIGHT,
        };
        let right_height = match node.right.as_deref() {
            Some(right) => self.check_node(right, Some(&node.key), upper)?,
            None => EMPTY_HEIGHT,
        };

        let computed = 1 + left_height.max(right_height);
        if node.height != computed {
            return Err(AvlTreeError::corrupted_tree(
                "height cache",
                &format!("cached {} vs computed {}", node.height, computed),
            ));
        }

        let balance = left_height - right_height;
        if balance.abs() > 1 {
            return Err(AvlTreeError::corrupted_tree(
                "balance",
                &format!("factor {} outside [-1, 1]", balance),
            ));
        }

        Ok(computed)
    }

    /// Count the live nodes actually reachable from the root.
    fn count_nodes(link: &Link<K, V>) -> usize {
        link.as_deref()
            .map_or(0, |node| 1 + Self::count_nodes(&node.left) + Self::count_nodes(&node.right))
    }

    // ========================================================================
    // TRAVERSAL (crate-private; there is no public iteration API)
    // ========================================================================

    /// In-order visit of every entry, smallest key first.
    pub(crate) fn in_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a K, &'a V),
    {
        Self::in_order_node(&self.root, visit);
    }

    fn in_order_node<'a, F>(link: &'a Link<K, V>, visit: &mut F)
    where
        F: FnMut(&'a K, &'a V),
    {
        if let Some(node) = link {
            Self::in_order_node(&node.left, visit);
            visit(&node.key, &node.value);
            Self::in_order_node(&node.right, visit);
        }
    }
}

// ============================================================================
// DEBUGGING UTILITIES
// ============================================================================

impl<K: Debug, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Prints the tree shape for debugging.
    pub fn print_structure(&self) {
        println!("Tree structure:");
        Self::print_node(&self.root, 0);
    }

    fn print_node(link: &Link<K, V>, depth: usize) {
        let indent = "  ".repeat(depth);
        match link.as_deref() {
            Some(node) => {
                println!("{}{:?} [height={}]", indent, node.key, node.height);
                if node.left.is_some() || node.right.is_some() {
                    Self::print_node(&node.left, depth + 1);
                    Self::print_node(&node.right, depth + 1);
                }
            }
            None => println!("{}<empty>", indent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_and_populated_trees_validate() {
        let mut tree = AvlTreeMap::new();
        assert!(tree.check_invariants());
        for key in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            tree.insert(key, ());
        }
        assert!(tree.check_invariants());
        tree.remove(&3);
        tree.remove(&8);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_detects_broken_height_cache() {
        let mut tree = AvlTreeMap::new();
        tree.insert(2, ());
        tree.insert(1, ());
        tree.insert(3, ());
        tree.root.as_deref_mut().unwrap().height = 7;

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.is_corruption());
        assert!(err.to_string().contains("height cache"));
    }

    #[test]
    fn test_detects_ordering_violation() {
        let mut tree = AvlTreeMap::new();
        tree.insert(2, ());
        tree.insert(1, ());
        tree.insert(3, ());
        // Swap two keys behind the comparator's back.
        let root = tree.root.as_deref_mut().unwrap();
        root.left.as_deref_mut().unwrap().key = 9;

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("ordering"));
    }

    #[test]
    fn test_detects_size_counter_drift() {
        let mut tree = AvlTreeMap::new();
        tree.insert(1, ());
        tree.size = 5;

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("size counter"));
    }

    #[test]
    fn test_in_order_visits_keys_ascending() {
        let mut tree = AvlTreeMap::new();
        for key in [5, 1, 4, 2, 3] {
            tree.insert(key, key * 10);
        }
        let mut seen = Vec::new();
        tree.in_order(&mut |key, value| seen.push((*key, *value)));
        assert_eq!(seen, vec![(1, 10), (2, 20), (3, 30), (4, 40), (5, 50)]);
    }
}
