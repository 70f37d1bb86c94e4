//! INSERT operations for AvlTreeMap.
//!
//! This module contains the recursive insertion procedure and its
//! rebalancing pass. Each recursive call returns the (possibly rotated) root
//! of its subtree, which the caller re-links into its own child slot; no
//! parent pointers exist anywhere in the tree.

use std::cmp::Ordering;

use compare::Compare;

use crate::types::{AvlTreeMap, Link, Node};

impl<K: Clone, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Inserts a key/value pair.
    ///
    /// Returns `true` and grows the map by one if the key was new. Inserting
    /// a key that already exists (under the comparator) is a pure no-op: the
    /// structure, the size, and the stored value are all left untouched, and
    /// `false` is returned. Use [`get_mut`](AvlTreeMap::get_mut) to replace
    /// a stored value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// assert!(tree.insert(1, "one"));
    /// assert!(!tree.insert(1, "uno"));
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        // The rebalancing pass disambiguates single vs. double rotation by
        // comparing the inserted key against the heavier child's key, so it
        // outlives the move of `key` into its new node.
        let probe = key.clone();
        let (root, inserted) =
            Self::insert_node(&self.cmp, self.root.take(), key, value, &probe);
        self.root = Some(root);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Recursive insert into `link`; returns the new subtree root and
    /// whether a node was actually added.
    fn insert_node(
        cmp: &C,
        link: Link<K, V>,
        key: K,
        value: V,
        inserted_key: &K,
    ) -> (Box<Node<K, V>>, bool) {
        let Some(mut node) = link else {
            return (Node::new(key, value), true);
        };

        match cmp.compare(&key, &node.key) {
            Ordering::Less => {
                let (child, inserted) =
                    Self::insert_node(cmp, node.left.take(), key, value, inserted_key);
                node.left = Some(child);
                if !inserted {
                    return (node, false);
                }
            }
            Ordering::Greater => {
                let (child, inserted) =
                    Self::insert_node(cmp, node.right.take(), key, value, inserted_key);
                node.right = Some(child);
                if !inserted {
                    return (node, false);
                }
            }
            // Duplicate key: no structural change, no value overwrite.
            Ordering::Equal => return (node, false),
        }

        node.update_height();
        (Self::rebalance_after_insert(cmp, node, inserted_key), true)
    }

    /// Restores the balance invariant at `node` after an insertion below it.
    ///
    /// Case selection compares the inserted key against the heavier child's
    /// key; the child's own balance factor alone cannot distinguish the
    /// single from the double rotation here. At most one rebalancing action
    /// happens per insertion, because a single action restores the subtree
    /// to its pre-insert height.
    fn rebalance_after_insert(
        cmp: &C,
        mut node: Box<Node<K, V>>,
        inserted_key: &K,
    ) -> Box<Node<K, V>> {
        match node.balance_factor() {
            2 => {
                let in_outer_grandchild = {
                    let left = node
                        .left
                        .as_deref()
                        .expect("left-heavy node must have a left child");
                    cmp.compares_lt(inserted_key, &left.key)
                };
                if in_outer_grandchild {
                    // Left-left: single right rotation.
                    node.rotate_right()
                } else {
                    // Left-right: rotate the left child left, then this
                    // node right.
                    let left = node
                        .left
                        .take()
                        .expect("left-heavy node must have a left child");
                    node.left = Some(left.rotate_left());
                    node.rotate_right()
                }
            }
            -2 => {
                let in_outer_grandchild = {
                    let right = node
                        .right
                        .as_deref()
                        .expect("right-heavy node must have a right child");
                    cmp.compares_gt(inserted_key, &right.key)
                };
                if in_outer_grandchild {
                    // Right-right: single left rotation.
                    node.rotate_left()
                } else {
                    // Right-left: rotate the right child right, then this
                    // node left.
                    let right = node
                        .right
                        .take()
                        .expect("right-heavy node must have a right child");
                    node.right = Some(right.rotate_right());
                    node.rotate_left()
                }
            }
            _ => node,
        }
    }
}
