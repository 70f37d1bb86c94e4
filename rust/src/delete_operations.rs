//! DELETE operations for AvlTreeMap.
//!
//! This module contains the recursive removal procedure and its rebalancing
//! pass. Unlike insertion, a removal can shrink a subtree by one level, so
//! rotations may be required at every ancestor on the unwind path.

use std::cmp::Ordering;
use std::mem;

use compare::Compare;

use crate::types::{AvlTreeMap, Link, Node};

impl<K: Clone, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Removes a key from the map, returning its value.
    ///
    /// Returns `None` and leaves the map untouched when the key is absent;
    /// removing from an empty map is an equally valid no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.remove(&1), Some("one"));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (root, removed) = Self::remove_node(&self.cmp, self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Recursive removal from `link`; returns the new subtree root and the
    /// removed value, if any.
    fn remove_node(cmp: &C, link: Link<K, V>, key: &K) -> (Link<K, V>, Option<V>) {
        let Some(mut node) = link else {
            // Descended past an absent child: the key is not in the tree.
            return (None, None);
        };

        let removed = match cmp.compare(key, &node.key) {
            Ordering::Less => {
                let (child, removed) = Self::remove_node(cmp, node.left.take(), key);
                node.left = child;
                removed
            }
            Ordering::Greater => {
                let (child, removed) = Self::remove_node(cmp, node.right.take(), key);
                node.right = child;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // No children: the subtree becomes absent.
                (None, None) => return (None, Some(node.value)),
                // One child: the child is spliced into this node's place.
                (None, Some(child)) | (Some(child), None) => {
                    return (Some(child), Some(node.value))
                }
                // Two children: overwrite this node's contents with its
                // in-order successor's, then remove the successor from the
                // right subtree.
                (Some(left), Some(right)) => {
                    let successor_key = {
                        let mut successor = right.as_ref();
                        while let Some(next) = successor.left.as_deref() {
                            successor = next;
                        }
                        successor.key.clone()
                    };
                    let (new_right, successor_value) =
                        Self::remove_node(cmp, Some(right), &successor_key);
                    node.left = Some(left);
                    node.right = new_right;
                    node.key = successor_key;
                    let old_value = mem::replace(
                        &mut node.value,
                        successor_value
                            .expect("in-order successor must exist in the right subtree"),
                    );
                    Some(old_value)
                }
            },
        };

        if removed.is_none() {
            // Nothing below changed; heights are still exact.
            return (Some(node), None);
        }

        node.update_height();
        (Some(Self::rebalance_after_remove(node)), removed)
    }

    /// Restores the balance invariant at `node` after a removal below it.
    ///
    /// Removal takes away from underneath, so there is no just-inserted key
    /// to steer by; the heavier child's own balance factor selects the case
    /// instead. Balanced-or-same-side-heavy takes the single rotation,
    /// opposite-side-heavy the double.
    fn rebalance_after_remove(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        match node.balance_factor() {
            2 => {
                let left_factor = node
                    .left
                    .as_deref()
                    .expect("left-heavy node must have a left child")
                    .balance_factor();
                if left_factor >= 0 {
                    node.rotate_right()
                } else {
                    let left = node
                        .left
                        .take()
                        .expect("left-heavy node must have a left child");
                    node.left = Some(left.rotate_left());
                    node.rotate_right()
                }
            }
            -2 => {
                let right_factor = node
                    .right
                    .as_deref()
                    .expect("right-heavy node must have a right child")
                    .balance_factor();
                if right_factor <= 0 {
                    node.rotate_left()
                } else {
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

#[cfg(test)]
mod tests {
    use crate::types::{AvlTreeMap, Node};

    fn key_at(node: Option<&Node<i32, i32>>) -> Option<i32> {
        node.map(|n| n.key)
    }

    fn build(keys: &[i32]) -> AvlTreeMap<i32, i32> {
        let mut tree = AvlTreeMap::new();
        for &key in keys {
            tree.insert(key, key);
        }
        tree
    }

    #[test]
    fn test_remove_on_empty_tree_is_a_noop() {
        let mut tree: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        assert_eq!(tree.remove(&1), None);
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_remove_single_key_empties_the_tree() {
        let mut tree = build(&[1]);
        assert_eq!(tree.remove(&1), Some(1));
        assert!(tree.is_empty());
        assert!(tree.root.is_none());
    }

    #[test]
    fn test_remove_absent_key_leaves_size_unchanged() {
        let mut tree = build(&[1, 2, 3]);
        assert_eq!(tree.remove(&42), None);
        assert_eq!(tree.len(), 3);
        assert!(!tree.contains_key(&42));
    }

    #[test]
    fn test_left_left_delete_rebalance() {
        let mut tree = build(&[4, 2, 6, 3, 5, 1, 7]);
        tree.remove(&7);
        tree.remove(&5);
        tree.remove(&6);
        let root = tree.root.as_deref().expect("tree.root must exist");
        assert_eq!(root.key, 2);
        assert_eq!(root.value, 2);
        assert_eq!(key_at(root.left.as_deref()), Some(1));
        assert_eq!(key_at(root.right.as_deref()), Some(4));
        let right = root.right.as_deref().unwrap();
        assert_eq!(key_at(right.left.as_deref()), Some(3));
    }

    #[test]
    fn test_right_right_delete_rebalance() {
        let mut tree = build(&[4, 2, 6, 3, 5, 1, 7]);
        tree.remove(&1);
        tree.remove(&3);
        tree.remove(&2);
        let root = tree.root.as_deref().expect("tree.root must exist");
        assert_eq!(root.key, 6);
        assert_eq!(key_at(root.left.as_deref()), Some(4));
        assert_eq!(key_at(root.right.as_deref()), Some(7));
        let left = root.left.as_deref().unwrap();
        assert_eq!(key_at(left.right.as_deref()), Some(5));
    }

    #[test]
    fn test_left_right_delete_rebalance() {
        let mut tree = build(&[6, 2, 7, 1, 8, 4, 3, 5]);
        tree.remove(&8);
        let root = tree.root.as_deref().expect("tree.root must exist");
        assert_eq!(root.key, 4);
        let left = root.left.as_deref().unwrap();
        let right = root.right.as_deref().unwrap();
        assert_eq!(left.key, 2);
        assert_eq!(key_at(left.left.as_deref()), Some(1));
        assert_eq!(key_at(left.right.as_deref()), Some(3));
        assert_eq!(right.key, 6);
        assert_eq!(key_at(right.left.as_deref()), Some(5));
        assert_eq!(key_at(right.right.as_deref()), Some(7));
    }

    #[test]
    fn test_right_left_delete_rebalance() {
        let mut tree = build(&[3, 2, 7, 1, 8, 5, 4, 6]);
        tree.remove(&1);
        let root = tree.root.as_deref().expect("tree.root must exist");
        assert_eq!(root.key, 5);
        let left = root.left.as_deref().unwrap();
        let right = root.right.as_deref().unwrap();
        assert_eq!(left.key, 3);
        assert_eq!(key_at(left.left.as_deref()), Some(2));
        assert_eq!(key_at(left.right.as_deref()), Some(4));
        assert_eq!(right.key, 7);
        assert_eq!(key_at(right.left.as_deref()), Some(6));
        assert_eq!(key_at(right.right.as_deref()), Some(8));
    }

    #[test]
    fn test_splice_takes_right_child_when_left_absent() {
        let mut tree = build(&[1, 2]);
        tree.remove(&1);
        let root = tree.root.as_deref().expect("tree.root must exist");
        assert_eq!(root.key, 2);
        assert_eq!(root.value, 2);
        assert_eq!(root.height, 0);
    }

    #[test]
    fn test_splice_takes_left_child_when_right_absent() {
        let mut tree = build(&[2, 1]);
        tree.remove(&2);
        let root = tree.root.as_deref().expect("tree.root must exist");
        assert_eq!(root.key, 1);
        assert_eq!(root.value, 1);
        assert_eq!(root.height, 0);
    }

    #[test]
    fn test_two_leaf_children_promotes_the_successor() {
        let mut tree = build(&[2, 1, 3]);
        tree.remove(&2);
        let root = tree.root.as_deref().expect("tree.root must exist");
        assert_eq!(root.key, 3);
        assert_eq!(root.value, 3);
        assert_eq!(key_at(root.left.as_deref()), Some(1));
    }

    #[test]
    fn test_successor_is_leftmost_of_right_subtree() {
        let mut tree = build(&[2, 1, 4, 3, 5]);
        tree.remove(&2);
        let root = tree.root.as_deref().expect("tree.root must exist");
        assert_eq!(root.key, 3);
        assert_eq!(root.value, 3);
        assert!(tree.contains_key(&4));
        assert!(tree.contains_key(&5));
        assert!(!tree.contains_key(&2));
        tree.validate().expect("invariants must hold");
    }

    #[test]
    fn test_remove_then_contains_is_false() {
        let mut tree = build(&[5, 3, 8, 1]);
        assert_eq!(tree.remove(&3), Some(3));
        assert!(!tree.contains_key(&3));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_drain_in_mixed_order_keeps_invariants() {
        let mut tree = build(&[
            50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43, 56, 68, 81, 93,
        ]);
        for key in [25, 93, 50, 6, 75, 12, 87, 37, 62, 18, 31, 43, 56, 68, 81] {
            assert_eq!(tree.remove(&key), Some(key));
            tree.validate().expect("invariants must hold after every removal");
        }
        assert!(tree.is_empty());
    }
}
