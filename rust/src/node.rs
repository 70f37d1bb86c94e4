//! Node implementation for AvlTreeMap.
//!
//! This module contains the node-level operations: construction, cached
//! height bookkeeping, balance factors, and the two rotation primitives that
//! restructure a 3-node neighborhood in constant time.

use crate::types::{Link, Node, EMPTY_HEIGHT};

/// Height of the subtree behind `link`, [`EMPTY_HEIGHT`] when absent.
pub(crate) fn height_of<K, V>(link: &Link<K, V>) -> i32 {
    link.as_deref().map_or(EMPTY_HEIGHT, |node| node.height)
}

impl<K, V> Node<K, V> {
    /// Creates a new leaf node holding `key` and `value`.
    pub(crate) fn new(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    /// Height of the left subtree, -1 if absent.
    pub(crate) fn left_height(&self) -> i32 {
        height_of(&self.left)
    }

    /// Height of the right subtree, -1 if absent.
    pub(crate) fn right_height(&self) -> i32 {
        height_of(&self.right)
    }

    /// Recomputes this node's cached height from its children's cached
    /// heights. O(1); children must already be settled.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + self.left_height().max(self.right_height());
    }

    /// Left subtree height minus right subtree height. In a settled tree
    /// this is always in `{-1, 0, 1}`; the rebalancing paths observe
    /// transient values of magnitude 2.
    pub(crate) fn balance_factor(&self) -> i32 {
        self.left_height() - self.right_height()
    }

    // ========================================================================
    // ROTATIONS
    // ========================================================================

    /// Rotates this subtree to the right and returns its new root.
    ///
    /// ```text
    ///       b                a
    ///      / \              / \
    ///     a   z    ->      x   b
    ///    / \                  / \
    ///   x   y                y   z
    /// ```
    ///
    /// Requires a left child; rotating without one means the balance-factor
    /// bookkeeping is broken, which is fatal rather than recoverable.
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut pivot = self
            .left
            .take()
            .expect("right rotation requires a left child");
        self.left = pivot.right.take();
        self.update_height();
        pivot.right = Some(self);
        pivot.update_height();
        pivot
    }

    /// Rotates this subtree to the left and returns its new root.
    ///
    /// ```text
    ///     a                  b
    ///    / \                / \
    ///   x   b      ->      a   z
    ///      / \            / \
    ///     y   z          x   y
    /// ```
    ///
    /// Requires a right child; see [`rotate_right`](Node::rotate_right).
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut pivot = self
            .right
            .take()
            .expect("left rotation requires a right child");
        self.right = pivot.left.take();
        self.update_height();
        pivot.left = Some(self);
        pivot.update_height();
        pivot
    }
}
