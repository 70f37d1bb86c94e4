//! Core types and data structures for AvlTreeMap.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the AVL tree implementation.

use std::fmt;

use compare::{Compare, Natural};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Height of an absent subtree.
///
/// An absent child counts as height -1 rather than 0, so a leaf node has
/// height 0. All balance-factor arithmetic depends on this offset.
pub(crate) const EMPTY_HEIGHT: i32 = -1;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Owned link to a subtree; `None` when the subtree is absent.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// AVL tree map with a Rust dict-like API.
///
/// An AVL tree is a self-balancing binary search tree that rebalances after
/// every insertion and deletion, so that sibling subtree heights never differ
/// by more than 1. Lookups, insertions, and deletions are O(log n) in the
/// worst case regardless of insertion order.
///
/// Ordering and key equality are decided exclusively by the comparator `C`.
/// The default comparator is [`Natural<K>`], which delegates to `K`'s `Ord`
/// implementation; any other total order can be supplied via
/// [`with_cmp`](AvlTreeMap::with_cmp).
///
/// # Type Parameters
///
/// * `K` - Key type; ordered by the comparator, never by built-in equality
/// * `V` - Value type; opaque payload
/// * `C` - Comparator, a total order over `K`
///
/// # Examples
///
/// ```
/// use avltree::AvlTreeMap;
///
/// let mut tree = AvlTreeMap::new();
/// tree.insert(1, "one");
/// tree.insert(2, "two");
/// tree.insert(3, "three");
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.find_minimum(), Some(&1));
/// assert_eq!(tree.find_maximum(), Some(&3));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n), at most one single or double rotation
/// - **Deletion**: O(log n), up to one rotation per ancestor
/// - **Lookup**: O(log n)
/// - **Minimum/Maximum**: O(log n)
/// - **Size query**: O(1)
pub struct AvlTreeMap<K, V, C = Natural<K>>
where
    C: Compare<K>,
{
    /// The root node of the tree; `None` when the map is empty.
    pub(crate) root: Link<K, V>,
    /// Count of distinct keys currently stored; equals the number of live
    /// nodes. Maintained incrementally by insert/remove.
    pub(crate) size: usize,
    /// Total order over `K`, fixed at construction. Sole arbiter of
    /// ordering and key equality.
    pub(crate) cmp: C,
}

/// A single tree node: one key/value pair, two owned child links, and the
/// cached height of the subtree rooted here.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    /// Cached subtree height; kept exact by rotations and the recursive
    /// unwind of insert/remove.
    pub(crate) height: i32,
}

impl<K, V, C> fmt::Debug for AvlTreeMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Compare<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.in_order(&mut |key, value| {
            map.entry(key, value);
        });
        map.finish()
    }
}
