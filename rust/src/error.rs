//! Error handling and result types for AvlTreeMap operations.
//!
//! Absence of a key is never an error in this crate; it is reported through
//! `Option`/`bool` returns. The error type exists for the fallible
//! convenience lookup and for detailed invariant validation.

/// Error type for AVL tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvlTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Internal tree invariant violated (ordering, cached height, balance
    /// factor, or size counter).
    CorruptedTree(String),
}

impl AvlTreeError {
    /// Create a CorruptedTree error with component context.
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error reports a corrupted tree.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::CorruptedTree(_))
    }
}

impl std::fmt::Display for AvlTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            AvlTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for AvlTreeError {}

/// Result type for tree operations that may fail.
pub type TreeResult<T> = Result<T, AvlTreeError>;

/// Result type for key lookup operations.
pub type KeyResult<T> = Result<T, AvlTreeError>;
