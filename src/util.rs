//! Structural invariant checks. Used to validate restored documents, by debug assertions,
//! and throughout the tests.

use crate::node::{height, Node};

/// Every key in a left subtree is smaller than its ancestor, and every key in a right subtree
/// is larger. Duplicates fail the check.
pub(crate) fn is_ordered<K: Ord>(root: Option<&Node<K>>) -> bool {
    fn go<K: Ord>(node: Option<&Node<K>>, lower: Option<&K>, upper: Option<&K>) -> bool {
        let Some(node) = node else {
            return true;
        };
        if lower.map_or(false, |lower| node.key <= *lower)
            || upper.map_or(false, |upper| node.key >= *upper)
        {
            return false;
        }
        go(node.left(), lower, Some(&node.key)) && go(node.right(), Some(&node.key), upper)
    }

    go(root, None, None)
}

/// Every cached height is 1 + the taller child's, and no node's children differ in height by
/// more than one.
pub(crate) fn is_balanced<K>(root: Option<&Node<K>>) -> bool {
    root.map_or(true, |node| {
        let left = height(&node.left);
        let right = height(&node.right);
        node.height == left.max(right) + 1
            && left.abs_diff(right) <= 1
            && is_balanced(node.left())
            && is_balanced(node.right())
    })
}

/// Number of nodes reachable from `root`.
#[cfg(test)]
pub(crate) fn count<K>(root: Option<&Node<K>>) -> usize {
    root.map_or(0, |node| 1 + count(node.left()) + count(node.right()))
}
