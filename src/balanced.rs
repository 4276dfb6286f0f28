//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Every node caches the height of its subtree. After an insert or a delete, each node on the
//! path back up to the root recomputes its height and, if its children's heights differ by
//! more than one, restores the balance with one or two rotations. This keeps the height of
//! the tree `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use bstree::{BalancedTree, Order, SearchTree};
//!
//! let mut tree = BalancedTree::new();
//!
//! // Ascending inserts would make a chain in a plain tree. Here the middle key rises.
//! for key in [10, 20, 30] {
//!     assert!(tree.insert(key));
//! }
//! assert_eq!(tree.root().map(|n| *n.key()), Some(20));
//! assert_eq!(tree.traverse(Order::LevelOrder), vec![20, 10, 30]);
//!
//! assert!(tree.delete(&20));
//! assert_eq!(tree.traverse(Order::InOrder), vec![10, 30]);
//! ```

use std::cmp::Ordering;

use tracing::debug;

use crate::error::Error;
use crate::membership::PresentKeys;
use crate::node::{self, balance_factor, Link, Node};
use crate::snapshot::TreeDocument;
use crate::tree::{SearchTree, TreeKind};

/// An AVL tree. This can be used for inserting, finding, and deleting keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalancedTree<K> {
    root: Link<K>,
    present: PresentKeys<K>,
}

impl<K> Default for BalancedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> BalancedTree<K> {
    /// Generates a new, empty `BalancedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            present: PresentKeys::new(),
        }
    }

    /// Gets the height of this tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }
}

impl<K: Ord + Clone> BalancedTree<K> {
    /// Restores a tree with exactly the shape recorded in `document`. Fails if the snapshot
    /// is not a valid AVL tree.
    pub fn from_document(document: TreeDocument<K>) -> Result<Self, Error> {
        let (root, present) = document.into_parts(true)?;
        Ok(Self { root, present })
    }
}

impl<K: Ord + Clone> SearchTree<K> for BalancedTree<K> {
    fn kind(&self) -> TreeKind {
        TreeKind::Balanced
    }

    fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    fn present_keys(&self) -> &PresentKeys<K> {
        &self.present
    }

    fn insert(&mut self, key: K) -> bool {
        if self.present.contains(&key) {
            debug!("rejecting duplicate key");
            return false;
        }

        self.root = Some(insert(self.root.take(), &key));
        self.present.push(key);
        true
    }

    fn delete(&mut self, key: &K) -> bool {
        if !self.present.remove(key) {
            debug!("rejecting delete of absent key");
            return false;
        }

        self.root = delete(self.root.take(), key);
        true
    }
}

/// Rotate `y` to the right. This moves the left child up vertically and `y` down vertically.
/// Used to rebalance the tree when the left child is too tall. Returns the new subtree root.
///
/// ```text
///        y                 x
///       / \               / \
///      x   c   rotate -> a   y
///     / \                   / \
///    a   b                 b   c
/// ```
///
/// `y` is returned untouched if it has no left child.
fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };

    y.left = x.right.take();
    // `y` is now below `x`, so its height has to be right before `x`'s can be.
    y.fix_height();
    x.right = Some(y);
    x.fix_height();
    x
}

/// Rotate `x` to the left. The mirror image of [`rotate_right`].
fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };

    x.right = y.left.take();
    x.fix_height();
    y.left = Some(x);
    y.fix_height();
    y
}

/// Inserts `key` below `link`, rebalancing every node on the way back up.
fn insert<K: Ord + Clone>(link: Link<K>, key: &K) -> Box<Node<K>> {
    let Some(mut node) = link else {
        return Node::new_boxed(key.clone());
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert(node.left.take(), key)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), key)),
        // The membership check keeps duplicates from getting this far.
        Ordering::Equal => return node,
    }

    node.fix_height();
    rebalance_after_insert(node, key)
}

/// Picks the rotation case by where the inserted `key` went relative to the tall child.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
fn rebalance_after_insert<K: Ord>(mut node: Box<Node<K>>, key: &K) -> Box<Node<K>> {
    let balance = node.balance_factor();

    let rebalanced = if balance > 1 {
        match node.left.as_ref().map(|left| key.cmp(&left.key)) {
            Some(Ordering::Less) => {
                debug!("left-left case, rotating right");
                rotate_right(node)
            }
            Some(Ordering::Greater) => {
                debug!("left-right case, rotating left then right");
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            }
            _ => node,
        }
    } else if balance < -1 {
        match node.right.as_ref().map(|right| key.cmp(&right.key)) {
            Some(Ordering::Greater) => {
                debug!("right-right case, rotating left");
                rotate_left(node)
            }
            Some(Ordering::Less) => {
                debug!("right-left case, rotating right then left");
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            }
            _ => node,
        }
    } else {
        node
    };

    debug_assert!(rebalanced.balance_factor().abs() <= 1);
    rebalanced
}

/// Removes `key` from the subtree behind `link`, rebalancing every node on the way back up.
/// Uses the same replacement rules as the plain tree: a node with at most one child is
/// replaced by that child, and a node with two children takes its in-order successor's key.
fn delete<K: Ord + Clone>(link: Link<K>, key: &K) -> Link<K> {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                debug!("removing leaf");
                return None;
            }
            // The child was already a valid AVL subtree, so it needs no fixing up.
            (Some(child), None) | (None, Some(child)) => {
                debug!("replacing node with its only child");
                return Some(child);
            }
            (Some(left), Some(right)) => {
                debug!("replacing node with its in-order successor");
                let successor = node::min_key(&right).clone();
                node.left = Some(left);
                node.right = delete(Some(right), &successor);
                node.key = successor;
            }
        },
    }

    node.fix_height();
    Some(rebalance_after_delete(node))
}

/// There is no inserted key to steer by after a delete, so the case is picked from the tall
/// child's own balance factor. A child with balance 0 takes the single rotation.
fn rebalance_after_delete<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let balance = node.balance_factor();

    let rebalanced = if balance > 1 {
        if balance_factor(&node.left) >= 0 {
            debug!("left-left case, rotating right");
            rotate_right(node)
        } else {
            debug!("left-right case, rotating left then right");
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
    } else if balance < -1 {
        if balance_factor(&node.right) <= 0 {
            debug!("right-right case, rotating left");
            rotate_left(node)
        } else {
            debug!("right-left case, rotating right then left");
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    } else {
        node
    };

    debug_assert!(rebalanced.balance_factor().abs() <= 1);
    rebalanced
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;
    use crate::traversal::Order;
    use crate::util;

    /// Applies a set of operations to a tree and a `BTreeSet`, checking the AVL invariant
    /// after every step.
    fn do_ops(ops: &[Op<i8>], tree: &mut BalancedTree<i8>, set: &mut BTreeSet<i8>) {
        for op in ops {
            match op {
                Op::Insert(k) => assert_eq!(tree.insert(*k), set.insert(*k)),
                Op::Remove(k) => assert_eq!(tree.delete(k), set.remove(k)),
                Op::Search(k) => assert_eq!(tree.search(k).found, set.contains(k)),
            }
            assert!(util::is_balanced(tree.root()));
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = BalancedTree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            util::is_ordered(tree.root())
                && util::count(tree.root()) == set.len()
                && tree.traverse(Order::InOrder) == set.into_iter().collect::<Vec<_>>()
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = BalancedTree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.search(x).found) && util::is_balanced(tree.root())
        }
    }
}
