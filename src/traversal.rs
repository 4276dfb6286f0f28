//! Depth-first and breadth-first walks over a tree, collected eagerly into `Vec`s.
//!
//! # Examples
//!
//! ```
//! use bstree::{BalancedTree, Order, SearchTree};
//!
//! let mut tree = BalancedTree::new();
//! for key in [50, 30, 70, 20, 40] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.traverse(Order::InOrder), vec![20, 30, 40, 50, 70]);
//! assert_eq!(tree.traverse(Order::LevelOrder), vec![50, 30, 70, 20, 40]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::node::Node;

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    #[default]
    #[serde(rename = "inorder")]
    InOrder,
    /// Node, left subtree, right subtree.
    #[serde(rename = "preorder")]
    PreOrder,
    /// Left subtree, right subtree, node.
    #[serde(rename = "postorder")]
    PostOrder,
    /// Breadth-first, left before right within a level.
    #[serde(rename = "levelorder")]
    LevelOrder,
}

impl Order {
    /// Every supported order.
    pub const ALL: [Order; 4] = [
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
        Order::LevelOrder,
    ];

    /// The wire name of this order.
    pub fn as_str(self) -> &'static str {
        match self {
            Order::InOrder => "inorder",
            Order::PreOrder => "preorder",
            Order::PostOrder => "postorder",
            Order::LevelOrder => "levelorder",
        }
    }

    /// Collects the keys of the tree rooted at `root` in this order.
    pub fn collect<K: Clone>(self, root: Option<&Node<K>>) -> Vec<K> {
        match self {
            Order::InOrder => inorder(root),
            Order::PreOrder => preorder(root),
            Order::PostOrder => postorder(root),
            Order::LevelOrder => level_order(root),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Order::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownOrder(s.to_owned()))
    }
}

/// Keys in ascending order.
pub fn inorder<K: Clone>(root: Option<&Node<K>>) -> Vec<K> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;

    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        if let Some(node) = stack.pop() {
            out.push(node.key.clone());
            current = node.right();
        }
    }
    out
}

/// Each node before its subtrees. Replaying this into an empty plain tree rebuilds its shape.
pub fn preorder<K: Clone>(root: Option<&Node<K>>) -> Vec<K> {
    let mut out = Vec::new();
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(node.key.clone());
        // Right goes on first so the left subtree comes off the stack first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
    out
}

/// Each node after its subtrees.
pub fn postorder<K: Clone>(root: Option<&Node<K>>) -> Vec<K> {
    // Node-right-left, reversed.
    let mut out = Vec::new();
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(node.key.clone());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    out.reverse();
    out
}

/// Breadth-first using a FIFO queue seeded with the root.
pub fn level_order<K: Clone>(root: Option<&Node<K>>) -> Vec<K> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&Node<K>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        out.push(node.key.clone());
        queue.extend(node.left());
        queue.extend(node.right());
    }

    out
}
