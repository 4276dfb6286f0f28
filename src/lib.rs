//! This crate keeps an ordered set of keys in a Binary Search Tree, either
//! a plain one or a self-balancing AVL tree, and exposes insert, delete,
//! search, and traversal over both through one trait.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. A [`PlainTree`] places keys by comparison
//! alone, so its height can reach `N` when keys arrive in sorted order. A
//! [`BalancedTree`] rotates nodes after every change to keep its height at
//! `O(lg N)`.
//!
//! Both trees reject duplicate keys, and both report every node a search
//! walked through:
//!
//! ```
//! use bstree::{BalancedTree, Parent, PlainTree, SearchTree};
//!
//! let mut plain = PlainTree::new();
//! let mut balanced = BalancedTree::new();
//! for key in [1, 2, 3] {
//!     plain.insert(key);
//!     balanced.insert(key);
//! }
//!
//! assert_eq!(plain.search(&3).path, vec![1, 2, 3]);
//! assert_eq!(balanced.search(&3).path, vec![2, 3]);
//! assert_eq!(balanced.search(&3).parent, Some(Parent::Key(2)));
//! ```
//!
//! [`Session`] wraps one tree of dynamically typed [`Key`]s for services that
//! pick the tree kind at runtime and persist it as a [`TreeDocument`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod error;
pub mod key;
pub mod membership;
pub mod node;
pub mod plain;
pub mod protocol;
pub mod search;
pub mod session;
pub mod snapshot;
pub mod traversal;
pub mod tree;
mod util;


pub use balanced::BalancedTree;
pub use error::Error;
pub use key::{Key, KeyKind};
pub use membership::PresentKeys;
pub use node::Node;
pub use plain::PlainTree;
pub use protocol::{Request, Response};
pub use search::{Parent, SearchResult};
pub use session::{Session, SessionConfig};
pub use snapshot::{Snapshot, TreeDocument};
pub use traversal::Order;
pub use tree::{AnyTree, SearchTree, TreeKind};
