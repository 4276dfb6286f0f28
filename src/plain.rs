//! An unbalanced BST. Keys are placed by comparison only, so inserting keys in sorted order
//! degrades it into a linked list.
//!
//! # Examples
//!
//! ```
//! use bstree::{Parent, PlainTree, SearchTree};
//!
//! let mut tree = PlainTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&10).found);
//!
//! assert!(tree.insert(10));
//! let hit = tree.search(&10);
//! assert!(hit.found);
//! assert_eq!(hit.level, Some(0));
//! assert_eq!(hit.parent, Some(Parent::Root));
//!
//! // Duplicates are rejected rather than merged.
//! assert!(!tree.insert(10));
//!
//! // Deleting an absent key is rejected too.
//! assert!(tree.delete(&10));
//! assert!(!tree.delete(&10));
//! ```

use std::cmp::Ordering;

use tracing::debug;

use crate::error::Error;
use crate::membership::PresentKeys;
use crate::node::{self, Link, Node};
use crate::snapshot::TreeDocument;
use crate::tree::{SearchTree, TreeKind};

/// A Binary Search Tree with no balancing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainTree<K> {
    root: Link<K>,
    present: PresentKeys<K>,
}

impl<K> Default for PlainTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PlainTree<K> {
    /// Generates a new, empty `PlainTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            present: PresentKeys::new(),
        }
    }
}

impl<K> Drop for PlainTree<K> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<K: Ord + Clone> PlainTree<K> {
    /// Restores a tree with exactly the shape recorded in `document`. The document's `type` is
    /// not checked; any correctly ordered snapshot is a valid plain tree.
    pub fn from_document(document: TreeDocument<K>) -> Result<Self, Error> {
        let (root, present) = document.into_parts(false)?;
        Ok(Self { root, present })
    }
}

impl<K: Ord + Clone> SearchTree<K> for PlainTree<K> {
    fn kind(&self) -> TreeKind {
        TreeKind::Plain
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

        insert(&mut self.root, key.clone());
        self.present.push(key);
        true
    }

    fn delete(&mut self, key: &K) -> bool {
        if !self.present.remove(key) {
            debug!("rejecting delete of absent key");
            return false;
        }

        delete(&mut self.root, key);
        true
    }
}

/// Walks down to the first empty slot on `key`'s search path and puts a new leaf there.
fn insert<K: Ord>(mut link: &mut Link<K>, key: K) {
    while let Some(node) = link {
        link = match key.cmp(&node.key) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            // The membership check keeps duplicates from getting this far.
            Ordering::Equal => return,
        };
    }
    *link = Some(Node::new_boxed(key));
}

/// The slot holding `key`, or the empty slot where it would go.
fn find_slot<'a, K: Ord>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K> {
    loop {
        let go_left = match link.as_deref() {
            Some(node) if *key < node.key => true,
            Some(node) if *key > node.key => false,
            _ => return link,
        };
        let Some(node) = link else { unreachable!() };
        link = if go_left { &mut node.left } else { &mut node.right };
    }
}

/// Removes `key` from the subtree behind `link`.
///
/// A node with at most one child is replaced by that child. A node with two children takes
/// its in-order successor's key, and the successor is spliced out of the right subtree.
fn delete<K: Ord>(link: &mut Link<K>, key: &K) {
    let slot = find_slot(link, key);
    let Some(mut node) = slot.take() else {
        return;
    };

    *slot = match (node.left.take(), node.right.take()) {
        (None, None) => {
            debug!("removing leaf");
            None
        }
        (Some(child), None) | (None, Some(child)) => {
            debug!("replacing node with its only child");
            Some(child)
        }
        (Some(left), Some(right)) => {
            debug!("replacing node with its in-order successor");
            let mut right = Some(right);
            if let Some(successor) = take_min(&mut right) {
                node.key = successor;
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    };
}

/// Unlinks the leftmost node behind `link`, moving its right child into its place.
fn take_min<K>(mut link: &mut Link<K>) -> Option<K> {
    loop {
        match link.as_deref() {
            Some(node) if node.left.is_some() => {}
            _ => break,
        }
        let Some(node) = link else { unreachable!() };
        link = &mut node.left;
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min.key)
}
