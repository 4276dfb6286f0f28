//! Structural snapshots of a tree and the document they are persisted in.
//!
//! A [`Snapshot`] mirrors the node shape exactly (`{key, left, right}` with `null` for empty
//! children) and never exposes heights. A [`TreeDocument`] bundles a snapshot with the tree
//! kind and the present keys:
//!
//! ```json
//! { "type": "balanced", "insertedKeys": [10, 20, 30],
//!   "tree": { "key": 20, "left": { "key": 10, "left": null, "right": null },
//!                        "right": { "key": 30, "left": null, "right": null } } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::membership::PresentKeys;
use crate::node::{Link, Node};
use crate::traversal;
use crate::tree::TreeKind;
use crate::util;

/// An order-preserving copy of a subtree's shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<K> {
    /// The key at this position.
    pub key: K,
    /// The left subtree, `null` when empty.
    pub left: Option<Box<Snapshot<K>>>,
    /// The right subtree, `null` when empty.
    pub right: Option<Box<Snapshot<K>>>,
}

impl<K: Clone> Snapshot<K> {
    /// Copies the shape of the tree rooted at `root`. An empty tree has no snapshot.
    pub fn capture(root: Option<&Node<K>>) -> Option<Self> {
        root.map(|node| Snapshot {
            key: node.key.clone(),
            left: Self::capture(node.left()).map(Box::new),
            right: Self::capture(node.right()).map(Box::new),
        })
    }
}

impl<K> Snapshot<K> {
    /// Turns the snapshot back into owned nodes with correct cached heights.
    pub(crate) fn into_node(self) -> Box<Node<K>> {
        let mut node = Node::new_boxed(self.key);
        node.left = self.left.map(|left| left.into_node());
        node.right = self.right.map(|right| right.into_node());
        node.fix_height();
        node
    }
}

/// The persisted form of a tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDocument<K> {
    /// Which tree variant produced the document.
    #[serde(rename = "type")]
    pub kind: TreeKind,
    /// The present keys in insertion order.
    pub inserted_keys: Vec<K>,
    /// The tree's shape, `null` when empty.
    pub tree: Option<Snapshot<K>>,
}

impl<K> TreeDocument<K> {
    /// An empty document for a tree of the given kind.
    pub fn empty(kind: TreeKind) -> Self {
        TreeDocument {
            kind,
            inserted_keys: Vec::new(),
            tree: None,
        }
    }
}

impl<K: Ord + Clone> TreeDocument<K> {
    /// Rebuilds the nodes and the key list, refusing documents that break the search order,
    /// disagree with their key list, or (when `balanced`) violate the AVL height rule.
    pub(crate) fn into_parts(self, balanced: bool) -> Result<(Link<K>, PresentKeys<K>), Error> {
        let root = self.tree.map(Snapshot::into_node);

        if !util::is_ordered(root.as_deref()) {
            return Err(Error::InvalidSnapshot("keys are not in search order"));
        }

        let mut listed = self.inserted_keys.clone();
        listed.sort();
        if listed != traversal::inorder(root.as_deref()) {
            return Err(Error::InvalidSnapshot(
                "inserted keys do not match the keys in the tree",
            ));
        }

        if balanced && !util::is_balanced(root.as_deref()) {
            return Err(Error::InvalidSnapshot(
                "subtree heights differ by more than one",
            ));
        }

        let mut present = PresentKeys::new();
        for key in self.inserted_keys {
            present.push(key);
        }
        Ok((root, present))
    }
}
