//! The contract both tree variants share, and a runtime choice between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::balanced::BalancedTree;
use crate::error::Error;
use crate::membership::PresentKeys;
use crate::node::Node;
use crate::plain::PlainTree;
use crate::search::{self, SearchResult};
use crate::snapshot::{Snapshot, TreeDocument};
use crate::traversal::Order;

/// Which tree variant to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeKind {
    /// An unbalanced binary search tree.
    #[default]
    #[serde(alias = "bst")]
    Plain,
    /// A self-balancing AVL tree.
    #[serde(alias = "avl")]
    Balanced,
}

impl TreeKind {
    /// The wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TreeKind::Plain => "plain",
            TreeKind::Balanced => "balanced",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `plain`/`bst` and `balanced`/`avl`, ignoring case.
impl FromStr for TreeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "bst" => Ok(TreeKind::Plain),
            "balanced" | "avl" => Ok(TreeKind::Balanced),
            _ => Err(Error::UnknownTreeKind(s.to_owned())),
        }
    }
}

/// Operations every tree offers. Insert and delete report rejected calls (duplicate key,
/// absent key) as `false` and leave the tree untouched.
pub trait SearchTree<K: Ord + Clone> {
    /// Which variant this is.
    fn kind(&self) -> TreeKind;

    /// The root node, if the tree is non-empty.
    fn root(&self) -> Option<&Node<K>>;

    /// The keys currently stored, in insertion order.
    fn present_keys(&self) -> &PresentKeys<K>;

    /// Adds `key`. Returns `false` without changing anything if it is already present.
    fn insert(&mut self, key: K) -> bool;

    /// Removes `key`. Returns `false` without changing anything if it is absent.
    fn delete(&mut self, key: &K) -> bool;

    /// Walks from the root towards `key`, recording every node visited.
    fn search(&self, key: &K) -> SearchResult<K> {
        search::walk(self.root(), key)
    }

    /// The keys in the given order.
    fn traverse(&self, order: Order) -> Vec<K> {
        order.collect(self.root())
    }

    /// The tree's shape, `None` when empty.
    fn snapshot(&self) -> Option<Snapshot<K>> {
        Snapshot::capture(self.root())
    }

    /// Everything needed to persist and later restore this tree.
    fn document(&self) -> TreeDocument<K> {
        TreeDocument {
            kind: self.kind(),
            inserted_keys: self.present_keys().as_slice().to_vec(),
            tree: self.snapshot(),
        }
    }

    /// Whether `key` is present, without walking the tree.
    fn contains(&self, key: &K) -> bool {
        self.present_keys().contains(key)
    }

    /// Number of keys stored.
    fn len(&self) -> usize {
        self.present_keys().len()
    }

    /// Whether the tree has no keys.
    fn is_empty(&self) -> bool {
        self.present_keys().is_empty()
    }
}

/// Either tree variant, picked at runtime by [`TreeKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyTree<K> {
    /// An unbalanced tree.
    Plain(PlainTree<K>),
    /// An AVL tree.
    Balanced(BalancedTree<K>),
}

impl<K> AnyTree<K> {
    /// An empty tree of the given kind.
    pub fn new(kind: TreeKind) -> Self {
        match kind {
            TreeKind::Plain => AnyTree::Plain(PlainTree::new()),
            TreeKind::Balanced => AnyTree::Balanced(BalancedTree::new()),
        }
    }
}

impl<K: Ord + Clone> AnyTree<K> {
    /// Restores the variant named by the document's `type`.
    pub fn from_document(document: TreeDocument<K>) -> Result<Self, Error> {
        Ok(match document.kind {
            TreeKind::Plain => AnyTree::Plain(PlainTree::from_document(document)?),
            TreeKind::Balanced => AnyTree::Balanced(BalancedTree::from_document(document)?),
        })
    }
}

impl<K: Ord + Clone> SearchTree<K> for AnyTree<K> {
    fn kind(&self) -> TreeKind {
        match self {
            AnyTree::Plain(_) => TreeKind::Plain,
            AnyTree::Balanced(_) => TreeKind::Balanced,
        }
    }

    fn root(&self) -> Option<&Node<K>> {
        match self {
            AnyTree::Plain(t) => t.root(),
            AnyTree::Balanced(t) => t.root(),
        }
    }

    fn present_keys(&self) -> &PresentKeys<K> {
        match self {
            AnyTree::Plain(t) => t.present_keys(),
            AnyTree::Balanced(t) => t.present_keys(),
        }
    }

    fn insert(&mut self, key: K) -> bool {
        match self {
            AnyTree::Plain(t) => t.insert(key),
            AnyTree::Balanced(t) => t.insert(key),
        }
    }

    fn delete(&mut self, key: &K) -> bool {
        match self {
            AnyTree::Plain(t) => t.delete(key),
            AnyTree::Balanced(t) => t.delete(key),
        }
    }
}
