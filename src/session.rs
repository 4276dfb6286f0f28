//! The one tree a service works on, owned by whoever handles requests.
//!
//! A [`Session`] replaces a process-wide "current tree": it is created once, passed to the
//! request handler by `&mut`, and swapped wholesale by [`Session::reinitialize`]. When it has a
//! state path, the tree is written there as a [`TreeDocument`] after every insert, delete and
//! reinitialize, and read back by [`Session::open`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::key::Key;
use crate::search::SearchResult;
use crate::snapshot::TreeDocument;
use crate::traversal::Order;
use crate::tree::{AnyTree, SearchTree, TreeKind};

/// How to set up a [`Session`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// The kind of tree to start with when there is no saved state.
    pub kind: TreeKind,
    /// Where the tree is persisted. `None` keeps it in memory only.
    pub state_path: Option<PathBuf>,
}

/// The current tree and where it lives on disk.
#[derive(Debug)]
pub struct Session {
    tree: AnyTree<Key>,
    state_path: Option<PathBuf>,
}

impl Session {
    /// A session with an empty tree. Nothing is read or written until the first mutation.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            tree: AnyTree::new(config.kind),
            state_path: config.state_path,
        }
    }

    /// Restores the tree saved at the configured state path, or starts an empty one there.
    pub fn open(config: SessionConfig) -> Result<Self, Error> {
        let Some(path) = config.state_path.clone() else {
            return Ok(Self::new(config));
        };

        if path.exists() {
            let tree = load(&path)?;
            info!(path = %path.display(), kind = %tree.kind(), keys = tree.len(), "loaded tree state");
            return Ok(Self {
                tree,
                state_path: Some(path),
            });
        }

        let session = Self::new(config);
        info!(path = %path.display(), kind = %session.kind(), "starting new tree state");
        session.save()?;
        Ok(session)
    }

    /// The current tree.
    pub fn tree(&self) -> &AnyTree<Key> {
        &self.tree
    }

    /// The current tree's kind.
    pub fn kind(&self) -> TreeKind {
        self.tree.kind()
    }

    /// Where the tree is persisted, if anywhere.
    pub fn state_path(&self) -> Option<&Path> {
        self.state_path.as_deref()
    }

    /// Throws the current tree away and starts an empty one of `kind`.
    pub fn reinitialize(&mut self, kind: TreeKind) -> Result<(), Error> {
        info!(%kind, "reinitializing tree");
        self.tree = AnyTree::new(kind);
        self.save()
    }

    /// Inserts `key`, failing with [`Error::DuplicateKey`] if it is already present.
    pub fn insert(&mut self, key: Key) -> Result<(), Error> {
        self.check_comparable(&key)?;
        let inserted = self.tree.insert(key);
        self.save()?;
        if inserted {
            Ok(())
        } else {
            Err(Error::DuplicateKey)
        }
    }

    /// Deletes `key`, failing with [`Error::KeyNotFound`] if it is absent.
    pub fn delete(&mut self, key: &Key) -> Result<(), Error> {
        self.check_comparable(key)?;
        let deleted = self.tree.delete(key);
        self.save()?;
        if deleted {
            Ok(())
        } else {
            Err(Error::KeyNotFound)
        }
    }

    /// Searches for `key`. A miss is a successful search with `found: false`.
    pub fn search(&self, key: &Key) -> Result<SearchResult<Key>, Error> {
        self.check_comparable(key)?;
        Ok(self.tree.search(key))
    }

    /// The keys in the given order.
    pub fn traverse(&self, order: Order) -> Vec<Key> {
        self.tree.traverse(order)
    }

    /// The persisted form of the current tree.
    pub fn document(&self) -> TreeDocument<Key> {
        self.tree.document()
    }

    /// Writes the current tree to the state path, if there is one.
    pub fn save(&self) -> Result<(), Error> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };

        let json = serde_json::to_string_pretty(&self.document())?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "saved tree state");
        Ok(())
    }

    /// A key must be finite and of the same kind as the keys already present. An empty tree
    /// accepts either kind.
    fn check_comparable(&self, key: &Key) -> Result<(), Error> {
        key.check_finite()?;
        match self.tree.present_keys().iter().next() {
            Some(existing) if existing.kind() != key.kind() => {
                warn!(%key, expected = %existing.kind(), "rejecting incomparable key");
                Err(Error::IncomparableKey {
                    key: key.clone(),
                    expected: existing.kind(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Reads a tree back from a state file written by [`Session::save`].
pub fn load(path: &Path) -> Result<AnyTree<Key>, Error> {
    let json = fs::read_to_string(path)?;

    // A plain tree fed sorted keys nests one object per key.
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    deserializer.disable_recursion_limit();
    let document = TreeDocument::<Key>::deserialize(serde_stacker::Deserializer::new(
        &mut deserializer,
    ))?;
    deserializer.end()?;

    for key in &document.inserted_keys {
        key.check_finite()?;
    }
    if document
        .inserted_keys
        .windows(2)
        .any(|pair| pair[0].kind() != pair[1].kind())
    {
        return Err(Error::InvalidSnapshot("keys of different kinds"));
    }

    AnyTree::from_document(document)
}
