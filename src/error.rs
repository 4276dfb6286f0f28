//! Errors reported to callers of the session and document layers.
//!
//! The trees themselves report duplicate inserts and absent deletes as `false`; these variants
//! are how the session turns those outcomes into something a response can carry.

use crate::key::{Key, KeyKind};

/// Everything that can go wrong outside the tree engine itself.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The key is already in the tree.
    #[error("Key already exists")]
    DuplicateKey,
    /// The key is not in the tree.
    #[error("Key not found")]
    KeyNotFound,
    /// A request needed a key and did not carry one.
    #[error("No key provided")]
    MissingKey,
    /// The key cannot be ordered against the keys already in the tree.
    #[error("Key {key} cannot be compared with the {expected} keys already in the tree")]
    IncomparableKey {
        /// The rejected key.
        key: Key,
        /// The kind of key the tree holds.
        expected: KeyKind,
    },
    /// NaN and infinities have no place in a total order.
    #[error("Key must be a finite number")]
    NonFiniteKey,
    /// Unknown tree type name.
    #[error("Invalid tree type")]
    UnknownTreeKind(String),
    /// Unknown traversal name.
    #[error("Invalid traversal type")]
    UnknownOrder(String),
    /// A persisted document does not describe a valid tree.
    #[error("Invalid tree snapshot: {0}")]
    InvalidSnapshot(&'static str),
    /// Reading or writing the state file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The state file or a request is not valid JSON for its type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
