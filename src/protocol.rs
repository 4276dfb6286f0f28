//! JSON requests and responses for driving a [`Session`].
//!
//! Requests are tagged by `op`:
//!
//! ```json
//! {"op": "initialize", "type": "avl"}
//! {"op": "insert", "key": 42}
//! {"op": "search", "key": 42}
//! {"op": "traverse", "type": "levelorder"}
//! {"op": "tree"}
//! ```
//!
//! Every request gets a response, even when it fails:
//!
//! ```
//! use bstree::{Request, Session, SessionConfig};
//! use serde_json::json;
//!
//! let mut session = Session::new(SessionConfig::default());
//! let insert: Request = serde_json::from_value(json!({"op": "insert", "key": 7})).unwrap();
//!
//! let first = session.handle(insert.clone());
//! assert_eq!(serde_json::to_value(first).unwrap(), json!({"success": true}));
//!
//! let again = session.handle(insert);
//! assert_eq!(
//!     serde_json::to_value(again).unwrap(),
//!     json!({"success": false, "error": "Key already exists"})
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;
use crate::key::Key;
use crate::search::SearchResult;
use crate::session::Session;
use crate::snapshot::TreeDocument;
use crate::traversal::Order;
use crate::tree::TreeKind;

/// One operation on the session's tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// Replace the tree with an empty one. `type` defaults to a plain tree.
    Initialize {
        /// `plain`/`bst` or `balanced`/`avl`.
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
    /// Insert a key.
    Insert {
        /// The key to insert.
        #[serde(default)]
        key: Option<Key>,
    },
    /// Delete a key.
    Delete {
        /// The key to delete.
        #[serde(default)]
        key: Option<Key>,
    },
    /// Search for a key.
    Search {
        /// The key to look for.
        #[serde(default)]
        key: Option<Key>,
    },
    /// List the keys in some order. `type` defaults to in-order.
    Traverse {
        /// `inorder`, `preorder`, `postorder` or `levelorder`.
        #[serde(rename = "type", default)]
        order: Option<String>,
    },
    /// Fetch the persisted form of the tree.
    Tree,
}

/// The answer to a [`Request`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// Whether a mutation (or the request as a whole) succeeded.
    Status {
        /// `true` when the request did what it asked.
        success: bool,
        /// Why it failed.
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// The outcome of a search.
    Search(SearchResult<Key>),
    /// The keys of a traversal.
    Traversal {
        /// The keys in the requested order.
        traversal: Vec<Key>,
    },
    /// The tree's persisted form.
    Document(TreeDocument<Key>),
}

impl Response {
    /// `{"success": true}`
    pub fn ok() -> Self {
        Response::Status {
            success: true,
            error: None,
        }
    }

    /// `{"success": false, "error": ...}`
    pub fn failure(error: &Error) -> Self {
        Response::Status {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

impl Session {
    /// Runs `request` against this session. Failures become `success: false` responses.
    pub fn handle(&mut self, request: Request) -> Response {
        let outcome = match request {
            Request::Initialize { kind } => kind
                .as_deref()
                .unwrap_or(TreeKind::Plain.as_str())
                .parse::<TreeKind>()
                .and_then(|kind| self.reinitialize(kind))
                .map(|()| Response::ok()),
            Request::Insert { key } => key
                .ok_or(Error::MissingKey)
                .and_then(|key| self.insert(key))
                .map(|()| Response::ok()),
            Request::Delete { key } => key
                .ok_or(Error::MissingKey)
                .and_then(|key| self.delete(&key))
                .map(|()| Response::ok()),
            Request::Search { key } => key
                .ok_or(Error::MissingKey)
                .and_then(|key| self.search(&key))
                .map(Response::Search),
            Request::Traverse { order } => order
                .as_deref()
                .unwrap_or(Order::InOrder.as_str())
                .parse::<Order>()
                .map(|order| Response::Traversal {
                    traversal: self.traverse(order),
                }),
            Request::Tree => Ok(Response::Document(self.document())),
        };

        outcome.unwrap_or_else(|err| {
            warn!(%err, "request failed");
            Response::failure(&err)
        })
    }
}
