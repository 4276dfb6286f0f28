//! Looking keys up, and reporting how the lookup went.

use std::cmp::Ordering;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::node::Node;

/// What `parent` serializes to when the found node is the root.
pub const ROOT_PARENT: &str = "None";

/// The immediate ancestor of a found node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parent<K> {
    /// The found node is the root of the tree.
    Root,
    /// The found node hangs off the node with this key.
    Key(K),
}

impl<K: Serialize> Serialize for Parent<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Root => serializer.serialize_str(ROOT_PARENT),
            Self::Key(key) => key.serialize(serializer),
        }
    }
}

/// The outcome of a search. A miss is not an error: `path` still records the walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult<K> {
    /// Whether the key is in the tree.
    pub found: bool,
    /// The key that was searched for.
    pub key: K,
    /// 0-based depth of the found node. Only present on a hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
    /// The found node's parent. Only present on a hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent<K>>,
    /// Keys of every node visited, from the root down. Includes the found node on a hit.
    pub path: Vec<K>,
}

/// Walks down from `root` comparing `key` against each visited node.
pub(crate) fn walk<K>(root: Option<&Node<K>>, key: &K) -> SearchResult<K>
where
    K: Ord + Clone,
{
    let mut path = Vec::new();
    let mut parent: Option<&K> = None;
    let mut current = root;

    while let Some(node) = current {
        path.push(node.key.clone());
        current = match key.cmp(&node.key) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => {
                let level = path.len() - 1;
                trace!(level, "search hit");
                return SearchResult {
                    found: true,
                    key: key.clone(),
                    level: Some(level),
                    parent: Some(parent.cloned().map_or(Parent::Root, Parent::Key)),
                    path,
                };
            }
        };
        parent = Some(&node.key);
    }

    trace!(visited = path.len(), "search miss");
    SearchResult {
        found: false,
        key: key.clone(),
        level: None,
        parent: None,
        path,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Box<Node<i32>> {
        let mut root = Node::new_boxed(50);
        let mut left = Node::new_boxed(30);
        left.right = Some(Node::new_boxed(40));
        root.left = Some(left);
        root.right = Some(Node::new_boxed(70));
        root
    }

    #[test]
    fn empty_tree_misses_with_empty_path() {
        let result = walk::<i32>(None, &3);

        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.level, None);
        assert_eq!(result.parent, None);
    }

    #[test]
    fn hit_reports_level_parent_and_path() {
        let root = sample();
        let result = walk(Some(&root), &40);

        assert!(result.found);
        assert_eq!(result.level, Some(2));
        assert_eq!(result.parent, Some(Parent::Key(30)));
        assert_eq!(result.path, vec![50, 30, 40]);
    }

    #[test]
    fn root_hit_has_no_parent() {
        let root = sample();
        let result = walk(Some(&root), &50);

        assert_eq!(result.level, Some(0));
        assert_eq!(result.parent, Some(Parent::Root));
        assert_eq!(result.path, vec![50]);
    }

    #[test]
    fn miss_still_records_the_walk() {
        let root = sample();
        let result = walk(Some(&root), &35);

        assert!(!result.found);
        assert_eq!(result.path, vec![50, 30, 40]);
    }

    #[test]
    fn serializes_like_the_http_payload() {
        let root = sample();

        assert_eq!(
            serde_json::to_value(walk(Some(&root), &50)).unwrap(),
            json!({"found": true, "key": 50, "level": 0, "parent": "None", "path": [50]})
        );
        assert_eq!(
            serde_json::to_value(walk(Some(&root), &70)).unwrap(),
            json!({"found": true, "key": 70, "level": 1, "parent": 50, "path": [50, 70]})
        );
        assert_eq!(
            serde_json::to_value(walk(Some(&root), &5)).unwrap(),
            json!({"found": false, "key": 5, "path": [50, 30]})
        );
    }
}
