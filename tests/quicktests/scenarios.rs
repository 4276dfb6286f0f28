use bstree::{
    BalancedTree, Key, Order, Parent, PlainTree, Request, SearchTree, Session, SessionConfig,
    TreeKind,
};
use serde_json::json;

#[test]
fn balanced_tree_without_rotations() {
    let mut tree = BalancedTree::new();
    for key in [50, 30, 70, 20, 40] {
        assert!(tree.insert(key));
    }

    assert_eq!(tree.traverse(Order::InOrder), vec![20, 30, 40, 50, 70]);
    assert_eq!(tree.traverse(Order::LevelOrder), vec![50, 30, 70, 20, 40]);
}

#[test]
fn balanced_tree_ascending_inserts() {
    let mut tree = BalancedTree::new();
    for key in [10, 20, 30] {
        assert!(tree.insert(key));
    }

    let root = tree.root().unwrap();
    assert_eq!(root.key(), &20);
    assert_eq!(root.left().map(|n| *n.key()), Some(10));
    assert_eq!(root.right().map(|n| *n.key()), Some(30));
    assert_eq!(tree.height(), 2);
    assert!(root.left().unwrap().left().is_none());
    assert!(root.right().unwrap().right().is_none());
}

#[test]
fn plain_tree_single_node_search() {
    let mut tree = PlainTree::new();
    tree.insert(10);

    let hit = tree.search(&10);
    assert!(hit.found);
    assert_eq!(hit.level, Some(0));
    assert_eq!(hit.parent, Some(Parent::Root));
    assert_eq!(hit.path, vec![10]);

    let miss = tree.search(&5);
    assert!(!miss.found);
    assert_eq!(miss.key, 5);
    assert_eq!(miss.path, vec![10]);
}

#[test]
fn session_persists_after_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.json");
    let config = SessionConfig {
        kind: TreeKind::Plain,
        state_path: Some(path.clone()),
    };

    let mut session = Session::open(config.clone()).unwrap();
    session.handle(Request::Initialize {
        kind: Some("avl".to_owned()),
    });
    for key in [3, 1, 2] {
        session.handle(Request::Insert {
            key: Some(Key::Int(key)),
        });
    }

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        saved,
        json!({
            "type": "balanced",
            "insertedKeys": [3, 1, 2],
            "tree": {
                "key": 2,
                "left": {"key": 1, "left": null, "right": null},
                "right": {"key": 3, "left": null, "right": null}
            }
        })
    );

    let reopened = Session::open(config).unwrap();
    assert_eq!(reopened.document(), session.document());
}
