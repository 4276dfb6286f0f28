use bstree::{Order, PlainTree, SearchTree};
use quickcheck::TestResult;

use crate::{do_ops, is_sorted, membership_is_consistent, Op};

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = PlainTree::new();

    let set = do_ops(&ops, &mut tree);
    is_sorted(&tree)
        && membership_is_consistent(&tree)
        && tree.traverse(Order::InOrder) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let mut tree = PlainTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.document();

    let inserted = tree.insert(xs[pick % xs.len()]);
    TestResult::from_bool(!inserted && tree.document() == before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = PlainTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    deletes.iter().all(|x| !tree.search(x).found && !tree.delete(x))
        && xs
            .iter()
            .filter(|x| !deletes.contains(*x))
            .all(|x| tree.search(x).found)
        && membership_is_consistent(&tree)
}

#[quickcheck]
fn document_round_trip(xs: Vec<i8>) -> bool {
    let mut tree = PlainTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let document = tree.document();
    let json = serde_json::to_string(&document).unwrap();
    let restored = PlainTree::from_document(serde_json::from_str(&json).unwrap()).unwrap();
    restored.document() == document
}

#[quickcheck]
fn preorder_replay_rebuilds_the_shape(xs: Vec<i8>) -> bool {
    let mut tree = PlainTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let mut replayed = PlainTree::new();
    for key in tree.traverse(Order::PreOrder) {
        replayed.insert(key);
    }
    replayed.snapshot() == tree.snapshot()
}
