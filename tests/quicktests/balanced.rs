use bstree::{BalancedTree, Order, SearchTree};

use crate::{balanced_height, do_ops, is_sorted, membership_is_consistent, Op};

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BalancedTree::new();

    let set = do_ops(&ops, &mut tree);
    is_sorted(&tree)
        && membership_is_consistent(&tree)
        && balanced_height(tree.root()) == Some(tree.height())
        && tree.traverse(Order::InOrder) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn stays_balanced_after_every_step(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BalancedTree::new();

    ops.chunks(1).all(|step| {
        do_ops(step, &mut tree);
        balanced_height(tree.root()).is_some()
    })
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i8>) -> bool {
    let mut tree = BalancedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // An AVL tree with n nodes is at most ~1.44 lg(n + 2) tall.
    let bound = 1.45 * ((tree.len() + 2) as f64).log2();
    tree.height() as f64 <= bound
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = BalancedTree::new();
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
        && balanced_height(tree.root()).is_some()
}

#[quickcheck]
fn document_round_trip(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BalancedTree::new();
    do_ops(&ops, &mut tree);

    let document = tree.document();
    let json = serde_json::to_string(&document).unwrap();
    let restored = BalancedTree::from_document(serde_json::from_str(&json).unwrap()).unwrap();
    restored.document() == document && restored == tree
}
