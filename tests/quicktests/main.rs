use std::collections::BTreeSet;

use bstree::{Node, Order, SearchTree};
use quickcheck::{Arbitrary, Gen};

#[macro_use]
extern crate quickcheck_macros;

mod balanced;
mod plain;
mod scenarios;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove the K from the tree
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// Applies a set of operations to a tree and a `BTreeSet`, checking that both agree on
/// whether each operation changed anything. Returns the set of keys that should remain.
pub fn do_ops<T: SearchTree<i8>>(ops: &[Op<i8>], tree: &mut T) -> BTreeSet<i8> {
    let mut set = BTreeSet::new();
    for op in ops {
        match op {
            Op::Insert(k) => assert_eq!(tree.insert(*k), set.insert(*k)),
            Op::Remove(k) => assert_eq!(tree.delete(k), set.remove(k)),
        }
    }
    set
}

/// Number of nodes reachable from `node`.
pub fn count(node: Option<&Node<i8>>) -> usize {
    node.map_or(0, |n| 1 + count(n.left()) + count(n.right()))
}

/// Height of the subtree at `node`, or `None` if some node in it is out of AVL balance.
pub fn balanced_height(node: Option<&Node<i8>>) -> Option<usize> {
    match node {
        None => Some(0),
        Some(n) => {
            let left = balanced_height(n.left())?;
            let right = balanced_height(n.right())?;
            (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
        }
    }
}

/// The in-order traversal is strictly ascending.
pub fn is_sorted<T: SearchTree<i8>>(tree: &T) -> bool {
    tree.traverse(Order::InOrder)
        .windows(2)
        .all(|pair| pair[0] < pair[1])
}

/// A key is found by search exactly when the present-key list has it, and the list is as long
/// as the tree is big.
pub fn membership_is_consistent<T: SearchTree<i8>>(tree: &T) -> bool {
    count(tree.root()) == tree.len()
        && (i8::MIN..=i8::MAX).all(|k| tree.search(&k).found == tree.contains(&k))
}
