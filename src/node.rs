//! The building block shared by [`PlainTree`][crate::PlainTree] and
//! [`BalancedTree`][crate::BalancedTree].
//!
//! Every `Node` is owned outright by exactly one slot: either its parent's `left`/`right` link
//! or the tree's root. Structural changes move `Box`es between slots with `Option::take` so no
//! two slots ever refer to the same node.

/// An owned link to a subtree. `None` marks an empty slot at the bottom of the tree.
pub type Link<K> = Option<Box<Node<K>>>;

/// A `Node` has a key that is used for searching/sorting and up to two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    ///
    /// Only the balanced tree keeps this up to date. The plain tree never reads it.
    pub(crate) height: usize,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` with the given `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The difference in height between the left and right subtrees. Positive values mean the
    /// left side is taller.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Gets the height of the subtree behind `link`. Empty subtrees have a height of 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// Balance factor of the subtree behind `link`, 0 when it is empty.
pub(crate) fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

/// Frees the subtree behind `link` one node at a time. Dropping a `Box` chain directly recurses
/// once per level, which overflows the stack on a plain tree built from sorted keys.
pub(crate) fn dismantle<K>(link: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// The in-order successor candidate: the smallest key in the subtree rooted at `node`.
pub(crate) fn min_key<K>(node: &Node<K>) -> &K {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    &current.key
}
