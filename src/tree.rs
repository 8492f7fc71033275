//! An unbalanced BST over `i64` keys with owned optional children, plus the
//! derived queries (height, root-to-leaf path-sum membership, inclusive
//! range-sum) and a lazy in-order [`Iter`] driven by an explicit stack.
//!
//! # Examples
//!
//! ```
//! use naive_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(1), None);
//!
//! tree.insert(1, "one");
//! assert_eq!(tree.get(1), Some(&"one"));
//!
//! // Equal keys are kept, not overwritten; lookup sees the shallowest.
//! tree.insert(1, "uno");
//! assert_eq!(tree.size(), 2);
//! assert_eq!(tree.get(1), Some(&"one"));
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(1), Some("one"));
//! assert_eq!(tree.get(1), Some(&"uno"));
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::stack::Stack;

type Link<V> = Option<Box<Node<V>>>;

#[derive(Clone, Debug)]
struct Node<V> {
    key: i64,
    value: V,
    left: Link<V>,
    right: Link<V>,
}

/// An unbalanced Binary Search Tree mapping `i64` keys to values.
///
/// Insertion routes a key strictly below the current node's key into the
/// left subtree and everything else (equal keys included) into the right
/// subtree, so duplicates are permitted and always sit rightward of each
/// other. There is no rebalancing: inserting keys in sorted order produces a
/// list-shaped tree with `O(n)` height, and every operation's cost follows
/// the height.
#[derive(Clone, Debug)]
pub struct Tree<V> {
    root: Link<V>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for Tree<V> {
    fn drop(&mut self) {
        // Release with an explicit worklist instead of recursing through the
        // child boxes, so a list-shaped tree cannot overflow the call stack.
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<V> Tree<V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes in the tree, counted by a full traversal.
    pub fn size(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.size())
    }

    /// Returns the greatest number of edges on any root-to-leaf path.
    ///
    /// Both an empty tree and a single-node tree have height 0; a root with
    /// one child has height 1.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.height())
    }

    /// Inserts the given key/value pair as a new leaf.
    ///
    /// A key strictly below the current node descends left, anything else
    /// descends right, so an equal key always lands in the right subtree of
    /// the existing occurrence. Nothing is ever overwritten and insertion
    /// never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, "two");
    /// tree.insert(2, "dos");
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, key: i64, value: V) {
        insert_recurse(&mut self.root, key, value);
    }

    /// Potentially finds the value associated with the given key.
    ///
    /// The descent uses the same comparison rule as [`insert`](Self::insert),
    /// so when duplicates exist this returns the *shallowest* occurrence —
    /// the one closest to the root — and `None` when the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, "one");
    ///
    /// assert_eq!(tree.get(1), Some(&"one"));
    /// assert_eq!(tree.get(42), None);
    /// ```
    pub fn get(&self, key: i64) -> Option<&V> {
        self.root.as_ref().and_then(|node| node.get(key))
    }

    /// Removes the shallowest node with the given key and returns its value.
    ///
    /// A leaf is unlinked, a node with one child is replaced by that child,
    /// and a node with two children has its in-order successor's key and
    /// value copied into it before the successor (the leftmost node of the
    /// right subtree, which has at most one child) is detached. Removing an
    /// absent key is a no-op that returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, "one");
    ///
    /// assert_eq!(tree.remove(1), Some("one"));
    /// assert_eq!(tree.remove(1), None);
    /// ```
    pub fn remove(&mut self, key: i64) -> Option<V> {
        remove_recurse(&mut self.root, key)
    }

    /// Returns `true` iff some root-to-leaf path's keys sum to `target`
    /// exactly at a leaf.
    ///
    /// An internal node whose running total equals `target` does not count.
    /// The search prunes on a threshold: once the running total reaches or
    /// passes `target` before a leaf, that branch is abandoned — even though
    /// negative keys further down could in principle still reach the target.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert!(tree.path_sum(8)); // 5 + 3
    /// assert!(tree.path_sum(13)); // 5 + 8
    /// assert!(!tree.path_sum(5)); // the root is not a leaf
    /// ```
    pub fn path_sum(&self, target: i64) -> bool {
        self.root
            .as_ref()
            .map_or(false, |node| node.path_sum(0, target))
    }

    /// Returns the sum of all keys `k` with `lower <= k <= upper`, both
    /// bounds inclusive.
    ///
    /// Subtrees that cannot intersect the range are pruned: the left child
    /// is visited only when the current key is strictly above `lower` and
    /// the right child only when it is strictly below `upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [8, 2, 5, 12, 15] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert_eq!(tree.range_sum(5, 12), 25);
    /// assert_eq!(tree.range_sum(100, 200), 0);
    /// ```
    pub fn range_sum(&self, lower: i64, upper: i64) -> i64 {
        self.root
            .as_ref()
            .map_or(0, |node| node.range_sum(lower, upper))
    }

    /// Returns a lazy in-order iterator over the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let keys: Vec<i64> = tree.iter().map(|(key, _)| key).collect();
    /// assert_eq!(keys, [1, 3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }
}

impl<'a, V> IntoIterator for &'a Tree<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Node<V> {
    fn new(key: i64, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn size(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |node| node.size());
        let right = self.right.as_ref().map_or(0, |node| node.size());
        1 + left + right
    }

    fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |node| node.height() + 1);
        let right = self.right.as_ref().map_or(0, |node| node.height() + 1);
        left.max(right)
    }

    fn get(&self, key: i64) -> Option<&V> {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_ref().and_then(|node| node.get(key)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_ref().and_then(|node| node.get(key)),
        }
    }

    fn path_sum(&self, running: i64, target: i64) -> bool {
        let total = running + self.key;
        if self.is_leaf() {
            return total == target;
        }
        // Threshold pruning: a branch whose running total has reached the
        // target before a leaf is abandoned, negative keys below or not.
        if total >= target {
            return false;
        }
        self.left
            .as_ref()
            .map_or(false, |node| node.path_sum(total, target))
            || self
                .right
                .as_ref()
                .map_or(false, |node| node.path_sum(total, target))
    }

    fn range_sum(&self, lower: i64, upper: i64) -> i64 {
        let mut sum = if lower <= self.key && self.key <= upper {
            self.key
        } else {
            0
        };
        if self.key > lower {
            if let Some(left) = &self.left {
                sum += left.range_sum(lower, upper);
            }
        }
        if self.key < upper {
            if let Some(right) = &self.right {
                sum += right.range_sum(lower, upper);
            }
        }
        sum
    }
}

fn insert_recurse<V>(link: &mut Link<V>, key: i64, value: V) {
    match link {
        Some(node) => {
            if key < node.key {
                insert_recurse(&mut node.left, key, value);
            } else {
                insert_recurse(&mut node.right, key, value);
            }
        }
        None => *link = Some(Box::new(Node::new(key, value))),
    }
}

fn remove_recurse<V>(link: &mut Link<V>, key: i64) -> Option<V> {
    let node_key = link.as_ref()?.key;
    match key.cmp(&node_key) {
        Ordering::Less => remove_recurse(&mut link.as_mut()?.left, key),
        Ordering::Greater => remove_recurse(&mut link.as_mut()?.right, key),
        Ordering::Equal => {
            let node = link.as_deref_mut()?;
            if node.left.is_some() && node.right.is_some() {
                // Two children: keep this node's identity, overwrite its
                // key/value with the in-order successor's, detach the
                // successor. The successor has no left child, so detaching
                // it is the one-child case and cannot recurse back here.
                let successor = detach_min(&mut node.right);
                node.key = successor.key;
                Some(mem::replace(&mut node.value, successor.value))
            } else {
                let mut node = link.take()?;
                *link = node.left.take().or_else(|| node.right.take());
                Some(node.value)
            }
        }
    }
}

/// Unlinks and returns the leftmost node of a non-empty subtree, promoting
/// its right child (if any) into its slot.
fn detach_min<V>(link: &mut Link<V>) -> Box<Node<V>> {
    if link.as_ref().map_or(false, |node| node.left.is_some()) {
        detach_min(&mut link.as_mut().expect("Left child implies a node").left)
    } else {
        let mut min = link.take().expect("detach_min requires a non-empty subtree");
        *link = min.right.take();
        min
    }
}

/// A lazy in-order iterator over a [`Tree`], yielding `(key, &value)` pairs
/// in sorted key order.
///
/// The iterator simulates a suspended recursive in-order walk with one
/// explicit [`Stack`] of borrowed nodes: the stack always holds exactly the
/// remaining left-spine chain, next in-order node on top. Advancing pops
/// that node and pushes the left spine of its right child.
///
/// `Iter` borrows the tree for its whole lifetime, so structural mutation
/// of the tree while any iterator over it is live is rejected at compile
/// time — the dangling-cursor hazard of a non-owning cursor cannot occur.
pub struct Iter<'a, V> {
    cursor: Stack<&'a Node<V>>,
}

impl<'a, V> Iter<'a, V> {
    fn new(tree: &'a Tree<V>) -> Self {
        let mut cursor = Stack::new();
        push_left_spine(&mut cursor, tree.root.as_deref());
        Self { cursor }
    }

    /// Returns `true` if the iterator has at least one more node to visit.
    ///
    /// Once this returns `false` it stays `false`; nothing refills the
    /// cursor after the traversal is exhausted.
    pub fn has_next(&self) -> bool {
        !self.cursor.is_empty()
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.pop()?;
        push_left_spine(&mut self.cursor, node.right.as_deref());
        Some((node.key, &node.value))
    }
}

/// Pushes `node` and then every left descendant of it onto the cursor, so
/// the smallest key of the subtree ends up on top.
fn push_left_spine<'a, V>(cursor: &mut Stack<&'a Node<V>>, mut node: Option<&'a Node<V>>) {
    while let Some(n) = node {
        cursor.push(n);
        node = n.left.as_deref();
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a key-multiset model so the
    /// two can be compared after a random smattering of inserts and removes.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut BTreeMap<i64, Vec<i8>>) {
        for op in ops {
            match *op {
                Op::Insert(key, value) => {
                    tree.insert(key, value);
                    model.entry(key).or_default().push(value);
                }
                Op::Remove(key) => match (tree.remove(key), model.get_mut(&key)) {
                    (Some(removed), Some(values)) => {
                        let pos = values
                            .iter()
                            .position(|v| *v == removed)
                            .expect("removed a value that was never inserted");
                        values.swap_remove(pos);
                        if values.is_empty() {
                            model.remove(&key);
                        }
                    }
                    (None, None) => {}
                    (removed, _) => panic!("tree and model disagree on {key}: {removed:?}"),
                },
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_matches_multiset_model(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = BTreeMap::new();
            do_ops(&ops, &mut tree, &mut model);

            let expected: Vec<i64> = model
                .iter()
                .flat_map(|(key, values)| std::iter::repeat(*key).take(values.len()))
                .collect();

            tree.iter().map(|(key, _)| key).collect::<Vec<_>>() == expected
                && tree.size() == expected.len()
                && model
                    .iter()
                    .all(|(key, values)| tree.get(*key).map_or(false, |v| values.contains(v)))
        }
    }
}
