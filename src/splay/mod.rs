mod iter;
mod node;

use std::{cmp::Ordering, fmt};

use proptest::{collection::vec, prelude::*};

pub use iter::{Iter, IterMut};
use node::{Link, Node};

/// A self-adjusting binary search tree mapping unique ordered keys to
/// values.
///
/// Every access splays the probed key's node (or, on a miss, the closest
/// node on the search path) to the root through zig, zig-zig, and zig-zag
/// rotations, so recently touched keys become cheap to reach again. The
/// payoff is amortized: a sequence of m operations over n keys costs
/// O(m log n) in total, while any single operation may still walk a
/// degenerate path.
///
/// Two behaviors differ from the usual map contract and are deliberate:
///
/// * [`find`](SplayMap::find) takes `&mut self`. Lookups restructure the
///   tree whether or not the key is present, so they are mutations, and
///   the signature says so.
/// * [`insert`](SplayMap::insert) of a key that already exists is a no-op.
///   The original value survives; the new one is dropped. Callers wanting
///   upsert semantics must `find` and overwrite through the returned
///   reference.
pub struct SplayMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> SplayMap<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The key the last access left at the root, if any.
    ///
    /// After a hit this is the probed key; after a miss it is the closest
    /// key on the search path. Useful for observing the self-adjusting
    /// behavior without walking the tree.
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_deref().map(|node| &node.key)
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }

        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Ascending-order iterator over `(&K, &V)`. Never restructures the
    /// tree; this is the one read path that leaves the shape alone.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root)
    }

    /// Ascending-order iterator over `(&K, &mut V)`, for in-place value
    /// edits during traversal.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.root)
    }

    /// Visits every pair in ascending key order, handing the visitor a
    /// mutable reference to each value.
    pub fn for_each(&mut self, mut visit: impl FnMut(&K, &mut V)) {
        for (key, value) in self.iter_mut() {
            visit(key, value);
        }
    }
}

impl<K: Ord, V> SplayMap<K, V> {
    /// Plain BST leaf insertion with no rebalancing.
    ///
    /// Descends from the root and attaches a new leaf at the first empty
    /// slot; equal keys route right. Meant only for bulk construction from
    /// pre-collected unique keys; feeding it sorted data directly yields a
    /// degenerate, list-shaped tree, which is what
    /// [`from_sorted`](SplayMap::from_sorted) exists to avoid.
    pub fn raw_insert(&mut self, key: K, value: V) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(key, value)));
        self.len += 1;
    }

    /// Builds a map of near-minimal height from entries already sorted by
    /// key, with no duplicates.
    ///
    /// Recursively [`raw_insert`](SplayMap::raw_insert)s the median of each
    /// range before its sub-ranges, replicating a balanced binary search
    /// over the sorted input; n entries produce height ⌈log2(n + 1)⌉.
    pub fn from_sorted(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut slots: Vec<Option<(K, V)>> = entries.into_iter().map(Some).collect();
        let mut map = Self::new();
        map.load_median_first(&mut slots);
        map
    }

    fn load_median_first(&mut self, slots: &mut [Option<(K, V)>]) {
        if slots.is_empty() {
            return;
        }
        let mid = slots.len() / 2;
        if let Some((key, value)) = slots[mid].take() {
            self.raw_insert(key, value);
        }
        let (left, right) = slots.split_at_mut(mid);
        self.load_median_first(left);
        self.load_median_first(&mut right[1..]);
    }

    /// Self-balancing insertion.
    ///
    /// Splays on `key` first; if the key is already present the call is a
    /// no-op and `value` is dropped. Otherwise the new node is spliced in
    /// as the root in O(1) beyond the splay: after splaying, everything
    /// less than `key` sits in the root's left subtree and everything
    /// greater in its right, so the old root becomes one child of the new
    /// node and donates the other subtree.
    pub fn insert(&mut self, key: K, value: V) {
        let Some(root) = self.root.take() else {
            self.root = Some(Box::new(Node::new(key, value)));
            self.len += 1;
            return;
        };

        let mut root = Self::splay(root, &key);
        match key.cmp(&root.key) {
            Ordering::Equal => self.root = Some(root),
            Ordering::Less => {
                let mut node = Box::new(Node::new(key, value));
                node.left = root.left.take();
                node.right = Some(root);
                self.root = Some(node);
                self.len += 1;
            }
            Ordering::Greater => {
                let mut node = Box::new(Node::new(key, value));
                node.right = root.right.take();
                node.left = Some(root);
                self.root = Some(node);
                self.len += 1;
            }
        }
    }

    /// Looks up `key`, splaying the tree on it.
    ///
    /// Restructures the tree on every call, hit or miss. A miss still
    /// brings the closest node to the root, which is intentional: failed
    /// lookups improve locality for nearby future probes. On a hit the
    /// returned reference points at the value now stored in the root.
    pub fn find(&mut self, key: &K) -> Option<&mut V> {
        let root = self.root.take()?;
        let root = self.root.insert(Self::splay(root, key));
        if root.key == *key {
            Some(&mut root.value)
        } else {
            None
        }
    }

    // Top-down splay: brings the node holding `key`, or the last node on
    // its search path, to the root of the returned subtree.
    fn splay(mut root: Box<Node<K, V>>, key: &K) -> Box<Node<K, V>> {
        match key.cmp(&root.key) {
            Ordering::Equal => root,
            Ordering::Less => {
                let Some(mut left) = root.left.take() else {
                    return root;
                };
                match key.cmp(&left.key) {
                    Ordering::Less => {
                        // zig-zig: recurse into left-left, rotate the
                        // grandparent first
                        left.left = left.left.take().map(|child| Self::splay(child, key));
                        root.left = Some(left);
                        root = Self::rotate_right(root);
                    }
                    Ordering::Greater => {
                        // zig-zag: recurse into left-right, rotate the
                        // left child up when the recursion found anything
                        left.right = left.right.take().map(|child| Self::splay(child, key));
                        if left.right.is_some() {
                            left = Self::rotate_left(left);
                        }
                        root.left = Some(left);
                    }
                    Ordering::Equal => root.left = Some(left),
                }
                if root.left.is_some() {
                    Self::rotate_right(root)
                } else {
                    root
                }
            }
            Ordering::Greater => {
                let Some(mut right) = root.right.take() else {
                    return root;
                };
                match key.cmp(&right.key) {
                    Ordering::Greater => {
                        right.right = right.right.take().map(|child| Self::splay(child, key));
                        root.right = Some(right);
                        root = Self::rotate_left(root);
                    }
                    Ordering::Less => {
                        right.left = right.left.take().map(|child| Self::splay(child, key));
                        if right.left.is_some() {
                            right = Self::rotate_right(right);
                        }
                        root.right = Some(right);
                    }
                    Ordering::Equal => root.right = Some(right),
                }
                if root.right.is_some() {
                    Self::rotate_left(root)
                } else {
                    root
                }
            }
        }
    }

    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let Some(mut left) = node.left.take() else {
            return node;
        };
        node.left = left.right.take();
        left.right = Some(node);
        left
    }

    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let Some(mut right) = node.right.take() else {
            return node;
        };
        node.right = right.left.take();
        right.left = Some(node);
        right
    }
}

impl<K, V> Default for SplayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for SplayMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SplayMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Content equality over in-order entries; two maps holding the same pairs
/// compare equal no matter what shape their access histories left them in.
impl<K: PartialEq, V: PartialEq> PartialEq for SplayMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for SplayMap<K, V> {}

impl<K: Ord, V> Extend<(K, V)> for SplayMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SplayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut map = Self::new();
        map.extend(entries);
        map
    }
}

impl<'a, K, V> IntoIterator for &'a SplayMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Arbitrary for SplayMap<K, V>
where
    K: Arbitrary + Ord + 'static,
    V: Arbitrary + 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<(K, V)>(), 0..64)
            .prop_map(Self::from_iter)
            .boxed()
    }
}
