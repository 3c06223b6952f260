//! BinarySearchTree: unbalanced BST with Hibbard deletion.
//!
//! Smaller values go left, larger go right, duplicates are ignored. No
//! balancing is done, so sorted input degrades to a list. Every walk
//! (insert, search, remove, teardown) is a loop or uses an explicit stack,
//! so degenerate trees cannot exhaust the call stack.

use core::cmp::Ordering;
use core::fmt;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

pub struct BinarySearchTree<T> {
    root: Link<T>,
    // Distinct values present, not insert calls.
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns false (and leaves the tree unchanged) if `value` is present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *link = Some(Node::leaf(value));
        self.len += 1;
        true
    }

    pub fn search(&self, value: &T) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    /// Hibbard deletion. A node with two children takes the value of its
    /// in-order successor, which is then unlinked from the right subtree.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut link = &mut self.root;
        loop {
            let ord = match link.as_deref() {
                None => return false,
                Some(node) => value.cmp(&node.value),
            };
            match ord {
                Ordering::Equal => break,
                Ordering::Less => match link {
                    Some(node) => link = &mut node.left,
                    None => return false,
                },
                Ordering::Greater => match link {
                    Some(node) => link = &mut node.right,
                    None => return false,
                },
            }
        }
        let Some(mut node) = link.take() else {
            return false;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (successor, rest) = Self::take_min(right);
                node.value = successor;
                node.left = Some(left);
                node.right = rest;
                Some(node)
            }
        };
        self.len -= 1;
        true
    }

    // Detach the minimum of `subtree`; returns it and what remains.
    fn take_min(mut subtree: Box<Node<T>>) -> (T, Link<T>) {
        let mut link = &mut subtree.left;
        while link.as_ref().is_some_and(|n| n.left.is_some()) {
            match link {
                Some(node) => link = &mut node.left,
                None => break,
            }
        }
        match link.take() {
            Some(min) => {
                let Node { value, right, .. } = *min;
                *link = right;
                (value, Some(subtree))
            }
            None => {
                let Node { value, right, .. } = *subtree;
                (value, right)
            }
        }
    }

    pub fn min(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(next) = cur.left.as_deref() {
            cur = next;
        }
        Some(&cur.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(next) = cur.right.as_deref() {
            cur = next;
        }
        Some(&cur.value)
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            best = best.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        best
    }

    /// Ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut it = InOrder { stack: Vec::new() };
        it.push_left(self.root.as_deref());
        it
    }
}

impl<T> BinarySearchTree<T> {
    /// Free every node. Children are detached before their parent is dropped.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    fn pre_order(&self) -> impl Iterator<Item = &T> + '_ {
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        core::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
            Some(&node.value)
        })
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Re-inserting in pre-order rebuilds the same shape.
impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        self.pre_order().cloned().collect()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = BinarySearchTree::new();
        t.extend(iter);
        t
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

/// In-order iterator driven by an explicit stack of pending ancestors.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left(&mut self, mut cur: Option<&'a Node<T>>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(t: &BinarySearchTree<i32>) -> Vec<i32> {
        t.in_order().copied().collect()
    }

    #[test]
    fn duplicates_do_not_count() {
        let mut t = BinarySearchTree::new();
        assert!(t.insert(5));
        assert!(!t.insert(5));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn remove_leaf_one_child_two_children() {
        let mut t: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80, 65].into_iter().collect();
        assert!(t.remove(&20)); // leaf
        assert!(t.remove(&60)); // one child (65)
        assert!(t.remove(&50)); // two children; successor 65 moves up
        assert!(!t.remove(&50));
        assert_eq!(sorted(&t), [30, 40, 65, 70, 80]);
        assert_eq!(t.len(), 5);
        assert!(t.search(&65));
        assert!(!t.search(&60));
    }

    /// Invariant: the successor is the minimum of the right subtree even
    /// when it sits several levels down.
    #[test]
    fn successor_deep_in_right_subtree() {
        let mut t: BinarySearchTree<i32> = [10, 5, 20, 15, 25, 12, 17, 13].into_iter().collect();
        assert!(t.remove(&10));
        assert_eq!(sorted(&t), [5, 12, 13, 15, 17, 20, 25]);
        // 13 was the successor's right child and must still be reachable.
        assert!(t.search(&13));
        assert_eq!(t.len(), 7);
    }

    #[test]
    fn remove_root_until_empty() {
        let mut t: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
        for v in [2, 1, 3] {
            assert!(t.remove(&v));
        }
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.min(), None);
        assert_eq!(t.height(), 0);
    }

    #[test]
    fn min_max_height() {
        let t: BinarySearchTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
        assert_eq!(t.min(), Some(&1));
        assert_eq!(t.max(), Some(&8));
        assert_eq!(t.height(), 3);
    }

    #[test]
    fn clone_preserves_shape() {
        let t: BinarySearchTree<i32> = [5, 3, 8, 1, 4, 9].into_iter().collect();
        let c = t.clone();
        assert_eq!(sorted(&c), sorted(&t));
        assert_eq!(c.height(), t.height());
        assert_eq!(
            c.pre_order().copied().collect::<Vec<_>>(),
            t.pre_order().copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn sorted_insertion_is_safe_to_drop() {
        let t: BinarySearchTree<u32> = (0..10_000).collect();
        assert_eq!(t.height(), 10_000);
        assert!(t.search(&9_999));
        drop(t);
    }
}
