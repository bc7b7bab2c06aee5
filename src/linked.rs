//! A linked BST. Each node owns its children through a `Box` and there are no parent pointers.
//! Ordinary insertion never rebalances, so the shape of the tree depends on insertion order;
//! [`Tree::rebalance`] rebuilds it with near-minimal height.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Adding an equal value keeps both.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing takes out one copy at a time.
//! assert_eq!(tree.remove(&1), Ok(Some(1)));
//! assert_eq!(tree.remove(&1), Ok(Some(1)));
//!
//! // Removing from an empty tree has nothing to return...
//! assert_eq!(tree.remove(&1), Ok(None));
//!
//! // ...but removing something missing from a non-empty tree is an error.
//! tree.add(2);
//! assert_eq!(tree.remove(&1), Err(Error::NotFound));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{InOrder, IntoIter, Iter, LevelOrder, PostOrder};
use crate::node::{self, Link, Node};

/// A Binary Search Tree storing values of type `T`. Values equal to one already in the tree are
/// kept and go into its right subtree.
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::unlink(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of values in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.size == 0, self.root.is_none());
        self.size == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.size);
        node::unlink(self.root.take());
        self.size = 0;
    }

    /// Iterates over the values in pre-order: each node, then its left subtree, then its right
    /// subtree. The values are **not** sorted; see [`Tree::inorder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Same as [`Tree::iter`].
    pub fn preorder(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Iterates over the values in post-order: left subtree, right subtree, then the node.
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }

    /// Iterates over the values one level at a time, starting from the root.
    pub fn levelorder(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref())
    }

    /// The number of edges on the longest path from the root down to a leaf, or `None` for an
    /// empty tree. A lone root has height 0.
    pub fn height(&self) -> Option<usize> {
        let root = self.root.as_deref()?;

        let mut height = 0;
        let mut stack = vec![(root, 0)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }

        Some(height)
    }

    /// A rough balance check: `true` if the height is below `2 * log2(len + 1) - 1`, i.e. within a
    /// factor of about two of the smallest possible height. An empty tree counts as balanced.
    pub fn is_balanced(&self) -> bool {
        match self.height() {
            None => true,
            Some(height) => (height as f64) < 2.0 * ((self.size + 1) as f64).log2() - 1.0,
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Potentially finds a value equal to `item` in this tree. If there isn't one, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(&node.data),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }

        None
    }

    /// Returns `true` if a value equal to `item` is in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Adds `item` as a new leaf. Smaller values go left and everything else, including equal
    /// values, goes right. Nothing is rebalanced, so adding values in sorted order builds a chain.
    pub fn add(&mut self, item: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Removes one value equal to `item` and returns it.
    ///
    /// Returns `Ok(None)` if the tree is empty and [`Error::NotFound`] if the tree has values but
    /// none equal to `item`. In that case the tree is left untouched.
    ///
    /// A node with two children keeps its place: it takes the largest value of its left subtree
    /// and the node that held that value is unlinked instead.
    pub fn remove(&mut self, item: &T) -> Result<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }

        let link = node::locate(&mut self.root, item);
        let Some(mut found) = link.take() else {
            return Err(Error::NotFound);
        };

        if found.right.is_some() {
            if let Some(max) = node::take_max(&mut found.left) {
                trace!("removing a node with two children");
                let removed = mem::replace(&mut found.data, max);
                *link = Some(found);
                self.size -= 1;
                return Ok(Some(removed));
            }
        }

        trace!("removing a node with at most one child");
        let Node { data, left, right } = *found;
        *link = left.or(right);
        self.size -= 1;
        Ok(Some(data))
    }

    /// Overwrites the first value found equal to `item` with `new_item` and returns the old
    /// value, or `None` if there is no such value.
    ///
    /// The tree is not restructured. It is up to the caller to pass a `new_item` that still fits
    /// between the node's neighbours, otherwise later searches may miss values.
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        node::locate(&mut self.root, item)
            .as_mut()
            .map(|node| mem::replace(&mut node.data, new_item))
    }

    /// Returns every value `v` with `low <= v <= high`, in ascending order. Subtrees that can't
    /// hold such values are never visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.range_find(&4, &8), [&4, &5, &7, &8]);
    /// assert!(tree.range_find(&8, &4).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        let mut found = Vec::new();
        let mut pending: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            if node.data < *low {
                pending.extend(node.right.as_deref());
            } else if node.data > *high {
                pending.extend(node.left.as_deref());
            } else {
                found.push(&node.data);
                pending.extend(node.right.as_deref());
                pending.extend(node.left.as_deref());
            }
        }

        // The pruned walk isn't in order.
        found.sort();
        found
    }

    /// The smallest value strictly greater than `item`, whether or not `item` itself is in the
    /// tree.
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut candidate = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Less => {
                    candidate = Some(&node.data);
                    current = node.left.as_deref();
                }
                // Past an equal node the answer is the leftmost bigger value on its right, if
                // any. Duplicates of `item` sit there too and are skipped the same way.
                Ordering::Equal | Ordering::Greater => current = node.right.as_deref(),
            }
        }

        candidate
    }

    /// The largest value strictly less than `item`, whether or not `item` itself is in the tree.
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut candidate = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Greater => {
                    candidate = Some(&node.data);
                    current = node.right.as_deref();
                }
                // Everything left of an equal node is smaller; the rightmost of those wins.
                Ordering::Equal | Ordering::Less => current = node.left.as_deref(),
            }
        }

        candidate
    }

    /// Rebuilds the tree with near-minimal height. The values are taken out in ascending order and
    /// added back breadth first: the middle value of the whole run, then the middles of the halves
    /// on either side of it, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// tree.rebalance();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = if log::log_enabled!(log::Level::Debug) {
            self.height()
        } else {
            None
        };

        let mut sorted: Vec<Option<T>> = mem::take(self).into_iter().map(Some).collect();

        let mut pending = VecDeque::from([(0, sorted.len())]);
        while let Some((start, end)) = pending.pop_front() {
            if start < end {
                let middle = start + (end - start) / 2;
                if let Some(item) = sorted[middle].take() {
                    self.add(item);
                }
                pending.push_back((start, middle));
                pending.push_back((middle + 1, end));
            }
        }

        debug!(
            "rebalanced {} values: height {:?} -> {:?}",
            self.size,
            height_before,
            self.height()
        );
    }
}

impl<T> Clone for Tree<T>
where
    T: Ord + Clone,
{
    /// Re-adding the values in pre-order rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

/// Draws the tree rotated a quarter turn counter-clockwise: the root is on the left edge, right
/// subtrees are above their parent and every level of depth adds one `"| "`.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node<T>, usize, bool)> = self
            .root
            .as_deref()
            .map(|root| (root, 0, false))
            .into_iter()
            .collect();
        while let Some((node, level, visited)) = stack.pop() {
            if visited {
                writeln!(f, "{}{}", "| ".repeat(level), node.data)?;
                continue;
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, level + 1, false));
            }
            stack.push((node, level, true));
            if let Some(right) = node.right.as_deref() {
                stack.push((right, level + 1, false));
            }
        }

        Ok(())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Adds the values one by one, in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.size, 0);
        IntoIter::new(self.root.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
