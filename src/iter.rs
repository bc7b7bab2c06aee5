//! Iterators over a [`Tree`][crate::Tree].
//!
//! Every traversal keeps its own explicit stack (or queue) instead of recursing so that walking a
//! degenerate, chain shaped tree can't overflow the call stack. Each call on the tree returns a
//! fresh iterator, so several traversals of the same tree never interfere with one another.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{self, Link, Node};

/// Pre-order iterator: a node, then its left subtree, then its right subtree. This is the default
/// iteration order of a tree. It is **not** sorted; use [`InOrder`] for ascending values.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left child comes out first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// In-order iterator yielding values in ascending order.
pub struct InOrder<'a, T> {
    /// Nodes paired with whether they are ready to be yielded.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(&node.data);
            }
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            self.stack.push((node, true));
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }

        None
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Post-order iterator: the left subtree, then the right subtree, then the node.
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(&node.data);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }

        None
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Level-order (breadth first) iterator: the root, then every node one level down from left to
/// right, and so on.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(&node.data)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// Owning iterator yielding the values of a consumed tree in ascending order.
pub struct IntoIter<T> {
    /// The left spine of whatever is left to visit. Every node here has already had its left
    /// child detached.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for node in self.stack.drain(..) {
            node::unlink(Some(node));
        }
    }
}
