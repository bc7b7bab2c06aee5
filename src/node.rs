use std::cmp::Ordering;

/// An owning pointer to a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value and the (up to) two subtrees it owns. There is no parent pointer: anything that
/// needs to rewire a parent walks down holding the parent's slot instead.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Node {
            data,
            left: None,
            right: None,
        })
    }

    /// The children that are actually present, left first.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

/// Walks down from `link` the way a search for `item` would and returns the slot holding the first
/// node equal to `item`. If there is no such node, the empty slot the search fell into is returned.
///
/// Holding the slot rather than the node is what lets callers rewire the parent (or the tree's
/// root) without a parent pointer.
pub(crate) fn locate<'a, T>(mut link: &'a mut Link<T>, item: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    loop {
        let ordering = link.as_deref().map(|node| item.cmp(&node.data));
        match ordering {
            None | Some(Ordering::Equal) => return link,
            Some(ordering) => {
                if let Some(node) = link {
                    link = match ordering {
                        Ordering::Less => &mut node.left,
                        _ => &mut node.right,
                    };
                }
            }
        }
    }
}

/// Removes the largest node of the subtree in `link` and returns its value. The largest node has
/// no right child so its left child (if any) takes its place.
pub(crate) fn take_max<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().map_or(false, |node| node.right.is_some()) {
        if let Some(node) = link {
            link = &mut node.right;
        }
    }

    let max = link.take()?;
    let Node { data, left, .. } = *max;
    *link = left;
    Some(data)
}

/// Drops a subtree one node at a time. Letting `Box` drop a degenerate (chain shaped) tree
/// recurses once per level and can overflow the stack.
pub(crate) fn unlink<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
