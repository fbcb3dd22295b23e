use std::rc::Rc;

use super::ListState;

// NOTE: Cells are held through Rc rather than Box so that lists can share tails. The
// sharing is sound because nothing ever writes through a NodePtr once the cell is
// constructed.

pub(crate) struct NodePtr<T>(pub Rc<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(Rc::new(node))
    }

    pub fn value(&self) -> &T {
        &self.0.value
    }

    pub fn next(&self) -> &ListState<T> {
        &self.0.next
    }

    /// Returns true if both pointers refer to the same cell, not merely equal ones.
    pub fn shares_cell(&self, other: &NodePtr<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        NodePtr(Rc::clone(&self.0))
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: ListState<T>,
}
