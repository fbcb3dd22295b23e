use super::{ConsList, ListState};

use ListState::*;

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { curr: &self.state }
    }
}

/// A borrowing iterator over the elements of a [`ConsList`], walking the cells from
/// the head.
///
/// No owning counterpart exists: cells may be shared with other lists, so elements
/// can't be moved out of them.
pub struct Iter<'a, T> {
    pub(crate) curr: &'a ListState<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.curr {
            Empty => None,
            Full(ptr) => {
                self.curr = ptr.next();
                Some(ptr.value())
            },
        }
    }
}

// No ExactSizeIterator here: a cons cell doesn't cache the length of its tail, so
// there is no O(1) size_hint to give.
