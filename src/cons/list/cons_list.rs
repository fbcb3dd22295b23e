use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::rc::Rc;

use derive_more::IsVariant;

use super::{Iter, Node, NodePtr};
#[doc(inline)]
pub use crate::util::error::EmptyList;
use crate::util::result::ResultExtension;

/// An immutable, singly-linked list built from shared cons cells.
///
/// Every operation leaves the receiver intact and returns a new list; wherever
/// possible the new list shares cells with the old one instead of copying them, which
/// is safe because a cell is never modified after construction.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ConsList.
/// - `c`: The number of items removed or retained by the operation.
///
/// | Method | Complexity |
/// |-|-|
/// | `cons` | `O(1)` |
/// | `front` | `O(1)` |
/// | `tail` | `O(1)` |
/// | `set_head` | `O(1)` |
/// | `drop_front` | `O(c)` |
/// | `drop_front_while` | `O(c)` |
/// | `append` | `O(n)` in `self` only |
/// | `init` | `O(n)` |
/// | `len` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// Unlike my other lists, the length isn't cached anywhere, so `len` costs a full
/// traversal. Caching it in each cell would be easy but it isn't the point of this
/// type.
pub struct ConsList<T> {
    pub(crate) state: ListState<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(NodePtr<T>),
}

use ListState::*;

impl<T> ConsList<T> {
    /// Creates a new ConsList with no elements.
    pub const fn new() -> ConsList<T> {
        ConsList { state: Empty }
    }

    /// Returns true if the ConsList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the number of elements in the list, counted with
    /// [`fold_right`](ConsList::fold_right).
    ///
    /// Inherits `fold_right`'s recursion depth; [`len_iterative`](ConsList::len_iterative)
    /// is the constant-stack equivalent.
    pub fn len(&self) -> usize {
        self.fold_right(0, |_, count| count + 1)
    }

    /// Returns the number of elements in the list, counted with
    /// [`fold_left`](ConsList::fold_left) so the stack usage stays constant however
    /// long the list is. Always equal to [`len`](ConsList::len).
    pub fn len_iterative(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ptr) => Some(ptr.value()),
        }
    }

    /// Returns a new list with `value` prepended. The receiver's entire spine becomes
    /// the tail of the new list, shared rather than copied.
    pub fn cons(&self, value: T) -> ConsList<T> {
        ConsList {
            state: Full(NodePtr::from_node(Node {
                value,
                next: self.state.clone(),
            })),
        }
    }

    /// Returns the list without its first element, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn tail(&self) -> ConsList<T> {
        self.try_tail().throw()
    }

    /// Returns the list without its first element, or an [`Err`] if the list is
    /// empty. The result shares the receiver's cells.
    pub fn try_tail(&self) -> Result<ConsList<T>, EmptyList> {
        match &self.state {
            Empty => Err(EmptyList),
            Full(ptr) => Ok(ConsList {
                state: ptr.next().clone(),
            }),
        }
    }

    /// Returns a new list with the first element replaced by `value`, panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn set_head(&self, value: T) -> ConsList<T> {
        self.try_set_head(value).throw()
    }

    /// Returns a new list with the first element replaced by `value`, or an [`Err`]
    /// if the list is empty. Only the head cell is new; the old tail is shared.
    pub fn try_set_head(&self, value: T) -> Result<ConsList<T>, EmptyList> {
        match &self.state {
            Empty => Err(EmptyList),
            Full(ptr) => Ok(ConsList {
                state: Full(NodePtr::from_node(Node {
                    value,
                    next: ptr.next().clone(),
                })),
            }),
        }
    }

    /// Returns the list with the first `count` elements removed, panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if the list runs out of elements before `count` reaches zero.
    pub fn drop_front(&self, count: usize) -> ConsList<T> {
        self.try_drop_front(count).throw()
    }

    /// Returns the list with the first `count` elements removed, or an [`Err`] if the
    /// list runs out of elements before `count` reaches zero. Dropping zero elements
    /// from the empty list succeeds.
    pub fn try_drop_front(&self, count: usize) -> Result<ConsList<T>, EmptyList> {
        let mut state = &self.state;
        for _ in 0..count {
            match state {
                Empty => return Err(EmptyList),
                Full(ptr) => state = ptr.next(),
            }
        }
        Ok(ConsList {
            state: state.clone(),
        })
    }

    /// Returns the list starting at the first element for which `predicate` is false,
    /// removing the longest matching prefix. Returns the empty list if every element
    /// matches.
    pub fn drop_front_while<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> ConsList<T> {
        let mut state = &self.state;
        while let Full(ptr) = state {
            if !predicate(ptr.value()) {
                break;
            }
            state = ptr.next();
        }
        ConsList {
            state: state.clone(),
        }
    }

    /// Folds the list from the right: `f(x1, f(x2, ... f(xn, init)))`.
    ///
    /// This is the traversal that mirrors the list's own recursive structure, and it
    /// pays for that with a recursion depth equal to the length of the list: each
    /// step has to finish folding the whole tail before it can apply `f`. Folding a
    /// list of a million elements this way will overflow the stack, which is a
    /// documented limit of this method rather than something it works around. Use
    /// [`fold_left`](ConsList::fold_left) when the accumulation order allows it.
    pub fn fold_right<'a, B, F: Fn(&'a T, B) -> B>(&'a self, init: B, f: F) -> B {
        self.state.fold_right(init, &f)
    }

    /// Folds the list from the left: `f(f(... f(init, x1), x2) ..., xn)`.
    ///
    /// Implemented as a loop over the cells, so stack usage is constant regardless of
    /// the length of the list.
    pub fn fold_left<'a, B, F: FnMut(B, &'a T) -> B>(&'a self, init: B, mut f: F) -> B {
        let mut acc = init;
        let mut state = &self.state;
        while let Full(ptr) = state {
            acc = f(acc, ptr.value());
            state = ptr.next();
        }
        acc
    }

    /// Produces the same result as [`fold_left`](ConsList::fold_left), derived from
    /// [`fold_right`](ConsList::fold_right) by folding the list into one composed
    /// function and then applying it to `init`.
    ///
    /// Exists to demonstrate that either fold can be expressed with the other. It
    /// inherits `fold_right`'s recursion depth and allocates a boxed closure per
    /// element, so it is a curiosity, not a replacement for `fold_left`.
    pub fn fold_left_via_fold_right<'a, B, F: Fn(B, &'a T) -> B>(&'a self, init: B, f: F) -> B {
        let f = &f;
        let composed = self.fold_right(
            Box::new(|acc| acc) as Box<dyn FnOnce(B) -> B + '_>,
            |value, apply_rest| {
                Box::new(move |acc| apply_rest(f(acc, value))) as Box<dyn FnOnce(B) -> B + '_>
            },
        );
        composed(init)
    }

    /// Returns a borrowing iterator over the elements of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Clone> ConsList<T> {
    /// Returns a new list containing all elements of `self` followed by all elements
    /// of `other`.
    ///
    /// `self`'s elements are cloned into fresh cells; `other`'s spine becomes the
    /// tail of the result, shared rather than copied. Built on
    /// [`fold_right`](ConsList::fold_right), so recursion depth grows with `self`'s
    /// length.
    pub fn append(&self, other: &ConsList<T>) -> ConsList<T> {
        self.fold_right(other.clone(), |value, rest| rest.cons(value.clone()))
    }

    /// Returns a new list with the elements in reverse order, accumulated with
    /// [`fold_left`](ConsList::fold_left) by prepending.
    pub fn reverse(&self) -> ConsList<T> {
        self.fold_left(ConsList::new(), |reversed, value| {
            reversed.cons(value.clone())
        })
    }

    /// Returns the list without its last element, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn init(&self) -> ConsList<T> {
        self.try_init().throw()
    }

    /// Returns the list without its last element, or an [`Err`] if the list is empty.
    ///
    /// Unlike [`try_tail`](ConsList::try_tail) this can't share anything: every
    /// retained cell needs a new `next`, so every retained element is cloned.
    /// Recursion depth grows with the length of the list.
    pub fn try_init(&self) -> Result<ConsList<T>, EmptyList> {
        match &self.state {
            Empty => Err(EmptyList),
            Full(ptr) => Ok(ConsList {
                state: ptr.without_last(),
            }),
        }
    }
}

impl<T: Eq> ConsList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item {
                return Some(index);
            }
        }
        None
    }

    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        for element in self.iter() {
            if element == item {
                return true;
            }
        }
        false
    }
}

impl<T> ListState<T> {
    fn fold_right<'a, B, F: Fn(&'a T, B) -> B>(&'a self, init: B, f: &F) -> B {
        match self {
            Empty => init,
            Full(ptr) => f(ptr.value(), ptr.next().fold_right(init, f)),
        }
    }
}

impl<T: Clone> NodePtr<T> {
    fn without_last(&self) -> ListState<T> {
        match self.next() {
            Empty => Empty,
            Full(next) => Full(NodePtr::from_node(Node {
                value: self.value().clone(),
                next: next.without_last(),
            })),
        }
    }
}

/// Construct a [`ConsList`] from a sequence of elements.
///
/// Elements are prepended right to left, so the first argument becomes the head:
///
/// ```
/// use cons_list::{ConsList, cons_list};
///
/// assert_eq!(
///     cons_list![1, 2, 3],
///     ConsList::new().cons(3).cons(2).cons(1),
/// );
/// ```
#[macro_export]
macro_rules! cons_list {
    () => { $crate::ConsList::new() };

    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::cons_list![$($rest),*].cons($head)
    };
}

impl<T> Clone for ConsList<T> {
    fn clone(&self) -> Self {
        ConsList {
            state: self.state.clone(),
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(ptr) => Full(ptr.clone()),
        }
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        // The compiler-generated drop would recurse once per cell and overflow the
        // stack on long lists. Cells are popped in a loop instead, stopping at the
        // first cell that some other list still shares.
        let mut state = mem::replace(&mut self.state, Empty);
        while let Full(ptr) = state {
            match Rc::try_unwrap(ptr.0) {
                Ok(node) => state = node.next,
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .collect::<Vec<T>>()
            .into_iter()
            .rev()
            .fold(ConsList::new(), |list, value| list.cons(value))
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut state_a = &self.state;
        let mut state_b = &other.state;

        loop {
            match (state_a, state_b) {
                (Empty, Empty) => break true,
                // Two lists sharing a spine are equal without comparing the values.
                (Full(a), Full(b)) if a.shares_cell(b) => break true,
                (Full(a), Full(b)) => {
                    if a.value() != b.value() {
                        break false;
                    }
                    state_a = a.next();
                    state_b = b.next();
                },
                _ => break false,
            }
        }
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for ConsList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for ConsList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
