//! This crate is my attempt at writing an immutable, singly-linked cons list.
//!
//! # Purpose
//! This is a companion piece to my other collection types, written as a learning
//! exercise in persistent data structures. A cons list is about the simplest data
//! structure that can be shared instead of copied: every cell is frozen at
//! construction, so two lists can safely own the same tail. Operations that would
//! mutate an ordinary list in place instead return a new list here and leave the old
//! one untouched.
//!
//! # Method
//! [`ConsList`] is modelled as a two-variant state enum (empty, or a pointer to the
//! first cell), matched exhaustively everywhere, with cells behind [`Rc`](std::rc::Rc)
//! so that tails can be shared rather than cloned. The interesting part is the pair of
//! folds: [`fold_right`](ConsList::fold_right) recurses the way the type itself is
//! defined and therefore uses stack proportional to the length of the list, while
//! [`fold_left`](ConsList::fold_left) walks the cells in a loop and uses constant
//! stack. Both are kept in those forms deliberately;
//! [`fold_left_via_fold_right`](ConsList::fold_left_via_fold_right) shows that either
//! fold can be expressed with the other, at a cost.
//!
//! # Error Handling
//! The only way an operation here can fail is by asking a non-empty-list question of
//! the empty list. Those operations come in pairs, the same way my other collections
//! do it: a `try_` method returning a strongly typed [`Result`] (the error is a ZST
//! implementing [`Error`](std::error::Error)), and a panicking convenience wrapper for
//! callers who have already checked.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod cons;

pub(crate) mod util;

#[doc(inline)]
pub use cons::ConsList;
