#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::rc::Rc;

use super::*;
use crate::cons_list;
use crate::util::panic::assert_panics;

use ListState::*;

#[test]
fn test_construction() {
    let list = cons_list![1, 2, 3];
    assert_eq!(
        list,
        ConsList::new().cons(3).cons(2).cons(1),
        "The macro should prepend right to left, making the first argument the head."
    );
    assert_eq!(
        list.front(),
        Some(&1),
        "The first macro argument should become the head."
    );
    assert_eq!(
        list,
        ConsList::from_iter([1, 2, 3]),
        "Different construction methods should produce equal results."
    );

    assert_eq!(cons_list![], ConsList::<i32>::new());
    assert!(ConsList::<i32>::default().is_empty());
    assert!(!list.is_empty());
    assert!(cons_list![1].state.is_full());
}

#[test]
fn test_len() {
    assert_eq!(ConsList::<i32>::new().len(), 0);
    assert_eq!(cons_list![1, 2, 3].len(), 3);

    for list in [cons_list![], cons_list![9], cons_list![4, 5, 6, 7]] {
        assert_eq!(
            list.len(),
            list.len_iterative(),
            "Both length definitions should agree for every list."
        );
    }
}

#[test]
fn test_tail() {
    let list = cons_list![1, 2, 3];
    assert_eq!(list.tail(), cons_list![2, 3]);
    assert_eq!(cons_list![1].tail(), ConsList::new());
    assert_eq!(
        ConsList::<i32>::new().try_tail(),
        Err(EmptyList),
        "The empty list shouldn't have a tail."
    );
    assert_panics!(
        { ConsList::<i32>::new().tail() },
        "Taking the tail of the empty list should panic."
    );
}

#[test]
fn test_set_head() {
    let list = cons_list![1, 2, 3];
    assert_eq!(list.set_head(9), cons_list![9, 2, 3]);
    assert_eq!(ConsList::<i32>::new().try_set_head(9), Err(EmptyList));
    assert_panics!(
        { ConsList::<i32>::new().set_head(9) },
        "Replacing the head of the empty list should panic."
    );
}

#[test]
fn test_drop_front() {
    let list = cons_list![1, 2, 3];
    assert_eq!(
        list.drop_front(0),
        list,
        "Dropping zero elements should be an identity."
    );
    assert_eq!(list.drop_front(2), cons_list![3]);
    assert_eq!(list.drop_front(3), ConsList::new());
    assert_eq!(
        list.try_drop_front(4),
        Err(EmptyList),
        "Dropping past the end of the list should fail."
    );
    assert_eq!(ConsList::<i32>::new().try_drop_front(1), Err(EmptyList));
    assert_eq!(
        ConsList::<i32>::new().try_drop_front(0),
        Ok(ConsList::new()),
        "Dropping zero elements from the empty list should succeed."
    );
    assert_panics!(
        { ConsList::<i32>::new().drop_front(1) },
        "Dropping from the empty list should panic."
    );
}

#[test]
fn test_drop_front_while() {
    let list = cons_list![1, 2, 3, 4];
    assert_eq!(list.drop_front_while(|value| *value < 3), cons_list![3, 4]);
    assert_eq!(
        list.drop_front_while(|_| true),
        ConsList::new(),
        "Dropping every element should leave the empty list."
    );
    assert_eq!(
        list.drop_front_while(|_| false),
        list,
        "Dropping no elements should leave the list unchanged."
    );
    assert_eq!(ConsList::<i32>::new().drop_front_while(|_| true), ConsList::new());
}

#[test]
fn test_append() {
    let a = cons_list![1, 2];
    let b = cons_list![3, 4];
    let c = cons_list![5];

    assert_eq!(a.append(&b), cons_list![1, 2, 3, 4]);
    assert_eq!(
        a.append(&ConsList::new()),
        a,
        "Appending the empty list should be an identity."
    );
    assert_eq!(
        ConsList::new().append(&a),
        a,
        "Appending to the empty list should be an identity."
    );
    assert_eq!(
        a.append(&b).append(&c),
        a.append(&b.append(&c)),
        "Append should be associative."
    );
}

#[test]
fn test_init() {
    let list = cons_list![1, 2, 3];
    assert_eq!(list.init(), cons_list![1, 2]);
    assert_eq!(cons_list![1].init(), ConsList::new());
    assert_eq!(
        list,
        cons_list![1, 2, 3],
        "Taking the init shouldn't modify the source list."
    );
    assert_eq!(ConsList::<i32>::new().try_init(), Err(EmptyList));
    assert_panics!(
        { ConsList::<i32>::new().init() },
        "Taking the init of the empty list should panic."
    );
}

#[test]
fn test_folds() {
    let list = cons_list![1, 2, 3];
    assert_eq!(list.fold_right(0, |value, sum| value + sum), 6);
    assert_eq!(list.fold_left(0, |sum, value| sum + value), 6);

    // Subtraction exposes the difference in associativity.
    assert_eq!(
        list.fold_right(0, |value, acc| value - acc),
        2,
        "fold_right should group as 1 - (2 - (3 - 0))."
    );
    assert_eq!(
        list.fold_left(0, |acc, value| acc - value),
        -6,
        "fold_left should group as ((0 - 1) - 2) - 3."
    );

    assert_eq!(
        list.fold_left_via_fold_right(0, |acc, value| acc * 10 + value),
        123,
        "The derived fold should accumulate left to right."
    );
    for list in [cons_list![], cons_list![5], cons_list![1, 2, 3, 4]] {
        assert_eq!(
            list.fold_left(0, |acc, value| acc * 2 + value),
            list.fold_left_via_fold_right(0, |acc, value| acc * 2 + value),
            "Deriving fold_left from fold_right should produce identical results."
        );
    }
}

#[test]
fn test_reverse() {
    let list = cons_list![1, 2, 3];
    assert_eq!(list.reverse(), cons_list![3, 2, 1]);
    assert_eq!(
        list.reverse().reverse(),
        list,
        "Reversing twice should round-trip."
    );
    assert_eq!(ConsList::<i32>::new().reverse(), ConsList::new());
}

#[test]
fn test_persistence() {
    let list = cons_list![1, 2, 3];

    let replaced = list.set_head(9);
    let shorter = list.drop_front(2);
    let longer = list.cons(0);

    assert_eq!(replaced, cons_list![9, 2, 3]);
    assert_eq!(shorter, cons_list![3]);
    assert_eq!(longer, cons_list![0, 1, 2, 3]);
    assert_eq!(
        list,
        cons_list![1, 2, 3],
        "Every operation should leave the original list intact."
    );
}

#[test]
fn test_structural_sharing() {
    let list = cons_list![1, 2, 3];
    let tail = list.tail();
    match &tail.state {
        Full(tail_head) => assert_eq!(
            Rc::strong_count(&tail_head.0),
            2,
            "The tail should share cells with the original list rather than copying them."
        ),
        Empty => panic!("The tail of a three element list shouldn't be empty."),
    }

    let a = cons_list![1, 2];
    let b = cons_list![3, 4];
    let suffix = a.append(&b).drop_front(2);
    match (&b.state, &suffix.state) {
        (Full(b_head), Full(suffix_head)) => assert!(
            b_head.shares_cell(suffix_head),
            "Append should reuse the second list's cells as the tail of the result."
        ),
        _ => panic!("Neither list should be empty."),
    }
}

#[test]
fn test_contains() {
    let list = cons_list![1, 2, 3];
    assert!(list.contains(&2));
    assert!(!list.contains(&9));
    assert_eq!(list.index_of(&3), Some(2));
    assert_eq!(list.index_of(&9), None);
}

#[test]
fn test_iterators() {
    let list = cons_list![1, 2, 3];
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(list.iter().count(), 3);
    assert!(ConsList::<i32>::new().iter().next().is_none());
}

#[test]
fn test_equality_and_hash() {
    let list = cons_list![1, 2, 3];
    assert_eq!(list, list.clone(), "A clone should compare equal.");
    assert_ne!(list, cons_list![1, 2]);
    assert_ne!(list, cons_list![1, 2, 4]);

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&list),
        state.hash_one(cons_list![1, 2, 3]),
        "Equal lists should produce the same hash."
    );
}

#[test]
fn test_formatting() {
    let list = cons_list![1, 2, 3];
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(format!("{}", ConsList::<i32>::new()), "()");
}

#[test]
fn test_long_list_stack_usage() {
    // fold_right (and everything built on it) has recursion depth equal to the list
    // length and would overflow the stack here. fold_left and Drop are required to
    // cope with a list of this size.
    let list: ConsList<u64> = (0..1_000_000).collect();

    assert_eq!(list.len_iterative(), 1_000_000);
    assert_eq!(
        list.fold_left(0_u64, |sum, value| sum + value),
        499_999_500_000,
        "fold_left should traverse a million elements without overflowing the stack."
    );

    drop(list);
}
