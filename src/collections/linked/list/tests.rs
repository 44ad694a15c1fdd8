#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use proptest::prelude::*;

use super::*;
use crate::util::alloc::{Counted, DropCounter};
use crate::util::panic::assert_panics;

#[test]
fn test_front_operations_and_splicing() {
    let mut list = LinkedList::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);
    assert_eq!(list, LinkedList::from([1, 2, 3]));
    assert_eq!(list.len(), 3);

    let first = list.successor(list.before_begin());
    let nine = list.insert_after(first, 9);
    assert_eq!(*list.get(nine), 9);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 9, 2, 3],
        "Inserting after the first element should splice directly after it."
    );
    list.verify_links();

    let after = list.erase_after(first);
    assert_eq!(*list.get(after), 2, "Erasing should return the new successor.");
    assert_eq!(list, LinkedList::from([1, 2, 3]));

    for expected in 1..=3 {
        assert_eq!(list.pop_front(), Some(expected));
    }
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.pop_front(), None, "Popping an empty list should yield nothing.");
    list.verify_links();
}

#[test]
fn test_positions() {
    let mut list = LinkedList::from([1, 3]);
    let first = list.begin();
    let third = list.successor(first);
    let second = list.insert_after(first, 2);
    list.push_front(0);

    assert_eq!(
        (list.get(first), list.get(second), list.get(third)),
        (&1, &2, &3),
        "Insertions shouldn't invalidate any position."
    );
    assert_eq!(list.successor(third), list.end());
    assert!(list.successor(third).is_end());
    assert!(list.before_begin().is_before_begin());
    assert!(first.is_element());

    *list.get_mut(third) = 30;
    assert_eq!(list, LinkedList::from([0, 1, 2, 30]));

    let empty = LinkedList::<u8>::new();
    assert_eq!(empty.begin(), empty.end(), "An empty list should begin at its end.");
    assert_eq!(empty.successor(empty.before_begin()), empty.end());
}

#[test]
fn test_erase_invalidates_only_removed() {
    let mut list = LinkedList::from([1, 2, 3, 4]);
    let first = list.begin();
    let second = list.successor(first);
    let third = list.successor(second);
    let fourth = list.successor(third);

    let after = list.erase_after(second);
    assert_eq!(after, fourth);
    assert_eq!(
        list.try_get(third),
        Err(PositionError::Stale(StalePosition)),
        "The removed element's position should be stale."
    );
    assert_eq!((list.get(first), list.get(second), list.get(fourth)), (&1, &2, &4));

    // The freed slot is reused by the next insertion, under a new generation.
    let five = list.insert_after(fourth, 5);
    assert_ne!(five, third);
    assert_eq!(*list.get(five), 5);
    assert!(list.try_get(third).unwrap_err().is_stale());

    assert_eq!(list.remove_after(first), 2);
    assert!(list.try_successor(second).unwrap_err().is_stale());
    assert_eq!(list, LinkedList::from([1, 4, 5]));
    list.verify_links();
}

#[test]
fn test_contract_violations() {
    let mut list = LinkedList::from([1, 2]);
    let last = list.successor(list.begin());
    let other = LinkedList::from([1, 2]);

    assert!(list.try_erase_after(last).unwrap_err().is_no_successor());
    assert!(list.try_erase_after(list.end()).unwrap_err().is_past_the_end());
    assert!(list.try_insert_after(list.end(), 3).unwrap_err().is_past_the_end());
    assert!(list.try_get(list.before_begin()).unwrap_err().is_before_begin());
    assert!(list.try_get_mut(list.end()).unwrap_err().is_past_the_end());
    assert!(list.try_successor(list.end()).unwrap_err().is_past_the_end());
    assert!(
        list.try_insert_after(other.before_begin(), 3).unwrap_err().is_stale(),
        "Positions from another list should be rejected."
    );
    assert!(list.try_get(other.begin()).unwrap_err().is_stale());
    assert_eq!(list, LinkedList::from([1, 2]), "Failed calls shouldn't modify the list.");
    assert_eq!(
        PositionError::from(NoSuccessor).to_string(),
        "position is not followed by an element"
    );

    assert_panics!({ list.erase_after(last) });
    assert_panics!({ list.insert_after(list.end(), 3) });
    assert_panics!({ list.get(list.before_begin()) });
    assert_panics!({ list.successor(list.end()) });
    assert_panics!({ list.remove_after(other.begin()) });
}

#[test]
fn test_clear() {
    let counter = DropCounter::new();
    let mut list: LinkedList<Counted> = (0..5).map(|i| counter.make(i)).collect();
    let (before_begin, end) = (list.before_begin(), list.end());
    let first = list.begin();

    list.clear();
    assert_eq!(counter.drops(), 5, "Clearing should drop every element.");
    assert!(list.is_empty());
    assert!(list.iter().next().is_none());
    assert!(
        list.try_get(first).unwrap_err().is_stale(),
        "Clearing should invalidate every element position."
    );
    assert_eq!(list.nodes.slot_count(), 0, "Clearing should release the storage.");

    assert_eq!(list.end(), end);
    let seven = list.insert_after(before_begin, counter.make(7));
    assert_eq!(list.successor(before_begin), seven);
    assert_eq!(list.successor(seven), end);
    assert!(list.try_get(first).unwrap_err().is_stale());
    list.verify_links();

    let mut list = LinkedList::from([1, 2, 3]);
    let before_begin = list.before_begin();
    while list.pop_front().is_some() {}
    assert_eq!(list.nodes.slot_count(), 3, "Vacant slots are kept for reuse.");
    list.clear();
    assert_eq!(list.nodes.slot_count(), 0, "Clearing an empty list should release its slots.");
    assert!(list.try_successor(before_begin).is_ok());

    list.clear();
    assert!(list.try_insert_after(before_begin, 1).is_ok());
    assert_eq!(list, LinkedList::from([1]));
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut list: LinkedList<Counted> = (0..10).map(|i| counter.make(i)).collect();

    drop(list.pop_front());
    list.erase_after(list.begin());
    assert_eq!(counter.drops(), 2);

    drop(list);
    assert_eq!(counter.drops(), 10, "Every element should be dropped exactly once.");

    let list: LinkedList<Counted> = (0..4).map(|i| counter.make(i)).collect();
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 14, "Dropping a partly consumed IntoIter should drop the rest.");
}

#[test]
fn test_clone_isolation() {
    let original = LinkedList::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.push_front(String::from("z"));
    copy.get_mut(copy.successor(copy.begin())).push('!');
    assert_eq!(original, LinkedList::from([String::from("a"), String::from("b")]));
    assert_eq!(
        copy,
        LinkedList::from([String::from("z"), String::from("a!"), String::from("b")])
    );
}

#[test]
fn test_clone_from_and_assign() {
    let counter = DropCounter::new();
    let mut target: LinkedList<Counted> = (0..3).map(|i| counter.make(i)).collect();
    let source: LinkedList<Counted> = (10..15).map(|i| counter.make(i)).collect();
    let (before_begin, end) = (target.before_begin(), target.end());
    let old_begin = target.begin();

    target.clone_from(&source);
    assert_eq!(counter.drops(), 3, "The old contents should be released.");
    assert_eq!(target, source);
    assert!(target.try_get(old_begin).unwrap_err().is_stale());
    assert_eq!(target.try_successor(before_begin).map(|pos| target.get(pos).id), Ok(10));
    assert!(
        source.try_successor(before_begin).unwrap_err().is_stale(),
        "The anchor should stay with the assigned list."
    );

    target.assign((20..22).map(|i| counter.make(i)));
    assert_eq!(counter.drops(), 8);
    assert_eq!(target.iter().map(|c| c.id).collect::<Vec<_>>(), [20, 21]);
    assert_eq!(target.end(), end);

    let first = target.insert_after(before_begin, counter.make(19));
    assert_eq!(target.get(first).id, 19);
    assert_eq!(target.iter().map(|c| c.id).collect::<Vec<_>>(), [19, 20, 21]);
    target.verify_links();

    drop(target);
    drop(source);
    assert_eq!(counter.drops(), 16);
}

#[test]
fn test_swap() {
    let mut a = LinkedList::from([1, 2, 3]);
    let mut b = LinkedList::from([9]);
    let (a_before, b_before) = (a.clone(), b.clone());
    let (a_anchor, b_anchor) = (a.before_begin(), b.before_begin());
    let (a_end, b_end) = (a.end(), b.end());
    let one = a.begin();

    a.swap(&mut b);
    assert_eq!((&a, &b), (&b_before, &a_before));
    assert_eq!(*b.get(one), 1, "Element positions should follow their elements.");
    assert!(a.try_get(one).unwrap_err().is_stale());
    assert_eq!(*a.get(a.successor(a_anchor)), 9, "Each list should keep its own anchor.");
    assert_eq!(*b.get(b.successor(b_anchor)), 1);
    assert!(a.try_successor(b_anchor).unwrap_err().is_stale());
    assert_eq!((a.end(), b.end()), (a_end, b_end));

    a.insert_after(a_anchor, 8);
    b.erase_after(b_anchor);
    assert_eq!(a, LinkedList::from([8, 9]));
    assert_eq!(b, LinkedList::from([2, 3]));
    a.verify_links();
    b.verify_links();

    swap(&mut a, &mut b);
    swap(&mut a, &mut b);
    assert_eq!((&a, &b), (&LinkedList::from([8, 9]), &LinkedList::from([2, 3])));
    assert_eq!(*a.get(a.successor(a_anchor)), 8, "Swapping twice should restore both lists.");
}

#[test]
fn test_exhausted_generation_retires_slot() {
    let mut list = LinkedList::from([1]);
    let original = list.begin();
    let Place::Node(node) = original.place else {
        panic!("begin of a non-empty list should be an element");
    };
    let node = list.nodes.force_generation(node, u64::MAX);
    let last = list.position(Place::Node(node));
    assert_eq!(list.get(last), &1);

    assert_eq!(list.pop_front(), Some(1));
    list.push_front(42);
    assert_eq!(
        list.nodes.slot_count(),
        2,
        "A slot at its last generation shouldn't be reused."
    );
    assert!(list.try_get(last).unwrap_err().is_stale());
    assert!(
        list.try_get(original).unwrap_err().is_stale(),
        "The generation must never wrap back to an earlier value."
    );
    assert_eq!(*list.get(list.begin()), 42);

    list.push_front(7);
    assert_eq!(list.nodes.slot_count(), 3);
    assert_eq!(list, LinkedList::from([7, 42]));
    list.verify_links();
}

#[test]
fn test_equality_ordering_and_hash() {
    let list = LinkedList::from([1, 2, 3]);

    assert_eq!(list, (1..=3).collect::<LinkedList<_>>());
    assert!(list < LinkedList::from([1, 2, 4]));
    assert!(LinkedList::from([1, 2]) < list, "A prefix should compare less.");
    assert!(LinkedList::<i32>::new() < LinkedList::from([0]));
    assert!(list >= list.clone());

    let mut longer = list.clone();
    longer.extend([4]);
    assert_ne!(list, longer);
    assert!(list < longer);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&list), state.hash_one(LinkedList::from([1, 2, 3])));
}

#[test]
fn test_iterators() {
    let mut list = LinkedList::from([1, 2, 3]);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.clone().collect::<Vec<_>>(), [&2, &3]);

    for element in list.iter_mut() {
        *element *= 10;
    }
    assert!(list.iter().eq([10, 20, 30].iter()), "Iteration should be restartable.");
    assert_eq!(list.iter_mut().len(), 3);

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next(), Some(10));
    assert_eq!(into_iter.len(), 2);
    assert_eq!(into_iter.collect::<Vec<_>>(), [20, 30]);
}

#[test]
fn test_reverse_extend_contains() {
    let mut list = LinkedList::from(['a', 'b', 'c']);
    let b = list.successor(list.begin());

    list.reverse();
    assert_eq!(list, LinkedList::from(['c', 'b', 'a']));
    assert_eq!(*list.get(b), 'b', "Reversing shouldn't invalidate positions.");
    assert_eq!(list.successor(b), list.successor(list.successor(list.begin())));
    list.verify_links();

    list.extend(['d', 'e']);
    list.extend(&['f']);
    assert_eq!(list.iter().collect::<String>(), "cbadef");
    assert!(list.contains(&'d'));
    assert!(!list.contains(&'z'));

    let mut empty = LinkedList::new();
    empty.reverse();
    empty.extend([1]);
    assert_eq!(empty.front(), Some(&1));
    *empty.front_mut().unwrap() = 2;
    assert_eq!(empty, LinkedList::from([2]));
}

#[test]
fn test_formatting() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.to_string(), "(1) -> (2) -> (3)");
    assert_eq!(LinkedList::<i32>::new().to_string(), "()");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
}

#[test]
fn test_cursor() {
    let mut cursor = LinkedList::from([1, 2, 4]).cursor_before_begin();
    assert!(cursor.is_before_begin());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.peek_next(), Some(&1));

    cursor.move_next().move_next();
    assert_eq!(cursor.current(), Some(&2));
    assert_eq!(cursor.index(), Some(1));

    cursor.push_next(3);
    assert_eq!(cursor.peek_next(), Some(&3));
    *cursor.peek_next_mut().unwrap() = 30;
    *cursor.current_mut().unwrap() = 20;

    cursor.move_next().move_next();
    assert_eq!((cursor.current(), cursor.index()), (Some(&4), Some(3)));
    assert_eq!(cursor.pop_next(), None);

    cursor.move_next().move_next();
    assert!(cursor.is_end());
    assert_eq!(cursor.index(), None);
    assert_eq!(cursor.pop_next(), None);
    assert_eq!(cursor.as_list().len(), 4);

    let list = cursor.list();
    assert_eq!(list, LinkedList::from([1, 20, 30, 4]));

    let mut cursor = list.cursor_front();
    let position = cursor.position();
    assert_eq!(cursor.pop_next(), Some(20));
    let list = cursor.list();
    assert_eq!(*list.get(position), 1, "Cursor positions should outlive the cursor.");
    assert_eq!(list, LinkedList::from([1, 30, 4]));

    assert!(LinkedList::<u8>::new().cursor_front().is_end());
    assert_panics!({
        let mut cursor = LinkedList::<u8>::new().cursor_front();
        cursor.push_next(1);
    });
}

proptest! {
    #[test]
    fn prop_iteration_matches_source(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let list: LinkedList<i32> = values.iter().copied().collect();

        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.iter().count(), list.len());
        prop_assert!(list.iter().eq(values.iter()));
    }

    #[test]
    fn prop_push_pop_round_trip(
        values in prop::collection::vec(any::<i32>(), 0..32),
        x in any::<i32>()
    ) {
        let mut list = LinkedList::from_iter(values.clone());

        list.push_front(x);
        prop_assert_eq!(list.pop_front(), Some(x));
        prop_assert_eq!(list.len(), values.len());
        prop_assert!(list.iter().eq(values.iter()));
    }

    #[test]
    fn prop_insert_erase_round_trip(
        values in prop::collection::vec(any::<i32>(), 0..32),
        at in any::<prop::sample::Index>(),
        x in any::<i32>()
    ) {
        let mut list = LinkedList::from_iter(values.clone());
        let mut pos = list.before_begin();
        for _ in 0..at.index(values.len() + 1) {
            pos = list.successor(pos);
        }

        let inserted = list.insert_after(pos, x);
        prop_assert_eq!(list.get(inserted), &x);
        prop_assert_eq!(list.len(), values.len() + 1);

        list.erase_after(pos);
        list.verify_links();
        prop_assert!(list.iter().eq(values.iter()));
    }

    #[test]
    fn prop_comparison_is_lexicographic(
        a in prop::collection::vec(0..3_u8, 0..6),
        b in prop::collection::vec(0..3_u8, 0..6)
    ) {
        let list_a = LinkedList::from_iter(a.clone());
        let list_b = LinkedList::from_iter(b.clone());

        prop_assert_eq!(list_a == list_b, a == b);
        prop_assert_eq!(list_a.cmp(&list_b), a.cmp(&b));
    }

    #[test]
    fn prop_clone_is_isolated(values in prop::collection::vec(any::<i32>(), 1..32)) {
        let original = LinkedList::from_iter(values.clone());
        let mut copy = original.clone();

        copy.push_front(0);
        copy.erase_after(copy.begin());
        *copy.front_mut().unwrap() ^= 1;
        copy.reverse();
        prop_assert!(original.iter().eq(values.iter()));
    }
}
