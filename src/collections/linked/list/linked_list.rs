use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use log::trace;

use super::{
    BeforeBegin, Iter, IterMut, Link, ListId, NoSuccessor, Node, Nodes, PastTheEnd, Place,
    Position, PositionError, StalePosition,
};
use crate::collections::linked::cursor::{Cursor, CursorPosition};
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in one direction, supporting insertion and removal directly after any known
/// [`Position`]. See also: [`Cursor`] for walking a list while modifying it.
///
/// Every list starts with a before-begin anchor, which holds no value but can be used as a
/// position. Inserting after it adds a new first element and erasing after it removes the first
/// element, so the front of the list needs no special handling.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `insert_after` | `O(1)` |
/// | `erase_after` | `O(1)` |
/// | `successor` | `O(1)` |
/// | `get` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `extend` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// There is no indexing: reaching the `i`th element means walking `i` links from the front.
pub struct LinkedList<T> {
    pub(crate) id: ListId,
    /// The before-begin anchor's link to the first element.
    pub(crate) head: Link,
    pub(crate) len: usize,
    pub(crate) nodes: Nodes<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            id: ListId::fresh(),
            head: None,
            len: 0,
            nodes: Nodes::new(),
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| &self.nodes.node(node).value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(node) => Some(&mut self.nodes.node_mut(node).value),
            None => None,
        }
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = self.nodes.alloc(Node {
            value,
            next: self.head,
        });
        self.head = Some(node);
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: The head link is part of the chain.
        let node = unsafe { self.nodes.take(head).unreachable() };

        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Drops every element, leaving the list empty and releasing its storage. Every element
    /// [`Position`] of the list is invalidated, while [`before_begin`](LinkedList::before_begin)
    /// and [`end`](LinkedList::end) stay valid.
    pub fn clear(&mut self) {
        if self.nodes.is_unallocated() {
            return;
        }

        let cleared = self.len;
        // The list is left consistent before any element is dropped.
        let old_nodes = mem::replace(&mut self.nodes, Nodes::new());
        self.head = None;
        self.len = 0;
        drop(old_nodes);

        trace!("cleared {cleared} elements from linked list");
    }

    /// Exchanges the contents of two lists without moving any elements. Element positions move
    /// along with their elements, while each list keeps its own before-begin and end positions.
    pub fn swap(&mut self, other: &mut LinkedList<T>) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
        mem::swap(&mut self.nodes, &mut other.nodes);
    }

    /// Replaces the contents of the list with the elements of `iter`, which are collected in full
    /// before the old contents are released. If `iter` panics, the list is left untouched.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut replacement: LinkedList<T> = iter.into_iter().collect();
        self.swap(&mut replacement);

        trace!(
            "assigned {} elements to linked list, releasing {}",
            self.len,
            replacement.len,
        );
    }

    /// Reverses the order of the elements by relinking them. No element is moved and every
    /// [`Position`] of the list stays valid.
    pub fn reverse(&mut self) {
        let mut prev: Link = None;
        let mut curr = self.head;

        while let Some(node) = curr {
            curr = mem::replace(&mut self.nodes.node_mut(node).next, prev);
            prev = Some(node);
        }
        self.head = prev;

        trace!("reversed linked list of {} elements", self.len);
    }

    /// Returns the position before the first element. Inserting after it adds an element to the
    /// front of the list.
    pub fn before_begin(&self) -> Position<T> {
        self.position(Place::BeforeBegin)
    }

    /// Returns the position of the first element, or [`end`](LinkedList::end) if the list is
    /// empty.
    pub fn begin(&self) -> Position<T> {
        self.position_of_link(self.head)
    }

    /// Returns the position after the last element.
    pub fn end(&self) -> Position<T> {
        self.position(Place::End)
    }

    /// Returns the position following `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is invalid for this list or is the end position.
    pub fn successor(&self, pos: Position<T>) -> Position<T> {
        self.try_successor(pos).throw()
    }

    /// Returns the position following `pos`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_successor(&self, pos: Position<T>) -> Result<Position<T>, PositionError> {
        let place = self.check(pos)?;
        Ok(self.position_of_link(self.link_after(place)?))
    }

    /// Returns a reference to the element at `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is invalid for this list or doesn't refer to an element.
    pub fn get(&self, pos: Position<T>) -> &T {
        self.try_get(pos).throw()
    }

    /// Returns a reference to the element at `pos`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_get(&self, pos: Position<T>) -> Result<&T, PositionError> {
        match self.check(pos)? {
            Place::BeforeBegin => Err(BeforeBegin.into()),
            Place::Node(node) => Ok(&self.nodes.node(node).value),
            Place::End => Err(PastTheEnd.into()),
        }
    }

    /// Returns a mutable reference to the element at `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is invalid for this list or doesn't refer to an element.
    pub fn get_mut(&mut self, pos: Position<T>) -> &mut T {
        self.try_get_mut(pos).throw()
    }

    /// Returns a mutable reference to the element at `pos`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, pos: Position<T>) -> Result<&mut T, PositionError> {
        match self.check(pos)? {
            Place::BeforeBegin => Err(BeforeBegin.into()),
            Place::Node(node) => Ok(&mut self.nodes.node_mut(node).value),
            Place::End => Err(PastTheEnd.into()),
        }
    }

    /// Inserts `value` directly after `pos` and returns its position, panicking on a failure. No
    /// other position is invalidated.
    ///
    /// # Panics
    /// Panics if `pos` is invalid for this list, if it is the end position or if the length of
    /// the list would overflow.
    pub fn insert_after(&mut self, pos: Position<T>, value: T) -> Position<T> {
        self.try_insert_after(pos, value).throw()
    }

    /// Inserts `value` directly after `pos` and returns its position, returning an [`Err`] on a
    /// failure rather than panicking. On failure, `value` is dropped.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    pub fn try_insert_after(
        &mut self,
        pos: Position<T>,
        value: T,
    ) -> Result<Position<T>, PositionError> {
        let place = self.check(pos)?;
        let next = self.link_after(place)?;

        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = self.nodes.alloc(Node { value, next });
        *self.link_after_mut(place)? = Some(node);

        Ok(self.position(Place::Node(node)))
    }

    /// Removes the element directly after `pos` and returns the position that now follows `pos`,
    /// panicking on a failure. Positions of the removed element are invalidated.
    ///
    /// # Panics
    /// Panics if `pos` is invalid for this list or isn't followed by an element.
    pub fn erase_after(&mut self, pos: Position<T>) -> Position<T> {
        self.try_erase_after(pos).throw()
    }

    /// Removes the element directly after `pos` and returns the position that now follows `pos`,
    /// returning an [`Err`] on a failure rather than panicking.
    pub fn try_erase_after(&mut self, pos: Position<T>) -> Result<Position<T>, PositionError> {
        drop(self.try_remove_after(pos)?);
        self.try_successor(pos)
    }

    /// Removes the element directly after `pos` and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is invalid for this list or isn't followed by an element.
    pub fn remove_after(&mut self, pos: Position<T>) -> T {
        self.try_remove_after(pos).throw()
    }

    /// Removes the element directly after `pos` and returns it, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_remove_after(&mut self, pos: Position<T>) -> Result<T, PositionError> {
        let place = self.check(pos)?;
        let target = self.link_after(place)?.ok_or(NoSuccessor)?;

        // SAFETY: target was linked from the chain.
        let node = unsafe { self.nodes.take(target).unreachable() };
        // The chain is acyclic, so place doesn't refer to the removed node.
        *self.link_after_mut(place)? = node.next;
        self.len -= 1;

        Ok(node.value)
    }

    /// Converts the list into a [`Cursor`] placed before the first element.
    pub fn cursor_before_begin(self) -> Cursor<T> {
        Cursor {
            list: self,
            pos: CursorPosition::BeforeBegin,
        }
    }

    /// Converts the list into a [`Cursor`] placed on the first element, or at the end if the list
    /// is empty.
    pub fn cursor_front(self) -> Cursor<T> {
        let pos = match self.head {
            Some(node) => CursorPosition::Node { node, index: 0 },
            None => CursorPosition::End,
        };
        Cursor { list: self, pos }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn position(&self, place: Place) -> Position<T> {
        match place {
            Place::Node(_) => Position::new(self.nodes.id, place),
            Place::BeforeBegin | Place::End => Position::new(self.id, place),
        }
    }

    pub(crate) const fn position_of_link(&self, link: Link) -> Position<T> {
        match link {
            Some(node) => self.position(Place::Node(node)),
            None => self.position(Place::End),
        }
    }

    /// Checks that `pos` belongs to this list and, if it refers to an element, that the element
    /// is still present.
    pub(crate) fn check(&self, pos: Position<T>) -> Result<Place, StalePosition> {
        match pos.place {
            Place::Node(node) if pos.owner == self.nodes.id && self.nodes.get(node).is_some() => {
                Ok(pos.place)
            },
            Place::BeforeBegin | Place::End if pos.owner == self.id => Ok(pos.place),
            _ => Err(StalePosition),
        }
    }

    /// Returns the link that follows a checked place.
    pub(crate) fn link_after(&self, place: Place) -> Result<Link, PastTheEnd> {
        match place {
            Place::BeforeBegin => Ok(self.head),
            Place::Node(node) => Ok(self.nodes.node(node).next),
            Place::End => Err(PastTheEnd),
        }
    }

    pub(crate) fn link_after_mut(&mut self, place: Place) -> Result<&mut Link, PastTheEnd> {
        match place {
            Place::BeforeBegin => Ok(&mut self.head),
            Place::Node(node) => Ok(&mut self.nodes.node_mut(node).next),
            Place::End => Err(PastTheEnd),
        }
    }

    /// Returns the position of the last element, or before-begin if the list is empty.
    pub(crate) fn back_position(&self) -> Position<T> {
        let mut place = Place::BeforeBegin;
        let mut link = self.head;
        while let Some(node) = link {
            place = Place::Node(node);
            link = self.nodes.node(node).next;
        }
        self.position(place)
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut link = self.head;
        while let Some(node) = link {
            // UNWRAP: This needs to panic if a link is dangling.
            link = self.nodes.get(node).unwrap().next;
            count += 1;
        }
        assert_eq!(count, self.len);
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut pos = self.back_position();
        for item in iter {
            pos = self.insert_after(pos, item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);

        trace!(
            "copy-assigned {} elements to linked list, releasing {}",
            self.len,
            replacement.len,
        );
    }
}

/// Exchanges the contents of two lists. See [`LinkedList::swap`].
pub fn swap<T>(lhs: &mut LinkedList<T>, rhs: &mut LinkedList<T>) {
    lhs.swap(rhs);
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, element) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, ")")
    }
}
