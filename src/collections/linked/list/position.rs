use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use super::NodeRef;

/// A process-wide unique id. Each list carries one for its before-begin anchor and end, kept for
/// the list's whole life. Each node storage carries its own, so element positions can only resolve
/// against the storage their element was inserted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    pub fn fresh() -> ListId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Place {
    BeforeBegin,
    Node(NodeRef),
    End,
}

/// A position within a [`LinkedList`](super::LinkedList): either the before-begin anchor, an
/// element or the end of the list.
///
/// Positions are plain handles. They don't borrow the list, so any number of them can be held
/// while the list is modified, and the list checks each one it is given:
/// - A position stays valid while its element is in the list, including across insertions and
///   removal of other elements.
/// - Removing the element invalidates every position referring to it.
/// - [`clear`](super::LinkedList::clear) and assignment invalidate every element position of the
///   list.
/// - [`swap`](super::LinkedList::swap) moves element positions along with their elements.
/// - The before-begin and end positions belong to the list itself and stay valid for as long as
///   it lives.
///
/// Passing an invalid position to a list is reported as a
/// [`StalePosition`](super::StalePosition).
pub struct Position<T> {
    /// The list for before-begin and end, the node storage for an element.
    pub(crate) owner: ListId,
    pub(crate) place: Place,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T> Position<T> {
    pub(crate) const fn new(owner: ListId, place: Place) -> Position<T> {
        Position {
            owner,
            place,
            _phantom: PhantomData,
        }
    }

    /// Returns true if this is the position before the first element.
    pub const fn is_before_begin(&self) -> bool {
        matches!(self.place, Place::BeforeBegin)
    }

    /// Returns true if this is the position after the last element.
    pub const fn is_end(&self) -> bool {
        matches!(self.place, Place::End)
    }

    /// Returns true if this position refers to an element.
    pub const fn is_element(&self) -> bool {
        matches!(self.place, Place::Node(_))
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.place == other.place
    }
}

impl<T> Eq for Position<T> {}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.place.hash(state);
    }
}

impl<T> Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.place {
            Place::BeforeBegin => write!(f, "Position::BeforeBegin"),
            Place::Node(NodeRef { index, generation }) => {
                write!(f, "Position::Element({index}@{generation})")
            },
            Place::End => write!(f, "Position::End"),
        }
    }
}
