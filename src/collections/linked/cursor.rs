use derive_more::IsVariant;

use crate::collections::linked::list::{LinkedList, NodeRef, Place, Position};

/// A type for forward traversal and mutation of a [`LinkedList`] that it owns. See
/// [`LinkedList::cursor_before_begin`] and [`LinkedList::cursor_front`] to create one, and
/// [`Cursor::list`] to get the list back.
///
/// The cursor sits on the before-begin anchor, an element, or the end of the list, and can only
/// modify the list directly after itself.
pub struct Cursor<T> {
    pub(crate) list: LinkedList<T>,
    pub(crate) pos: CursorPosition,
}

#[derive(Debug, Clone, Copy, IsVariant)]
pub(crate) enum CursorPosition {
    BeforeBegin,
    Node {
        node: NodeRef,
        index: usize,
    },
    End,
}

use CursorPosition::*;

impl<T> Cursor<T> {
    /// Consumes the cursor, returning the list it was traversing.
    pub fn list(self) -> LinkedList<T> {
        self.list
    }

    /// Returns a reference to the list being traversed.
    pub const fn as_list(&self) -> &LinkedList<T> {
        &self.list
    }

    /// Returns the [`Position`] of the cursor within its list. The position stays valid after
    /// the list is taken back with [`Cursor::list`].
    pub fn position(&self) -> Position<T> {
        self.list.position(self.place())
    }

    /// Returns the index of the element under the cursor, if there is one.
    pub const fn index(&self) -> Option<usize> {
        match self.pos {
            Node { index, .. } => Some(index),
            BeforeBegin | End => None,
        }
    }

    pub const fn is_before_begin(&self) -> bool {
        self.pos.is_before_begin()
    }

    pub const fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// Returns a reference to the element under the cursor, if there is one.
    pub fn current(&self) -> Option<&T> {
        match self.pos {
            Node { node, .. } => Some(&self.list.nodes.node(node).value),
            BeforeBegin | End => None,
        }
    }

    /// Returns a mutable reference to the element under the cursor, if there is one.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.pos {
            Node { node, .. } => Some(&mut self.list.nodes.node_mut(node).value),
            BeforeBegin | End => None,
        }
    }

    /// Returns a reference to the element after the cursor, if there is one.
    pub fn peek_next(&self) -> Option<&T> {
        let next = self.list.link_after(self.place()).ok().flatten()?;
        Some(&self.list.nodes.node(next).value)
    }

    /// Returns a mutable reference to the element after the cursor, if there is one.
    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        let next = self.list.link_after(self.place()).ok().flatten()?;
        Some(&mut self.list.nodes.node_mut(next).value)
    }

    /// Moves the cursor to the next element, or to the end of the list after the last one. Does
    /// nothing at the end of the list.
    pub fn move_next(&mut self) -> &mut Self {
        let next_index = match self.pos {
            BeforeBegin => 0,
            Node { index, .. } => index + 1,
            End => return self,
        };

        self.pos = match self.list.link_after(self.place()).ok().flatten() {
            Some(node) => Node { node, index: next_index },
            None => End,
        };
        self
    }

    /// Inserts `value` directly after the cursor, without moving it.
    ///
    /// # Panics
    /// Panics if the cursor is at the end of the list.
    pub fn push_next(&mut self, value: T) {
        self.list.insert_after(self.position(), value);
    }

    /// Removes the element directly after the cursor and returns it, if there is one.
    pub fn pop_next(&mut self) -> Option<T> {
        self.list.try_remove_after(self.position()).ok()
    }

    const fn place(&self) -> Place {
        match self.pos {
            BeforeBegin => Place::BeforeBegin,
            Node { node, .. } => Place::Node(node),
            End => Place::End,
        }
    }
}
