use std::hint;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use derive_more::IsVariant;

use super::ListId;
use crate::util::option::OptionExtension;

pub(crate) type Link = Option<NodeRef>;

// NOTE: Nodes live in slots of a single Vec rather than in their own boxes. A link is a slot index
// plus the generation of the slot at the time the node was stored, so a handle to a removed node
// can always be told apart from whichever node later reuses the slot. A slot whose generation
// can't be bumped any further is retired instead of reused.

/// A handle to a node within [`Nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeRef {
    pub index: usize,
    pub generation: u64,
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link,
}

struct Slot<T> {
    generation: u64,
    entry: Entry<T>,
}

#[derive(IsVariant)]
enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// Storage for the nodes of a single list. Vacant slots are chained into a free list.
pub(crate) struct Nodes<T> {
    /// Stamped into the positions of stored nodes. Replacing the storage invalidates all of them.
    pub id: ListId,
    slots: Vec<Slot<T>>,
    free: Option<usize>,
}

impl<T> Nodes<T> {
    pub fn new() -> Nodes<T> {
        Nodes {
            id: ListId::fresh(),
            slots: Vec::new(),
            free: None,
        }
    }

    /// Returns true if no slot has been allocated, occupied or not.
    pub fn is_unallocated(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stores `node`, returning a handle to it.
    pub fn alloc(&mut self, node: Node<T>) -> NodeRef {
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                match mem::replace(&mut slot.entry, Entry::Occupied(node)) {
                    Entry::Vacant { next_free } => self.free = next_free,
                    Entry::Occupied(_) => unreachable!("free list contains an occupied slot"),
                }
                NodeRef {
                    index,
                    generation: slot.generation,
                }
            },
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(node),
                });
                NodeRef {
                    index,
                    generation: 0,
                }
            },
        }
    }

    /// Removes the node referred to by `node`, if it is still stored. The slot's generation is
    /// bumped, so every other copy of `node` stops resolving. A slot at the last generation is
    /// left vacant for good, never rejoining the free list.
    pub fn take(&mut self, node: NodeRef) -> Option<Node<T>> {
        let slot = self.slots.get_mut(node.index)?;
        if slot.generation != node.generation || slot.entry.is_vacant() {
            return None;
        }

        let entry = match slot.generation.checked_add(1) {
            Some(generation) => {
                slot.generation = generation;
                let entry = mem::replace(&mut slot.entry, Entry::Vacant { next_free: self.free });
                self.free = Some(node.index);
                entry
            },
            None => mem::replace(&mut slot.entry, Entry::Vacant { next_free: None }),
        };

        match entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    pub fn get(&self, node: NodeRef) -> Option<&Node<T>> {
        match self.slots.get(node.index) {
            Some(Slot { generation, entry: Entry::Occupied(stored) })
                if *generation == node.generation => Some(stored),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut Node<T>> {
        match self.slots.get_mut(node.index) {
            Some(Slot { generation, entry: Entry::Occupied(stored) })
                if *generation == node.generation => Some(stored),
            _ => None,
        }
    }

    /// Resolves a link held by the list itself.
    pub fn node(&self, node: NodeRef) -> &Node<T> {
        // SAFETY: Links stored in the chain (and handles copied from them while the list is
        // borrowed) always refer to occupied slots of the matching generation.
        unsafe { self.get(node).unreachable() }
    }

    /// Resolves a link held by the list itself, mutably.
    pub fn node_mut(&mut self, node: NodeRef) -> &mut Node<T> {
        // SAFETY: See Nodes::node.
        unsafe { self.get_mut(node).unreachable() }
    }

    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Sets the generation of an occupied slot, returning the new handle to its node.
    #[cfg(test)]
    pub fn force_generation(&mut self, node: NodeRef, generation: u64) -> NodeRef {
        let slot = &mut self.slots[node.index];
        assert!(slot.entry.is_occupied() && slot.generation == node.generation);
        slot.generation = generation;
        NodeRef {
            index: node.index,
            generation,
        }
    }

    pub fn as_raw(&mut self) -> RawNodes<'_, T> {
        RawNodes {
            base: NonNull::from(self.slots.as_mut_slice()).cast(),
            len: self.slots.len(),
            _phantom: PhantomData,
        }
    }
}

/// An exclusive view of every slot that can hand out mutable references to distinct nodes at the
/// same time.
pub(crate) struct RawNodes<'a, T> {
    base: NonNull<Slot<T>>,
    len: usize,
    _phantom: PhantomData<&'a mut Slot<T>>,
}

impl<'a, T> RawNodes<'a, T> {
    /// Returns a mutable reference to the node behind `node` for the whole lifetime `'a`.
    ///
    /// # Safety
    /// `node` must be a link taken from the chain of the list these slots belong to, and no other
    /// reference to the same node may be alive or created while the returned one is.
    pub unsafe fn node_mut(&self, node: NodeRef) -> &'a mut Node<T> {
        debug_assert!(node.index < self.len);
        // SAFETY: Chain links are in bounds, and the caller guarantees that this slot isn't
        // aliased. Different slots never overlap, so references to other nodes stay valid.
        let slot = unsafe { &mut *self.base.as_ptr().add(node.index) };
        match &mut slot.entry {
            Entry::Occupied(stored) => stored,
            // SAFETY: Chain links always refer to occupied slots.
            Entry::Vacant { .. } => unsafe { hint::unreachable_unchecked() },
        }
    }
}
