use std::cell::Cell;
use std::rc::Rc;

/// A value which records how many times it (or any clone of it) has been dropped, sharing the
/// count with every other value created from the same [`DropCounter`].
#[derive(Debug)]
pub struct Counted {
    pub id: usize,
    drops: Rc<Cell<usize>>,
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        Counted {
            id: self.id,
            drops: Rc::clone(&self.drops),
        }
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[derive(Debug, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn make(&self, id: usize) -> Counted {
        Counted {
            id,
            drops: Rc::clone(&self.0),
        }
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}
