//! Linked collection types. Primarily revolves around the singly-linked [`LinkedList`], the
//! [`Position`]s used to insert and erase within it, and its accompanying [`Cursor`] type.

pub mod cursor;
pub mod list;

#[doc(inline)]
pub use cursor::Cursor;
#[doc(inline)]
pub use list::{LinkedList, Position, PositionError};
