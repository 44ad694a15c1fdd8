//! A singly-linked list, written from scratch, with positions that can be held onto while the list
//! changes.
//!
//! # Purpose
//! [`LinkedList`] keeps its elements in a chain of forward links. Adding or removing at the front,
//! or directly after an element whose [`Position`] is already known, is `O(1)`. Anything that
//! needs the `i`th element has to walk there.
//!
//! # Method
//! Nodes are stored in slots owned by the list and addressed by index, rather than in individual
//! heap allocations linked by raw pointers. Each slot remembers a generation, so a [`Position`]
//! handed out by the list can always be checked before it is used, even after the element it
//! refers to has been removed. Misusing a position is therefore a detectable error, never memory
//! corruption.
//!
//! # Error Handling
//! Misuse of the list (erasing after the last element, dereferencing the end, using a position
//! that no longer refers to anything) is a bug in the calling code, so the plain methods panic.
//! Every method that can be misused has a `try_` twin which returns a
//! [`PositionError`](collections::linked::PositionError) instead, for callers that can't rule the
//! misuse out ahead of time.
//!
//! Errors are strongly typed: zero-sized structs implementing [`Error`](std::error::Error),
//! combined into an enum for static dispatch.
//!
//! # Logging
//! Bulk operations emit `trace` records through the [`log`] facade. The crate never installs a
//! logger itself.
//!
//! # Features
//! - `linked` (default): the linked list and its cursor.
// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[cfg(feature = "linked")]
#[doc(inline)]
pub use collections::linked::{Cursor, LinkedList, Position, PositionError};
