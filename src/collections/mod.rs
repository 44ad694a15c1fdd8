//! General-purpose collection types.
//!
//! # Purpose
//! These types are written from scratch to work through the data structures themselves, along
//! with the handles, iterators and error types that come with them.

#[cfg(feature = "linked")]
pub mod linked;
