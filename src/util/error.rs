use derive_more::{Display, Error};

/// The length of a collection would overflow [`usize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("capacity overflow")]
pub struct CapacityOverflow;
