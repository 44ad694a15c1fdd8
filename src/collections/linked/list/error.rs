use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("position does not refer to a live element of this list")]
pub struct StalePosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("position is past the end of the list")]
pub struct PastTheEnd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("position precedes the first element and holds no value")]
pub struct BeforeBegin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("position is not followed by an element")]
pub struct NoSuccessor;

/// A [`Position`](super::Position) was used in a way its place doesn't allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum PositionError {
    Stale(StalePosition),
    PastTheEnd(PastTheEnd),
    BeforeBegin(BeforeBegin),
    NoSuccessor(NoSuccessor),
}
