use super::resolver::OrderRef;

pub(crate) trait Strength {
    /// Compute the strength of an action from its result.
    fn strength(&self) -> usize;
}

/// The intermediate state of a prevent-strength calculation. Prevent
/// strength is the force a move applies to stop any other piece from
/// entering its destination territory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Prevent {
    /// The preventing piece cannot reach its destination.
    NoPath,

    /// The move lost a head-to-head battle; it cannot prevent others from
    /// entering its destination.
    LostHeadToHead,

    /// The move contests the destination with the given supporters.
    Prevents(OrderRef, Vec<OrderRef>),
}

impl Strength for Prevent {
    fn strength(&self) -> usize {
        match self {
            Prevent::NoPath | Prevent::LostHeadToHead => 0,
            Prevent::Prevents(_, supporters) => 1 + supporters.len(),
        }
    }
}

impl<T: Strength> Strength for Option<T> {
    fn strength(&self) -> usize {
        self.as_ref().map(Strength::strength).unwrap_or_default()
    }
}
