use thiserror::Error;

/// Failure of an entire adjudication call.
///
/// Per-order problems (an illegal move, a build in the wrong place) are not
/// errors; they are reported as outcomes on the affected orders. This type
/// covers the two cases where no meaningful report can be produced at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjudicationError {
    /// The supplied game state references things that do not exist or
    /// violates a structural invariant the caller was responsible for.
    #[error("invalid game state: {0}")]
    InvalidGameState(String),

    /// The resolver reached a state that the rules say is unreachable.
    #[error("adjudicator bug: {0}")]
    AdjudicatorBug(String),
}

impl AdjudicationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AdjudicationError::InvalidGameState(reason.into())
    }
}
