use std::fmt;

use crate::geo::Position;

/// Valid commands for a dislodged piece during the retreat phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatCommand {
    /// Remove the piece from the board.
    Disband,
    /// Withdraw to an adjacent position.
    Move(Position),
}

impl fmt::Display for RetreatCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RetreatCommand::Disband => write!(f, "disbands"),
            RetreatCommand::Move(dest) => write!(f, "retreats to {}", dest.territory),
        }
    }
}
