use std::fmt;

use crate::geo::CoastId;
use crate::unit::PieceType;

/// A command issued during the build phase (typically "Winter").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildCommand {
    /// Spawn a new piece of the given type in the addressed territory.
    /// Requires an owned, empty home supply center and a spare center to
    /// fund the piece.
    Build {
        piece_type: PieceType,
        coast: Option<CoastId>,
    },

    /// Remove the addressed piece, ceasing to exist for the following turn.
    Disband,
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildCommand::Build { piece_type, .. } => write!(f, "build {}", piece_type),
            BuildCommand::Disband => write!(f, "disband"),
        }
    }
}
