//! Typed orders, one shape per phase.
//!
//! Submitted order records are untyped rows; intake converts each row into
//! one of these before resolution. A movement order always addresses a
//! piece; pieces that received no (legal) order are given a synthesized
//! hold, recognizable by the absent order id.

mod command;

pub use self::command::{
    BuildCommand, ConvoyedMove, MainCommand, MoveCommand, RetreatCommand, SupportedOrder,
};

use std::fmt;

use crate::geo::{Position, TerritoryId};
use crate::nation::Nation;
use crate::state::{OrderId, PieceId};
use crate::unit::PieceType;

/// A movement-phase order bound to the piece it commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainOrder {
    /// The submitted order this was parsed from; `None` for synthesized
    /// holds.
    pub id: Option<OrderId>,
    pub piece: PieceId,
    pub nation: Nation,
    pub piece_type: PieceType,
    pub position: Position,
    pub command: MainCommand,
}

impl MainOrder {
    pub fn is_move(&self) -> bool {
        matches!(self.command, MainCommand::Move(_))
    }

    pub fn move_command(&self) -> Option<&MoveCommand> {
        match &self.command {
            MainCommand::Move(cmd) => Some(cmd),
            _ => None,
        }
    }

    pub fn move_dest(&self) -> Option<Position> {
        self.move_command().map(|cmd| cmd.dest)
    }

    pub fn is_move_to(&self, territory: TerritoryId) -> bool {
        self.move_dest()
            .map(|dest| dest.territory == territory)
            .unwrap_or(false)
    }
}

impl fmt::Display for MainOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {}",
            self.nation, self.piece_type, self.position.territory, self.command
        )
    }
}

/// A retreat-phase order bound to a dislodged piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetreatOrder {
    pub id: OrderId,
    pub piece: PieceId,
    pub nation: Nation,
    pub piece_type: PieceType,
    pub position: Position,
    pub command: RetreatCommand,
}
