use std::fmt;

use crate::geo::{Position, TerritoryId};
use crate::order::MainOrder;
use crate::unit::PieceType;

/// A command issued to a piece during the movement phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainCommand {
    /// The piece is to remain in place and do nothing else.
    Hold,

    /// The piece is to attempt to move to another territory.
    Move(MoveCommand),

    /// The piece is to remain in place and support another order.
    Support(SupportedOrder),

    /// The piece is to remain at sea and attempt to ferry an army.
    Convoy(ConvoyedMove),
}

impl fmt::Display for MainCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MainCommand::Hold => write!(f, "holds"),
            MainCommand::Move(cmd) => write!(f, "-> {}", cmd.dest.territory),
            MainCommand::Support(supported) => write!(f, "supports {}", supported),
            MainCommand::Convoy(mv) => write!(f, "convoys {}", mv),
        }
    }
}

/// A move with a destination and a convoy preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub dest: Position,
    /// When set, the move must travel by convoy; a land route is never
    /// considered.
    pub via_convoy: bool,
}

impl MoveCommand {
    pub fn new(dest: Position) -> Self {
        MoveCommand {
            dest,
            via_convoy: false,
        }
    }

    pub fn via_convoy(dest: Position) -> Self {
        MoveCommand {
            dest,
            via_convoy: true,
        }
    }
}

impl From<MoveCommand> for MainCommand {
    fn from(cmd: MoveCommand) -> Self {
        MainCommand::Move(cmd)
    }
}

/// Declaration of the order a support command assists.
///
/// Supports address territories, not coasts: helping a fleet onto one coast
/// of Spain helps it onto Spain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedOrder {
    /// Keep the piece in the given territory in place. Covers pieces with
    /// hold, support, or convoy commands.
    Hold(TerritoryId),

    /// Help the piece in the first territory move to the second.
    Move(TerritoryId, TerritoryId),
}

impl SupportedOrder {
    /// Whether this declaration describes the given order.
    pub fn matches(&self, order: &MainOrder) -> bool {
        match self {
            SupportedOrder::Hold(territory) => {
                !order.is_move() && order.position.territory == *territory
            }
            SupportedOrder::Move(from, to) => {
                order.position.territory == *from && order.is_move_to(*to)
            }
        }
    }

    /// The territory the supporter must be able to reach for the support
    /// to apply.
    pub fn needed_at(&self) -> TerritoryId {
        match self {
            SupportedOrder::Hold(territory) => *territory,
            SupportedOrder::Move(_, to) => *to,
        }
    }
}

impl From<SupportedOrder> for MainCommand {
    fn from(supported: SupportedOrder) -> Self {
        MainCommand::Support(supported)
    }
}

impl fmt::Display for SupportedOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SupportedOrder::Hold(territory) => write!(f, "{} holds", territory),
            SupportedOrder::Move(from, to) => write!(f, "{} -> {}", from, to),
        }
    }
}

/// An army's move which a fleet should convoy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvoyedMove {
    pub from: TerritoryId,
    pub to: TerritoryId,
}

impl ConvoyedMove {
    pub fn new(from: TerritoryId, to: TerritoryId) -> Self {
        ConvoyedMove { from, to }
    }

    /// Whether this convoy is offered to the given move order.
    pub fn matches(&self, order: &MainOrder) -> bool {
        order.piece_type == PieceType::Army
            && order.position.territory == self.from
            && order.is_move_to(self.to)
    }
}

impl From<ConvoyedMove> for MainCommand {
    fn from(mv: ConvoyedMove) -> Self {
        MainCommand::Convoy(mv)
    }
}

impl fmt::Display for ConvoyedMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "A {} -> {}", self.from, self.to)
    }
}
