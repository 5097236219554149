//! The externally supplied game-state value.
//!
//! The persistence layer assembles one of these per turn and receives a
//! [`TurnReport`](crate::judge::TurnReport) back. The adjudicator never
//! mutates the state; the next turn is derived from the state/report pair
//! by [`projection::next_turn`](crate::projection::next_turn).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geo::{CoastId, Position, Territory, TerritoryId};
use crate::nation::Nation;
use crate::unit::PieceType;

/// Stable integer identifier of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "piece #{}", self.0)
    }
}

/// Stable integer identifier of a submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "order #{}", self.0)
    }
}

/// Halves of the game year. Supply-center control changes hands only as a
/// consequence of fall campaigning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Fall,
}

/// The kind of turn being adjudicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Movement: hold, move, support, and convoy orders.
    Order,
    /// Retreat-and-disband for dislodged pieces.
    Retreat,
    /// Winter adjustments: builds and disbands.
    Build,
}

impl Phase {
    /// The order kinds accepted during this phase. Anything else in the
    /// order list is malformed input.
    pub fn possible_order_kinds(self) -> &'static [OrderKind] {
        match self {
            Phase::Order => &[
                OrderKind::Hold,
                OrderKind::Move,
                OrderKind::Support,
                OrderKind::Convoy,
            ],
            Phase::Retreat => &[OrderKind::Retreat, OrderKind::Disband],
            Phase::Build => &[OrderKind::Build, OrderKind::Disband],
        }
    }
}

/// Discriminant of a submitted order record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Hold,
    Move,
    Support,
    Convoy,
    Retreat,
    Disband,
    Build,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            OrderKind::Hold => "hold",
            OrderKind::Move => "move",
            OrderKind::Support => "support",
            OrderKind::Convoy => "convoy",
            OrderKind::Retreat => "retreat",
            OrderKind::Disband => "disband",
            OrderKind::Build => "build",
        };
        write!(f, "{}", label)
    }
}

/// One piece on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceState {
    pub id: PieceId,
    pub nation: Nation,
    #[serde(rename = "type")]
    pub kind: PieceType,
    pub territory_id: TerritoryId,
    /// Present iff the piece is a fleet on a multi-coast territory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_coast_id: Option<CoastId>,
    #[serde(default)]
    pub dislodged: bool,
    #[serde(default)]
    pub must_retreat: bool,
    /// Where the dislodging attack came from; the piece may not retreat
    /// into it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker_territory_id: Option<TerritoryId>,
}

impl PieceState {
    pub fn position(&self) -> Position {
        Position::new(self.territory_id, self.named_coast_id)
    }
}

/// One order record as submitted by a nation.
///
/// Field use varies with `kind`:
///
/// * `move`: `target_id` (and `target_coast_id` for a fleet entering a
///   multi-coast territory), plus `via_convoy`.
/// * `support`: `aux_source_id` is the supported piece's territory;
///   `aux_target_id` is the supported move's destination, absent for a
///   support-to-hold.
/// * `convoy`: `aux_source_id`/`aux_target_id` are the convoyed army's
///   origin and destination.
/// * `retreat`: `target_id` and optionally `target_coast_id`.
/// * `build`: `piece_type`, plus `named_coast_id` for a fleet built on a
///   multi-coast territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedOrder {
    pub id: OrderId,
    pub nation: Nation,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    pub source_id: TerritoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<TerritoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_coast_id: Option<CoastId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux_source_id: Option<TerritoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux_target_id: Option<TerritoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_type: Option<PieceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_coast_id: Option<CoastId>,
    #[serde(default)]
    pub via_convoy: bool,
}

/// A fully populated turn: the map table, every piece, territory control,
/// and the orders issued by all nations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub variant: String,
    pub year: u16,
    pub season: Season,
    pub phase: Phase,
    pub territories: Vec<Territory>,
    pub pieces: Vec<PieceState>,
    pub orders: Vec<SubmittedOrder>,
}

impl GameState {
    /// The piece currently standing in a territory, ignoring dislodged
    /// pieces (which are in limbo awaiting retreat).
    pub fn occupier(&self, territory: TerritoryId) -> Option<&PieceState> {
        self.pieces
            .iter()
            .find(|p| p.territory_id == territory && !p.dislodged && !p.must_retreat)
    }

    /// The dislodged piece retreating from a territory, if any.
    pub fn retreater(&self, territory: TerritoryId) -> Option<&PieceState> {
        self.pieces
            .iter()
            .find(|p| p.territory_id == territory && p.must_retreat)
    }

    /// Supply centers controlled by a nation.
    pub fn controlled_centers(&self, nation: &Nation) -> impl Iterator<Item = &Territory> {
        let nation = nation.clone();
        self.territories
            .iter()
            .filter(move |t| t.supply_center && t.controlled_by.as_ref() == Some(&nation))
    }

    /// Every nation that owns a piece or controls a supply center.
    pub fn nations(&self) -> Vec<Nation> {
        let mut nations: Vec<Nation> = self
            .pieces
            .iter()
            .map(|p| p.nation.clone())
            .chain(
                self.territories
                    .iter()
                    .filter(|t| t.supply_center)
                    .filter_map(|t| t.controlled_by.clone()),
            )
            .collect();
        nations.sort();
        nations.dedup();
        nations
    }
}
