//! Resolution outcomes and the turn report returned to the caller.

use from_variants::FromVariants;
use serde::{Deserialize, Serialize};

use crate::geo::{CoastId, TerritoryId};
use crate::nation::Nation;
use crate::state::{OrderId, PieceId};
use crate::unit::PieceType;

use super::convoy::ConvoyOutcome;
use super::legality::IllegalCode;
use super::rulebook::{AttackOutcome, HoldOutcome};
use super::support::SupportOutcome;
use super::OrderState;

/// The outcome of one movement-phase order. The variant matches the
/// command that was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromVariants)]
pub enum OrderOutcome {
    Hold(HoldOutcome),
    Move(AttackOutcome),
    Support(SupportOutcome),
    Convoy(ConvoyOutcome),
}

impl From<&OrderOutcome> for OrderState {
    fn from(outcome: &OrderOutcome) -> Self {
        match outcome {
            OrderOutcome::Hold(o) => o.into(),
            OrderOutcome::Move(o) => o.into(),
            OrderOutcome::Support(o) => o.into(),
            OrderOutcome::Convoy(o) => o.into(),
        }
    }
}

impl From<OrderOutcome> for OrderState {
    fn from(outcome: OrderOutcome) -> Self {
        (&outcome).into()
    }
}

/// Whether an order passed its phase's legality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalDecision {
    Legal,
    Illegal,
}

/// Whether a piece held its territory through the movement phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DislodgedDecision {
    Dislodged,
    Sustains,
}

/// Final outcome label of an order, as consumed by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeLabel {
    /// A move or retreat that relocates its piece.
    Moves,
    /// Any other order whose effect applies.
    Succeeds,
    Fails,
}

/// Per-order slice of the turn report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReport {
    pub id: OrderId,
    pub legal_decision: LegalDecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illegal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illegal_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<OutcomeLabel>,
}

impl OrderReport {
    pub(crate) fn legal(id: OrderId, outcome: OutcomeLabel) -> Self {
        OrderReport {
            id,
            legal_decision: LegalDecision::Legal,
            illegal_code: None,
            illegal_message: None,
            outcome: Some(outcome),
        }
    }

    pub(crate) fn illegal(id: OrderId, code: IllegalCode) -> Self {
        OrderReport {
            id,
            legal_decision: LegalDecision::Illegal,
            illegal_code: Some(String::from(code.code())),
            illegal_message: Some(String::from(code.message())),
            outcome: None,
        }
    }
}

/// Per-piece slice of the turn report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceReport {
    pub id: PieceId,
    pub dislodged_decision: DislodgedDecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dislodged_by: Option<PieceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker_territory: Option<TerritoryId>,
    /// The piece ceased to exist this turn: a failed or ordered disband.
    #[serde(default)]
    pub disbanded: bool,
}

impl PieceReport {
    pub(crate) fn sustains(id: PieceId) -> Self {
        PieceReport {
            id,
            dislodged_decision: DislodgedDecision::Sustains,
            dislodged_by: None,
            attacker_territory: None,
            disbanded: false,
        }
    }
}

/// Per-territory slice of the turn report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryReport {
    pub id: TerritoryId,
    pub contested: bool,
}

/// A piece created by a successful build order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPiece {
    pub nation: Nation,
    #[serde(rename = "type")]
    pub kind: PieceType,
    pub territory_id: TerritoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_coast_id: Option<CoastId>,
}

/// Everything the persistence layer needs to record the adjudicated turn
/// and construct the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub orders: Vec<OrderReport>,
    pub pieces: Vec<PieceReport>,
    pub territories: Vec<TerritoryReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub new_pieces: Vec<NewPiece>,
}

impl TurnReport {
    pub fn order(&self, id: OrderId) -> Option<&OrderReport> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn piece(&self, id: PieceId) -> Option<&PieceReport> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn territory(&self, id: TerritoryId) -> Option<&TerritoryReport> {
        self.territories.iter().find(|t| t.id == id)
    }
}
