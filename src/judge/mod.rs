//! Turn adjudication: legality, the movement resolver, the retreat and
//! build resolvers, and the report handed back to the caller.

mod build;
mod calc;
mod convoy;
mod legality;
mod movement;
mod outcome;
mod resolver;
mod retreat;
mod rulebook;
mod strength;
mod support;

pub use self::convoy::ConvoyOutcome;
pub use self::legality::IllegalCode;
pub use self::outcome::{
    DislodgedDecision, LegalDecision, NewPiece, OrderOutcome, OrderReport, OutcomeLabel,
    PieceReport, TerritoryReport, TurnReport,
};
pub use self::resolver::OrderState;
pub use self::rulebook::{AttackOutcome, HoldOutcome};
pub use self::support::SupportOutcome;

use crate::error::AdjudicationError;
use crate::geo::Map;
use crate::state::{GameState, Phase};
use crate::unit::PieceType;

/// Adjudicate one turn.
///
/// Pure: the state is read, never written, and the same state always
/// produces the same report. Callers may run any number of `process` calls
/// in parallel over distinct states.
pub fn process(state: &GameState) -> Result<TurnReport, AdjudicationError> {
    let map = Map::new(&state.territories)?;
    validate(state, &map)?;

    match state.phase {
        Phase::Order => movement::adjudicate(state, &map),
        Phase::Retreat => retreat::adjudicate(state, &map),
        Phase::Build => build::adjudicate(state, &map),
    }
}

/// Structural validation the caller was responsible for. Failures here are
/// malformed input, not adjudication results.
fn validate(state: &GameState, map: &Map) -> Result<(), AdjudicationError> {
    for piece in &state.pieces {
        let territory = map.territory(piece.territory_id).ok_or_else(|| {
            AdjudicationError::invalid(format!(
                "{} stands in unknown territory {}",
                piece.id, piece.territory_id
            ))
        })?;

        if !piece.kind.can_occupy(territory.terrain) {
            return Err(AdjudicationError::invalid(format!(
                "{} cannot stand in {}",
                piece.id, territory.name
            )));
        }

        match (piece.kind, piece.named_coast_id) {
            (PieceType::Fleet, None) if territory.has_multiple_coasts() => {
                return Err(AdjudicationError::invalid(format!(
                    "{} is a fleet on {} without a named coast",
                    piece.id, territory.name
                )));
            }
            (PieceType::Fleet, Some(coast_id)) => {
                if !territory.has_multiple_coasts() {
                    return Err(AdjudicationError::invalid(format!(
                        "{} carries a named coast on single-coast {}",
                        piece.id, territory.name
                    )));
                }
                let coast = map.coast(coast_id).ok_or_else(|| {
                    AdjudicationError::invalid(format!(
                        "{} is attached to unknown coast {}",
                        piece.id, coast_id
                    ))
                })?;
                if coast.parent_id != piece.territory_id {
                    return Err(AdjudicationError::invalid(format!(
                        "{} is attached to a coast of another territory",
                        piece.id
                    )));
                }
            }
            (PieceType::Army, Some(_)) => {
                return Err(AdjudicationError::invalid(format!(
                    "{} is an army bound to a named coast",
                    piece.id
                )));
            }
            _ => {}
        }
    }

    // One standing piece per territory; a dislodged piece may share with
    // its dislodger while awaiting retreat.
    for territory in &state.territories {
        let standing = state
            .pieces
            .iter()
            .filter(|p| p.territory_id == territory.id && !p.dislodged && !p.must_retreat)
            .count();
        if standing > 1 {
            return Err(AdjudicationError::invalid(format!(
                "multiple pieces occupy {}",
                territory.name
            )));
        }
    }

    for order in &state.orders {
        if !state.phase.possible_order_kinds().contains(&order.kind) {
            return Err(AdjudicationError::invalid(format!(
                "{} kind {} is not accepted during this phase",
                order.id, order.kind
            )));
        }
    }

    Ok(())
}
