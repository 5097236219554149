//! Retreat-phase adjudication.
//!
//! The retreat phase is self-contained on the game state: dislodged pieces
//! arrive flagged `must_retreat` with the attack's origin recorded, and
//! standoff territories arrive flagged `contested`. Retreats resolve
//! simultaneously; everyone who collides disbands.

use std::collections::HashMap;

use crate::error::AdjudicationError;
use crate::geo::{Map, Position, TerritoryId};
use crate::order::{RetreatCommand, RetreatOrder};
use crate::state::{GameState, OrderKind, PieceId, PieceState, SubmittedOrder};
use crate::unit::PieceType;

use super::legality::{Checked, IllegalCode};
use super::outcome::{OrderReport, OutcomeLabel, PieceReport, TerritoryReport, TurnReport};

pub(crate) fn adjudicate(state: &GameState, map: &Map) -> Result<TurnReport, AdjudicationError> {
    let mut orders: Vec<RetreatOrder> = Vec::new();
    let mut illegal: Vec<(crate::state::OrderId, IllegalCode)> = Vec::new();

    for submitted in &state.orders {
        match check_retreat_order(state, map, submitted)? {
            Checked::Legal(order) => {
                if orders.iter().any(|existing| existing.piece == order.piece) {
                    return Err(AdjudicationError::invalid(format!(
                        "multiple orders for the piece at {}",
                        submitted.source_id
                    )));
                }
                orders.push(order);
            }
            Checked::Illegal(code) => illegal.push((submitted.id, code)),
        }
    }

    // Simultaneous resolution: two retreats into the same territory all
    // fail, regardless of coast.
    let mut headcount: HashMap<TerritoryId, usize> = HashMap::new();
    for order in &orders {
        if let RetreatCommand::Move(dest) = order.command {
            *headcount.entry(dest.territory).or_default() += 1;
        }
    }

    let mut moved: HashMap<PieceId, bool> = HashMap::new();
    let mut order_reports = Vec::with_capacity(state.orders.len());
    for submitted in &state.orders {
        if let Some((_, code)) = illegal.iter().find(|(id, _)| *id == submitted.id) {
            order_reports.push(OrderReport::illegal(submitted.id, *code));
            continue;
        }

        let order = orders
            .iter()
            .find(|order| order.id == submitted.id)
            .expect("a submitted order is either legal or illegal");

        let label = match order.command {
            RetreatCommand::Disband => {
                moved.insert(order.piece, false);
                OutcomeLabel::Succeeds
            }
            RetreatCommand::Move(dest) => {
                if headcount[&dest.territory] > 1 {
                    moved.insert(order.piece, false);
                    OutcomeLabel::Fails
                } else {
                    moved.insert(order.piece, true);
                    OutcomeLabel::Moves
                }
            }
        };
        order_reports.push(OrderReport::legal(submitted.id, label));
    }

    // Every retreating piece that did not get away disbands, including
    // pieces whose nations never sent an order.
    let piece_reports = state
        .pieces
        .iter()
        .map(|piece| {
            let mut report = PieceReport::sustains(piece.id);
            if piece.must_retreat && !moved.get(&piece.id).copied().unwrap_or(false) {
                report.disbanded = true;
            }
            report
        })
        .collect();

    // Standoffs are consumed by this phase.
    let territory_reports = state
        .territories
        .iter()
        .map(|territory| TerritoryReport {
            id: territory.id,
            contested: false,
        })
        .collect();

    Ok(TurnReport {
        orders: order_reports,
        pieces: piece_reports,
        territories: territory_reports,
        new_pieces: Vec::new(),
    })
}

fn check_retreat_order(
    state: &GameState,
    map: &Map,
    submitted: &SubmittedOrder,
) -> Result<Checked<RetreatOrder>, AdjudicationError> {
    map.territory(submitted.source_id).ok_or_else(|| {
        AdjudicationError::invalid(format!(
            "{} addresses unknown territory {}",
            submitted.id, submitted.source_id
        ))
    })?;

    // The retreat phase addresses retreating pieces; anything else at the
    // source does not count.
    let piece = match state.retreater(submitted.source_id) {
        Some(piece) => piece,
        None => return Ok(Checked::Illegal(IllegalCode::NoPiece)),
    };

    if piece.nation != submitted.nation {
        return Ok(Checked::Illegal(IllegalCode::ForeignPiece));
    }

    let command = match submitted.kind {
        OrderKind::Disband => RetreatCommand::Disband,
        OrderKind::Retreat => {
            let target_id = submitted.target_id.ok_or_else(|| {
                AdjudicationError::invalid(format!("{} is a retreat without a target", submitted.id))
            })?;
            let target = map.territory(target_id).ok_or_else(|| {
                AdjudicationError::invalid(format!(
                    "{} references unknown territory {}",
                    submitted.id, target_id
                ))
            })?;

            if piece.kind == PieceType::Fleet && target.has_multiple_coasts() {
                if submitted.target_coast_id.is_none() {
                    return Ok(Checked::Illegal(IllegalCode::MissingNamedCoast));
                }
            }

            let dest = Position::new(
                target_id,
                match piece.kind {
                    PieceType::Fleet if target.has_multiple_coasts() => submitted.target_coast_id,
                    _ => None,
                },
            );

            if !in_retreat_set(state, map, piece, dest) {
                return Ok(Checked::Illegal(IllegalCode::InvalidRetreatTarget));
            }

            RetreatCommand::Move(dest)
        }
        other => {
            return Err(AdjudicationError::invalid(format!(
                "{} kind {} is not accepted during the retreat phase",
                submitted.id, other
            )))
        }
    };

    Ok(Checked::Legal(RetreatOrder {
        id: submitted.id,
        piece: piece.id,
        nation: piece.nation.clone(),
        piece_type: piece.kind,
        position: piece.position(),
        command,
    }))
}

/// The legal retreat set: adjacent positions reachable by the piece's
/// type, excluding the attack's origin, standoff territories, and
/// territories that still hold a piece.
fn in_retreat_set(state: &GameState, map: &Map, piece: &PieceState, dest: Position) -> bool {
    if !map.can_reach(piece.kind, piece.position(), dest) {
        return false;
    }

    if piece.attacker_territory_id == Some(dest.territory) {
        return false;
    }

    let target = match map.territory(dest.territory) {
        Some(t) => t,
        None => return false,
    };

    if target.contested {
        return false;
    }

    state.occupier(dest.territory).is_none()
}
