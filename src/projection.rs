//! Projection of a resolved turn into the next turn's game state.
//!
//! The projector is the read-only counterpart of [`process`]: given the
//! state that was adjudicated and the report that came back, it produces
//! the piece placements, territory control, and phase for the following
//! turn.
//!
//! Phase sequence: Spring Order, Spring Retreat (only when something was
//! dislodged), Fall Order, Fall Retreat (likewise), Build, next Spring
//! Order. The build phase runs every fall; a nation whose centers and
//! pieces balance simply has nothing to adjust. Supply-center control is
//! updated when the fall build state is created, so adjustments see the
//! centers captured that fall; unoccupied centers keep their previous
//! controller.
//!
//! [`process`]: crate::judge::process

use std::collections::HashMap;

use crate::geo::{CoastId, TerritoryId};
use crate::judge::{DislodgedDecision, OutcomeLabel, TurnReport};
use crate::nation::Nation;
use crate::state::{GameState, OrderKind, Phase, PieceId, PieceState, Season};
use crate::unit::PieceType;

/// Derive the next turn's state from a resolved turn.
pub fn next_turn(state: &GameState, report: &TurnReport) -> GameState {
    match state.phase {
        Phase::Order => project_movement(state, report),
        Phase::Retreat => project_retreat(state, report),
        Phase::Build => project_build(state, report),
    }
}

/// The destinations of orders that relocated their piece this turn.
fn relocations(
    state: &GameState,
    report: &TurnReport,
    kind: OrderKind,
) -> HashMap<PieceId, (TerritoryId, Option<CoastId>)> {
    let mut moves = HashMap::new();

    for order in &state.orders {
        if order.kind != kind {
            continue;
        }

        let moved = report
            .order(order.id)
            .map(|r| r.outcome == Some(OutcomeLabel::Moves))
            .unwrap_or(false);
        if !moved {
            continue;
        }

        let piece = match kind {
            OrderKind::Retreat => state.retreater(order.source_id),
            _ => state.occupier(order.source_id),
        };

        if let Some(piece) = piece {
            moves.insert(
                piece.id,
                (
                    order.target_id.expect("a relocating order has a target"),
                    order.target_coast_id,
                ),
            );
        }
    }

    moves
}

/// A piece's coast binding after arriving somewhere: fleets keep a coast
/// only on multi-coast territories.
fn arrival_coast(
    state: &GameState,
    kind: PieceType,
    territory: TerritoryId,
    coast: Option<CoastId>,
) -> Option<CoastId> {
    if kind != PieceType::Fleet {
        return None;
    }

    state
        .territories
        .iter()
        .find(|t| t.id == territory)
        .filter(|t| t.has_multiple_coasts())
        .and(coast)
}

fn project_movement(state: &GameState, report: &TurnReport) -> GameState {
    let mut next = state.clone();
    let moves = relocations(state, report, OrderKind::Move);

    for piece in &mut next.pieces {
        if let Some(&(territory, coast)) = moves.get(&piece.id) {
            piece.territory_id = territory;
            piece.named_coast_id = arrival_coast(state, piece.kind, territory, coast);
        }

        piece.dislodged = false;
        piece.must_retreat = false;
        piece.attacker_territory_id = None;

        if let Some(piece_report) = report.piece(piece.id) {
            if piece_report.dislodged_decision == DislodgedDecision::Dislodged {
                piece.dislodged = true;
                piece.must_retreat = true;
                piece.attacker_territory_id = piece_report.attacker_territory;
            }
        }
    }

    next.orders.clear();

    let any_dislodged = next.pieces.iter().any(|p| p.must_retreat);
    if any_dislodged {
        // Standoff flags only matter to the retreat phase they precede.
        for territory in &mut next.territories {
            territory.contested = report
                .territory(territory.id)
                .map(|t| t.contested)
                .unwrap_or(false);
        }
        next.phase = Phase::Retreat;
    } else {
        for territory in &mut next.territories {
            territory.contested = false;
        }
        advance_past_season(&mut next);
    }

    next
}

fn project_retreat(state: &GameState, report: &TurnReport) -> GameState {
    let mut next = state.clone();
    let retreats = relocations(state, report, OrderKind::Retreat);

    next.pieces.retain(|piece| {
        report
            .piece(piece.id)
            .map(|r| !r.disbanded)
            .unwrap_or(true)
    });

    for piece in &mut next.pieces {
        if let Some(&(territory, coast)) = retreats.get(&piece.id) {
            piece.territory_id = territory;
            piece.named_coast_id = arrival_coast(state, piece.kind, territory, coast);
        }
        piece.dislodged = false;
        piece.must_retreat = false;
        piece.attacker_territory_id = None;
    }

    for territory in &mut next.territories {
        territory.contested = false;
    }

    next.orders.clear();
    advance_past_season(&mut next);

    next
}

fn project_build(state: &GameState, report: &TurnReport) -> GameState {
    let mut next = state.clone();

    next.pieces.retain(|piece| {
        report
            .piece(piece.id)
            .map(|r| !r.disbanded)
            .unwrap_or(true)
    });

    let mut next_id = next.pieces.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
    for built in &report.new_pieces {
        next.pieces.push(PieceState {
            id: PieceId(next_id),
            nation: built.nation.clone(),
            kind: built.kind,
            territory_id: built.territory_id,
            named_coast_id: built.named_coast_id,
            dislodged: false,
            must_retreat: false,
            attacker_territory_id: None,
        });
        next_id += 1;
    }

    for territory in &mut next.territories {
        territory.contested = false;
    }

    next.orders.clear();
    next.season = Season::Spring;
    next.phase = Phase::Order;
    next.year += 1;

    next
}

/// Advance out of a settled season: spring hands over to fall, fall hands
/// over to the build phase with supply-center control brought up to date.
fn advance_past_season(next: &mut GameState) {
    match next.season {
        Season::Spring => {
            next.season = Season::Fall;
            next.phase = Phase::Order;
        }
        Season::Fall => {
            update_center_control(next);
            next.phase = Phase::Build;
        }
    }
}

/// Each occupied supply center passes to its occupier; empty centers keep
/// their previous controller.
fn update_center_control(state: &mut GameState) {
    let occupiers: HashMap<TerritoryId, Nation> = state
        .pieces
        .iter()
        .filter(|p| !p.dislodged && !p.must_retreat)
        .map(|p| (p.territory_id, p.nation.clone()))
        .collect();

    for territory in &mut state.territories {
        if !territory.supply_center {
            continue;
        }
        if let Some(nation) = occupiers.get(&territory.id) {
            territory.controlled_by = Some(nation.clone());
        }
    }
}
