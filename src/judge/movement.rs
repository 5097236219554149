//! Movement-phase adjudication: intake, resolution, and report assembly.

use std::collections::HashMap;

use crate::error::AdjudicationError;
use crate::geo::Map;
use crate::state::GameState;

use super::legality::{self, MovementIntake};
use super::outcome::{
    DislodgedDecision, OrderReport, OutcomeLabel, PieceReport, TerritoryReport, TurnReport,
};
use super::resolver::{Context, OrderRef, ResolverState};
use super::strength::Prevent;
use super::{calc, rulebook, OrderState};

pub(crate) fn adjudicate(state: &GameState, map: &Map) -> Result<TurnReport, AdjudicationError> {
    let MovementIntake {
        orders,
        illegal,
        by_submitted,
        by_piece,
    } = legality::movement_intake(state, map)?;

    let context = Context::new(map, &orders);
    let mut resolver = ResolverState::new();
    for order in context.order_refs() {
        resolver.resolve(&context, order);
    }

    if !resolver.is_complete(&context) {
        return Err(AdjudicationError::AdjudicatorBug(String::from(
            "movement resolution left unresolved decisions",
        )));
    }

    // The resolved state answers every remaining question without further
    // guessing; a clone keeps the canonical state untouched while the
    // explanations re-derive supporting detail.
    let mut explainer = resolver.clone();

    let states: Vec<OrderState> = context
        .order_refs()
        .map(|order| explainer.resolve(&context, order))
        .collect();

    let dislodgers: Vec<Option<OrderRef>> = context
        .order_refs()
        .map(|order| calc::dislodger_of(&context, &mut explainer, order))
        .collect();

    let mut order_reports = Vec::with_capacity(state.orders.len());
    for submitted in &state.orders {
        if let Some(&idx) = by_submitted.get(&submitted.id) {
            let succeeded = bool::from(states[idx]);
            let label = match (context.order(idx).is_move(), succeeded) {
                (true, true) => OutcomeLabel::Moves,
                (false, true) => OutcomeLabel::Succeeds,
                (_, false) => OutcomeLabel::Fails,
            };
            order_reports.push(OrderReport::legal(submitted.id, label));
        } else {
            let (_, code) = illegal
                .iter()
                .find(|(id, _)| *id == submitted.id)
                .expect("a submitted order is either legal or illegal");
            order_reports.push(OrderReport::illegal(submitted.id, *code));
        }
    }

    let mut piece_reports = Vec::with_capacity(state.pieces.len());
    for piece in &state.pieces {
        let &idx = by_piece
            .get(&piece.id)
            .expect("every piece has a resolution order");

        let mut report = PieceReport::sustains(piece.id);
        if let Some(dislodger) = dislodgers[idx] {
            let attacker = context.order(dislodger);
            report.dislodged_decision = DislodgedDecision::Dislodged;
            report.dislodged_by = Some(attacker.piece);
            report.attacker_territory = Some(attacker.position.territory);
        }
        piece_reports.push(report);
    }

    let territory_reports = contested_territories(state, &context, &mut explainer, &dislodgers);

    // Explanations must agree with the canonical resolution.
    for order in context.order_refs() {
        let explained: OrderState = rulebook::explain(&context, &mut explainer, order).into();
        if explained != states[order] {
            return Err(AdjudicationError::AdjudicatorBug(format!(
                "conflicting decisions for {}",
                context.order(order)
            )));
        }
    }

    Ok(TurnReport {
        orders: order_reports,
        pieces: piece_reports,
        territories: territory_reports,
        new_pieces: Vec::new(),
    })
}

/// A territory is contested (a standoff) when moves bounced there and
/// nobody entered. Dislodged movers lost their fight elsewhere and do not
/// close a territory to retreats.
fn contested_territories(
    state: &GameState,
    context: &Context,
    resolver: &mut ResolverState,
    dislodgers: &[Option<OrderRef>],
) -> Vec<TerritoryReport> {
    let dislodged: HashMap<OrderRef, bool> = context
        .order_refs()
        .map(|order| (order, dislodgers[order].is_some()))
        .collect();

    state
        .territories
        .iter()
        .map(|territory| {
            let entered = context.order_refs().any(|order| {
                context.order(order).is_move_to(territory.id)
                    && bool::from(resolver.resolve(context, order))
            });

            let bounced = !entered
                && calc::prevent_results(context, resolver, territory.id)
                    .iter()
                    .any(|prevent| match prevent {
                        Prevent::Prevents(order, _) => !dislodged[order],
                        _ => false,
                    });

            TerritoryReport {
                id: territory.id,
                contested: bounced,
            }
        })
        .collect()
}
