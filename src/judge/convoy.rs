//! Convoy-route discovery for the movement phase.

use crate::geo::TerritoryId;
use crate::order::MainCommand;
use crate::unit::PieceType;

use super::resolver::{Context, OrderRef, ResolverState};
use super::OrderState;

/// Whether `convoy` is an order to carry `mv_ord` from its current
/// location to its destination.
fn is_convoy_for(context: &Context, convoy: OrderRef, mv_ord: OrderRef) -> bool {
    match &context.order(convoy).command {
        MainCommand::Convoy(cm) => cm.matches(context.order(mv_ord)),
        _ => false,
    }
}

/// Depth-first search for convoy chains from `origin` to `dest` through
/// the given fleets.
fn route_steps(
    context: &Context,
    convoys: &[OrderRef],
    origin: TerritoryId,
    dest: TerritoryId,
    working_path: Vec<OrderRef>,
) -> Vec<Vec<OrderRef>> {
    // With at least one fleet in the chain and one hop to the
    // destination, the working path is a valid route.
    if !working_path.is_empty() && context.map.are_neighbours(origin, dest) {
        return vec![working_path];
    }

    let mut paths = vec![];
    for &convoy in convoys {
        let at = context.order(convoy).position.territory;
        // Step to an adjacent fleet; no backtracking.
        if !working_path.contains(&convoy) && context.map.are_neighbours(origin, at) {
            let mut next_path = working_path.clone();
            next_path.push(convoy);
            let mut steps = route_steps(context, convoys, at, dest, next_path);
            paths.append(&mut steps);
        }
    }

    paths
}

/// All intact convoy routes for a move order.
///
/// Convoy orders are resolved eagerly before the search so that the
/// depth-first recursion cannot spiral through the resolver.
pub(crate) fn routes(
    context: &Context,
    resolver: &mut ResolverState,
    mv_ord: OrderRef,
) -> Vec<Vec<OrderRef>> {
    let order = context.order(mv_ord);
    if order.piece_type == PieceType::Fleet {
        return vec![];
    }

    let dest = match order.move_dest() {
        Some(dest) => dest,
        None => return vec![],
    };

    let mut convoy_steps = vec![];
    for other in context.order_refs() {
        if is_convoy_for(context, other, mv_ord)
            && resolver.resolve(context, other) == OrderState::Succeeds
        {
            convoy_steps.push(other);
        }
    }

    route_steps(
        context,
        &convoy_steps,
        order.position.territory,
        dest.territory,
        vec![],
    )
}

/// Whether any intact convoy route exists for the given move order.
pub(crate) fn route_exists(
    context: &Context,
    resolver: &mut ResolverState,
    mv_ord: OrderRef,
) -> bool {
    !routes(context, resolver, mv_ord).is_empty()
}

/// The outcome of a movement-phase convoy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvoyOutcome {
    /// The convoying fleet was dislodged by the given order.
    Dislodged(OrderRef),
    /// The convoy was failed to break a paradox.
    Paradox,
    /// The convoy held. This does not imply the ferried move succeeded.
    NotDisrupted,
}

impl From<&ConvoyOutcome> for OrderState {
    fn from(outcome: &ConvoyOutcome) -> Self {
        OrderState::from(matches!(outcome, ConvoyOutcome::NotDisrupted))
    }
}

impl From<ConvoyOutcome> for OrderState {
    fn from(outcome: ConvoyOutcome) -> Self {
        (&outcome).into()
    }
}
