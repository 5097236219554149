//! Helpers for evaluating support commands during the movement phase.

use crate::geo::Map;
use crate::order::{MainCommand, MainOrder, SupportedOrder};

use super::resolver::{Context, OrderRef, ResolverState};
use super::{calc, OrderState};

fn order_cuts(
    context: &Context,
    resolver: &mut ResolverState,
    support_order: OrderRef,
    cutting_order: OrderRef,
) -> bool {
    let support = context.order(support_order);
    let cutting = context.order(cutting_order);

    // Only moves can cut support.
    let dest = match cutting.move_dest() {
        Some(dest) => dest,
        None => return false,
    };

    // An attack on somebody else cannot cut this support.
    if dest.territory != support.position.territory {
        return false;
    }

    // Pieces cannot cut support provided by their countrymen.
    if support.nation == cutting.nation {
        return false;
    }

    // When the supported move is aimed at the cutter's own territory, the
    // support holds unless the cutter actually dislodges the supporter.
    // The cutter is only resolved in this precise case to minimize cycle
    // risks.
    let is_supporter_immune = match support.command {
        MainCommand::Support(SupportedOrder::Move(_, supported_dest))
            if cutting.position.territory == supported_dest =>
        {
            !bool::from(resolver.resolve(context, cutting_order))
        }
        _ => false,
    };

    if is_supporter_immune {
        return false;
    }

    // The cut happens whether or not the attack succeeds, as long as it
    // can arrive at all. Convoyed attacks on their own convoy's supports
    // are left to the paradox rules.
    calc::path_exists(context, resolver, cutting_order)
}

/// Find an order which cuts the specified support, if any exists.
pub(crate) fn find_cutting_order(
    context: &Context,
    resolver: &mut ResolverState,
    support_order: OrderRef,
) -> Option<OrderRef> {
    context
        .order_refs()
        .find(|&order| order_cuts(context, resolver, support_order, order))
}

/// A support order may not be aimed at the supporter's own territory.
pub(crate) fn is_supporting_self(support_order: &MainOrder) -> bool {
    match &support_order.command {
        MainCommand::Support(supported) => {
            supported.needed_at() == support_order.position.territory
        }
        _ => false,
    }
}

/// Whether the supporter can project force into the territory where the
/// support is needed: the destination for a move support, the supported
/// piece's territory for a hold support. Reaching any coast suffices.
pub(crate) fn can_reach(map: &Map, support_order: &MainOrder) -> bool {
    match &support_order.command {
        MainCommand::Support(supported) => map.can_reach_territory(
            support_order.piece_type,
            support_order.position,
            supported.needed_at(),
        ),
        _ => false,
    }
}

/// Whether a support order is structurally valid as a support.
fn is_legal(support_order: &MainOrder) -> bool {
    match &support_order.command {
        MainCommand::Support(SupportedOrder::Hold(_)) => true,
        MainCommand::Support(SupportedOrder::Move(from, to)) => from != to,
        _ => false,
    }
}

/// Whether `support_order` successfully supports `supported`.
fn is_successful(
    context: &Context,
    resolver: &mut ResolverState,
    supported: OrderRef,
    support_order: OrderRef,
) -> bool {
    let support = context.order(support_order);

    if let MainCommand::Support(beneficiary) = &support.command {
        is_legal(support)
            && !is_supporting_self(support)
            && beneficiary.matches(context.order(supported))
            && can_reach(context.map, support)
            && resolver.resolve(context, support_order).into()
    } else {
        false
    }
}

/// All orders which successfully support a given order.
pub(crate) fn find_for(
    context: &Context,
    resolver: &mut ResolverState,
    supported: OrderRef,
) -> Vec<OrderRef> {
    context
        .order_refs()
        .filter(|&order| is_successful(context, resolver, supported, order))
        .collect()
}

/// The outcome of a movement-phase support order.
///
/// Structural problems (self-support, an unreachable target) are caught by
/// the legality pass and never enter resolution, so the only question left
/// here is whether the support was cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportOutcome {
    /// The support was applied. This does not imply the supported order
    /// succeeded.
    NotDisrupted,
    /// The support was cut by the given attack.
    CutBy(OrderRef),
}

impl From<&SupportOutcome> for OrderState {
    fn from(outcome: &SupportOutcome) -> Self {
        OrderState::from(matches!(outcome, SupportOutcome::NotDisrupted))
    }
}

impl From<SupportOutcome> for OrderState {
    fn from(outcome: SupportOutcome) -> Self {
        (&outcome).into()
    }
}
