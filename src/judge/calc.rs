use crate::geo::TerritoryId;
use crate::unit::PieceType;

use super::resolver::{Context, OrderRef, ResolverState};
use super::strength::{Prevent, Strength};
use super::{convoy, support};

/// Returns true if `order` is a move and either a direct route or a
/// non-disrupted convoy route exists between its source and destination.
pub(crate) fn path_exists(context: &Context, resolver: &mut ResolverState, order: OrderRef) -> bool {
    let ord = context.order(order);
    let cmd = match ord.move_command() {
        Some(cmd) => cmd,
        None => return false,
    };

    let target = match context.map.territory(cmd.dest.territory) {
        Some(t) => t,
        None => return false,
    };

    if !ord.piece_type.can_occupy(target.terrain) {
        return false;
    }

    // An acceptable direct route short-circuits convoy assessment; an
    // explicit via-convoy move never travels overland.
    let can_travel_directly =
        !cmd.via_convoy && context.map.can_reach(ord.piece_type, ord.position, cmd.dest);

    can_travel_directly || convoy::route_exists(context, resolver, order)
}

/// Two orders form a head-to-head battle when they are mirrored moves and
/// no convoy exists to ferry one of the armies around the other.
pub(crate) fn is_head_to_head(
    context: &Context,
    resolver: &mut ResolverState,
    order1: OrderRef,
    order2: OrderRef,
) -> bool {
    let o1 = context.order(order1);
    let o2 = context.order(order2);

    o1.move_dest().map(|d| d.territory) == Some(o2.position.territory)
        && o2.move_dest().map(|d| d.territory) == Some(o1.position.territory)
        && o1.position.territory != o2.position.territory
        && !convoy::route_exists(context, resolver, order1)
        && !convoy::route_exists(context, resolver, order2)
}

fn prevent_result(
    context: &Context,
    resolver: &mut ResolverState,
    order: OrderRef,
) -> Option<Prevent> {
    if !context.order(order).is_move() {
        return None;
    }

    if !path_exists(context, resolver, order) {
        return Some(Prevent::NoPath);
    }

    // A piece that lost a head-to-head cannot prevent.
    let h2h = context
        .order_refs()
        .find(|&other| other != order && is_head_to_head(context, resolver, other, order));
    if let Some(h2h) = h2h {
        if resolver.resolve(context, h2h).into() {
            return Some(Prevent::LostHeadToHead);
        }
    }

    Some(Prevent::Prevents(
        order,
        support::find_for(context, resolver, order),
    ))
}

/// All prevents contesting a territory, with their supporters.
pub(crate) fn prevent_results(
    context: &Context,
    resolver: &mut ResolverState,
    territory: TerritoryId,
) -> Vec<Prevent> {
    context
        .order_refs()
        .filter(|&idx| context.order(idx).is_move_to(territory))
        .filter_map(|idx| prevent_result(context, resolver, idx))
        .collect()
}

/// The strongest prevent competing with `preventing` for its destination.
pub(crate) fn max_prevent_result(
    context: &Context,
    resolver: &mut ResolverState,
    preventing: OrderRef,
) -> Option<Prevent> {
    let dest = context.order(preventing).move_dest()?.territory;

    let mut best_prevent = None;
    let mut best_prevent_strength = 0;
    for order in context
        .order_refs()
        .filter(|&idx| idx != preventing && context.order(idx).is_move_to(dest))
    {
        if is_head_to_head(context, resolver, order, preventing)
            && resolver.resolve(context, order).into()
        {
            if best_prevent.is_none() {
                best_prevent = Some(Prevent::LostHeadToHead);
            }
            continue;
        } else if let Some(prevent) = prevent_result(context, resolver, order) {
            let strength = prevent.strength();
            if strength >= best_prevent_strength {
                best_prevent_strength = strength;
                best_prevent = Some(prevent);
            }
        }
    }

    best_prevent
}

/// The order that dislodges the given order's piece, if one exists.
///
/// A piece is dislodged when another move into its territory succeeds and
/// the piece did not itself successfully vacate.
pub(crate) fn dislodger_of(
    context: &Context,
    resolver: &mut ResolverState,
    order: OrderRef,
) -> Option<OrderRef> {
    let home = context.order(order).position.territory;

    for would_be_dislodger in context
        .order_refs()
        .filter(|&idx| idx != order && context.order(idx).is_move_to(home))
    {
        // A successful exit makes dislodgement impossible. Deferred to
        // here to avoid unnecessary resolutions.
        if context.order(order).is_move() && resolver.resolve(context, order).into() {
            return None;
        }

        if resolver.resolve(context, would_be_dislodger).into() {
            return Some(would_be_dislodger);
        }
    }

    None
}

/// Convenience used by legality checking: whether a convoy for this army
/// move is even conceivable on the map, regardless of orders.
pub(crate) fn convoy_conceivable(
    map: &crate::geo::Map,
    piece_type: PieceType,
    from: TerritoryId,
    to: TerritoryId,
) -> bool {
    use crate::geo::Terrain;

    if piece_type != PieceType::Army || from == to {
        return false;
    }

    let from_coastal = map
        .territory(from)
        .map(|t| t.terrain == Terrain::Coastal)
        .unwrap_or(false);
    let to_coastal = map
        .territory(to)
        .map(|t| t.terrain == Terrain::Coastal)
        .unwrap_or(false);

    from_coastal && to_coastal
}
