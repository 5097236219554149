//! The standard 1982 rules, expressed as decisions over the resolver.

use crate::order::MainCommand;

use super::calc::{dislodger_of, is_head_to_head, max_prevent_result, path_exists};
use super::convoy::ConvoyOutcome;
use super::outcome::OrderOutcome;
use super::resolver::{Context, OrderRef, ResolverState};
use super::strength::Strength;
use super::support::{self, SupportOutcome};
use super::OrderState;

/// Determine the success of an order under the current resolver state.
pub(crate) fn adjudicate(
    context: &Context,
    resolver: &mut ResolverState,
    order: OrderRef,
) -> OrderState {
    explain(context, resolver, order).into()
}

/// Determine the outcome of an order, with enough information to say why
/// it succeeded or failed.
pub(crate) fn explain(
    context: &Context,
    resolver: &mut ResolverState,
    order: OrderRef,
) -> OrderOutcome {
    match context.order(order).command {
        // A move succeeds when the piece transitions to the target.
        MainCommand::Move(..) => adjudicate_move(context, resolver, order).into(),

        // A support "succeeds" when it is not cut; whether it got applied
        // is the supported order's business.
        MainCommand::Support(..) => adjudicate_support(context, resolver, order).into(),

        // A hold succeeds when the piece is not dislodged.
        MainCommand::Hold => adjudicate_hold(context, resolver, order).into(),

        // A convoy succeeds when the fleet is not dislodged and the convoy
        // does not create a paradox.
        MainCommand::Convoy(..) => adjudicate_convoy(context, resolver, order).into(),
    }
}

fn adjudicate_hold(
    context: &Context,
    resolver: &mut ResolverState,
    order: OrderRef,
) -> HoldOutcome {
    dislodger_of(context, resolver, order)
        .map(HoldOutcome::Dislodged)
        .unwrap_or(HoldOutcome::Succeeds)
}

fn adjudicate_move(
    context: &Context,
    resolver: &mut ResolverState,
    order: OrderRef,
) -> AttackOutcome {
    let ord = context.order(order);
    let dest = ord
        .move_dest()
        .expect("adjudicate_move is only called on moves");

    if dest.territory == ord.position.territory {
        return AttackOutcome::MoveToSelf;
    }

    if !path_exists(context, resolver, order) {
        return AttackOutcome::NoPath;
    }

    let mut atk_supports = support::find_for(context, resolver, order);
    let mut atk_strength = 1 + atk_supports.len();
    let prevent = max_prevent_result(context, resolver, order);

    // If the attack cannot overcome the strongest prevent even in the best
    // case there is no point continuing; reporting the bounce immediately
    // also keeps three-piece rotation bounces honest.
    if atk_strength <= prevent.strength() {
        return AttackOutcome::Prevented(unwrap_preventer(prevent));
    }

    if let Some(occupier) = context
        .occupier_of(dest.territory)
        .filter(|&occ| occ != order)
    {
        let occ = context.order(occupier);
        let head_to_head = is_head_to_head(context, resolver, order, occupier);

        // Resistance and head-to-head strength are computed separately:
        // hold and defend strengths count supports that may come from the
        // attacker's own nation, while the head-to-head comparison must
        // not let such supports dislodge their countryman.
        let (resistance, h2h_strength) = if !occ.is_move() || head_to_head {
            let mut resisting_supports = support::find_for(context, resolver, occupier);
            let resistance = 1 + resisting_supports.len();

            if head_to_head {
                resisting_supports
                    .retain(|&sup| context.order(sup).nation != ord.nation);
                (resistance, 1 + resisting_supports.len())
            } else {
                (resistance, 0)
            }
        } else if resolver.resolve(context, occupier) == OrderState::Fails {
            // A failed exit resists with the lone trapped piece.
            (1, 0)
        } else {
            // A successful exit mounts no resistance.
            (0, 0)
        };

        if resistance > 0 {
            // A piece may not dislodge a piece of the same nation.
            if ord.nation == occ.nation {
                return AttackOutcome::FriendlyFire;
            }

            let self_defend_strength = atk_strength;

            // Supports from the defender's nation cannot be used to
            // dislodge the defender's own piece.
            atk_supports.retain(|&sup| context.order(sup).nation != occ.nation);
            atk_strength = 1 + atk_supports.len();

            // The discarded supports may have been carrying the attack
            // past the prevent; re-check.
            if atk_strength <= prevent.strength() {
                return AttackOutcome::Prevented(unwrap_preventer(prevent));
            }

            if self_defend_strength < h2h_strength {
                return AttackOutcome::LostHeadToHead;
            }

            if atk_strength <= resistance {
                return AttackOutcome::OccupierDefended;
            }
        }
    }

    AttackOutcome::Succeeds
}

fn unwrap_preventer(prevent: Option<super::strength::Prevent>) -> OrderRef {
    use super::strength::Prevent;

    match prevent {
        Some(Prevent::Prevents(order, _)) => order,
        _ => unreachable!("a blocking prevent always names its order"),
    }
}

fn adjudicate_support(
    context: &Context,
    resolver: &mut ResolverState,
    order: OrderRef,
) -> SupportOutcome {
    match support::find_cutting_order(context, resolver, order) {
        Some(cutter) => SupportOutcome::CutBy(cutter),
        None => SupportOutcome::NotDisrupted,
    }
}

fn adjudicate_convoy(
    context: &Context,
    resolver: &mut ResolverState,
    order: OrderRef,
) -> ConvoyOutcome {
    if let Some(dislodger) = dislodger_of(context, resolver, order) {
        return ConvoyOutcome::Dislodged(dislodger);
    }

    if resolver.order_in_paradox(order) {
        ConvoyOutcome::Paradox
    } else {
        ConvoyOutcome::NotDisrupted
    }
}

/// The outcome of a movement-phase hold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// The piece remains in its territory.
    Succeeds,
    /// The piece is dislodged by the given order.
    Dislodged(OrderRef),
}

impl From<&HoldOutcome> for OrderState {
    fn from(outcome: &HoldOutcome) -> Self {
        OrderState::from(matches!(outcome, HoldOutcome::Succeeds))
    }
}

impl From<HoldOutcome> for OrderState {
    fn from(outcome: HoldOutcome) -> Self {
        (&outcome).into()
    }
}

/// The outcome of a movement-phase move order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The order was a move to the piece's own territory.
    MoveToSelf,
    /// No direct route and no intact convoy route reached the destination.
    NoPath,
    /// The move was aimed at a territory held by a countryman who stayed.
    FriendlyFire,
    /// The move was outmuscled by the given competing order.
    Prevented(OrderRef),
    /// The intended victim dislodged the attacker instead.
    ///
    /// A piece that loses a head-to-head is dislodged, cannot retreat to
    /// the territory it was attacked from, and has no strength to prevent
    /// other pieces from occupying that territory.
    LostHeadToHead,
    /// The occupier fended the attack off, possibly with support.
    OccupierDefended,
    /// The piece moves to its destination.
    Succeeds,
}

impl From<&AttackOutcome> for OrderState {
    fn from(outcome: &AttackOutcome) -> Self {
        OrderState::from(matches!(outcome, AttackOutcome::Succeeds))
    }
}

impl From<AttackOutcome> for OrderState {
    fn from(outcome: AttackOutcome) -> Self {
        (&outcome).into()
    }
}
