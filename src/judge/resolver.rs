use std::collections::{HashMap, HashSet};

use crate::geo::{Map, TerritoryId};
use crate::order::{MainCommand, MainOrder};

use super::rulebook;

/// Success or failure of an order. For move commands success means the
/// piece moves; for every other command it means the order's effect holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderState {
    Succeeds,
    Fails,
}

impl From<bool> for OrderState {
    fn from(b: bool) -> Self {
        if b {
            OrderState::Succeeds
        } else {
            OrderState::Fails
        }
    }
}

impl From<OrderState> for bool {
    fn from(os: OrderState) -> Self {
        os == OrderState::Succeeds
    }
}

/// Index of an order in the resolution set. The resolution set holds
/// exactly one order per piece, synthesized holds included.
pub(crate) type OrderRef = usize;

/// The immutable inputs of a movement resolution.
pub(crate) struct Context<'a> {
    pub map: &'a Map<'a>,
    orders: &'a [MainOrder],
    occupiers: HashMap<TerritoryId, OrderRef>,
}

impl<'a> Context<'a> {
    pub fn new(map: &'a Map<'a>, orders: &'a [MainOrder]) -> Self {
        Context {
            map,
            orders,
            occupiers: orders
                .iter()
                .enumerate()
                .map(|(idx, order)| (order.position.territory, idx))
                .collect(),
        }
    }

    pub fn order(&self, idx: OrderRef) -> &'a MainOrder {
        &self.orders[idx]
    }

    pub fn order_refs(&self) -> std::ops::Range<OrderRef> {
        0..self.orders.len()
    }

    /// The order of the piece standing in a territory, if any.
    pub fn occupier_of(&self, territory: TerritoryId) -> Option<OrderRef> {
        self.occupiers.get(&territory).copied()
    }
}

/// Resolution progress of a single decision.
///
/// `Guessing` values are hypotheses under test; `Known` values are final
/// and never revisited, which is what makes the whole calculation a
/// monotone fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolutionState {
    Guessing(OrderState),
    Known(OrderState),
}

/// The mutable half of a movement resolution.
///
/// Resolution works by guessing: to resolve an order with no known state,
/// the resolver assumes it fails, adjudicates under that assumption, and
/// checks whether the answer depended on any other unresolved order. When
/// a guess circles back to the order that spawned it, the orders between
/// them form a dependency cycle and are settled by the cycle rules: a
/// cycle of moves rotates; a cycle involving convoys is a paradox and the
/// convoys are failed (the Szykman rule); anything else is retried from
/// scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolverState {
    state: HashMap<OrderRef, ResolutionState>,
    /// Convoy orders that were demoted to resolve a paradox.
    paradoxical_orders: HashSet<OrderRef>,
    /// Guesses that have been visited twice, indicating a cycle when the
    /// chain returns to an order already on it.
    dependency_chain: Vec<OrderRef>,
}

impl ResolverState {
    pub fn new() -> Self {
        ResolverState {
            state: HashMap::new(),
            paradoxical_orders: HashSet::new(),
            dependency_chain: Vec::new(),
        }
    }

    fn clear_state(&mut self, order: OrderRef) {
        self.state.remove(&order);
    }

    fn set_state(&mut self, order: OrderRef, resolution: ResolutionState) {
        self.state.insert(order, resolution);
    }

    fn knows_outcome_of(&self, order: OrderRef) -> bool {
        matches!(self.state.get(&order), Some(ResolutionState::Known(_)))
    }

    /// Every decision has reached a final value.
    pub fn is_complete(&self, context: &Context) -> bool {
        context.order_refs().all(|idx| self.knows_outcome_of(idx))
    }

    pub fn order_in_paradox(&self, order: OrderRef) -> bool {
        self.paradoxical_orders.contains(&order)
    }

    /// Clone the resolver, guess an outcome for `order`, and adjudicate it
    /// under that guess. Returns the speculative resolver so the caller
    /// can inspect the dependencies the guess accumulated.
    fn with_guess(
        &self,
        context: &Context,
        order: OrderRef,
        guess: OrderState,
    ) -> (ResolverState, OrderState) {
        let mut guesser = self.clone();
        guesser.set_state(order, ResolutionState::Guessing(guess));
        let result = rulebook::adjudicate(context, &mut guesser, order);
        (guesser, result)
    }

    /// Take durable state from a speculative resolver whose guesses worked
    /// out.
    fn snap_to(&mut self, other: ResolverState) {
        self.state = other.state;
        self.paradoxical_orders = other.paradoxical_orders;
        self.dependency_chain = other.dependency_chain;
    }

    /// Settle a detected dependency cycle.
    fn resolve_dependency_cycle(&mut self, context: &Context, cycle: &[OrderRef]) {
        use self::ResolutionState::*;

        // A cycle consisting entirely of moves is a rotation: every piece
        // steps into the territory the next one vacates.
        if cycle.iter().all(|&idx| context.order(idx).is_move()) {
            for &idx in cycle {
                self.set_state(idx, Known(OrderState::Succeeds));
            }
        } else {
            for &idx in cycle {
                self.dependency_chain.pop();
                if self.knows_outcome_of(idx) {
                    continue;
                }

                if let MainCommand::Convoy(_) = context.order(idx).command {
                    // Szykman: the paradoxical convoy is treated as
                    // disrupted, leaving the convoyed army in place.
                    self.paradoxical_orders.insert(idx);
                    self.set_state(idx, Known(OrderState::Fails));
                } else {
                    self.clear_state(idx);
                }
            }
        }
    }

    /// Resolve whether an order succeeds or fails, updating the resolver's
    /// state in the process.
    pub fn resolve(&mut self, context: &Context, order: OrderRef) -> OrderState {
        use self::ResolutionState::*;

        match self.state.get(&order) {
            Some(&Known(order_state)) => order_state,
            Some(&Guessing(order_state)) => {
                // Recursive resolutions accumulate onto the dependency
                // chain so the initiating call can spot cycles.
                if !self.dependency_chain.contains(&order) {
                    self.dependency_chain.push(order);
                }

                order_state
            }
            None => {
                let (first_resolver, first_result) =
                    self.with_guess(context, order, OrderState::Fails);

                // No new dependencies means the result did not rest on any
                // unresolved guess; it is final.
                if first_resolver.dependency_chain.len() == self.dependency_chain.len() {
                    self.snap_to(first_resolver);
                    self.set_state(order, Known(first_result));
                    first_result
                } else {
                    let next_dep = first_resolver.dependency_chain[self.dependency_chain.len()];

                    if next_dep != order {
                        // The guess depends on someone else's guess; keep
                        // the hypothesis and let the outer resolution
                        // settle it.
                        self.snap_to(first_resolver);
                        self.set_state(order, Guessing(first_result));
                        self.dependency_chain.push(order);
                        first_result
                    } else {
                        // The guess circled back to this very order.
                        let (_, second_result) =
                            self.with_guess(context, order, OrderState::Succeeds);

                        if first_result == second_result {
                            // Both hypotheses agree, so the cycle does not
                            // actually control this order's fate.
                            self.set_state(order, Known(first_result));
                            first_result
                        } else {
                            let tail_start = self.dependency_chain.len();
                            let tail = first_resolver.dependency_chain[tail_start..].to_vec();

                            self.resolve_dependency_cycle(context, &tail);
                            self.resolve(context, order)
                        }
                    }
                }
            }
        }
    }
}
