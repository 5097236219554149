//! Phase-gated order legality.
//!
//! An illegal order stays in the turn with a code and message attached;
//! for the movement phase its piece is treated as holding. Orders whose
//! references are simply broken (unknown ids, kinds foreign to the phase)
//! are the caller's validation failure and abort the call instead.

use std::collections::HashMap;

use crate::error::AdjudicationError;
use crate::geo::{Map, Position, Terrain};
use crate::order::{
    ConvoyedMove, MainCommand, MainOrder, MoveCommand, SupportedOrder,
};
use crate::state::{GameState, OrderId, OrderKind, PieceId, SubmittedOrder};
use crate::unit::PieceType;

use super::calc::convoy_conceivable;

/// The closed set of reasons an order can be rejected while the turn
/// continues around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalCode {
    /// 001
    NoPiece,
    /// 002
    ForeignPiece,
    /// 003
    UnreachableTarget,
    /// 004
    UnreachableSupport,
    /// 005
    ConvoyNotAtSea,
    /// 006
    InvalidConvoy,
    /// 007
    MissingNamedCoast,
    /// 011
    SourceOccupied,
    /// 013
    OutsideNationalBorders,
    /// 014
    ForeignControlled,
    /// 015
    InvalidTerritoryType,
    /// 016
    ExceedsAllowance,
    /// 020
    InvalidRetreatTarget,
}

impl IllegalCode {
    pub fn code(self) -> &'static str {
        match self {
            IllegalCode::NoPiece => "001",
            IllegalCode::ForeignPiece => "002",
            IllegalCode::UnreachableTarget => "003",
            IllegalCode::UnreachableSupport => "004",
            IllegalCode::ConvoyNotAtSea => "005",
            IllegalCode::InvalidConvoy => "006",
            IllegalCode::MissingNamedCoast => "007",
            IllegalCode::SourceOccupied => "011",
            IllegalCode::OutsideNationalBorders => "013",
            IllegalCode::ForeignControlled => "014",
            IllegalCode::InvalidTerritoryType => "015",
            IllegalCode::ExceedsAllowance => "016",
            IllegalCode::InvalidRetreatTarget => "020",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            IllegalCode::NoPiece => "No piece exists at the source territory.",
            IllegalCode::ForeignPiece => {
                "The piece at the source territory belongs to another nation."
            }
            IllegalCode::UnreachableTarget => {
                "The target territory is not reachable from the source territory."
            }
            IllegalCode::UnreachableSupport => {
                "The supported piece cannot reach the target territory."
            }
            IllegalCode::ConvoyNotAtSea => "A convoying piece must be a fleet at sea.",
            IllegalCode::InvalidConvoy => {
                "Only armies can be convoyed, and only between coastal territories."
            }
            IllegalCode::MissingNamedCoast => {
                "A named coast must be specified for this target territory."
            }
            IllegalCode::SourceOccupied => "Source is already occupied by a piece.",
            IllegalCode::OutsideNationalBorders => {
                "Cannot build in a supply center outside of national borders."
            }
            IllegalCode::ForeignControlled => {
                "Cannot build in a supply center which is controlled by a foreign power."
            }
            IllegalCode::InvalidTerritoryType => {
                "Piece type cannot exist in this type of territory."
            }
            IllegalCode::ExceedsAllowance => {
                "Order exceeds the number of builds or disbands available to the nation."
            }
            IllegalCode::InvalidRetreatTarget => {
                "The target territory is not in the piece's legal retreat set."
            }
        }
    }
}

/// The legality verdict on one submitted order.
pub(crate) enum Checked<T> {
    Legal(T),
    Illegal(IllegalCode),
}

/// The movement-phase resolution set: one order per piece, plus the
/// bookkeeping to tie results back to submitted orders and pieces.
pub(crate) struct MovementIntake {
    pub orders: Vec<MainOrder>,
    pub illegal: Vec<(OrderId, IllegalCode)>,
    /// Resolution index of each legal submitted order.
    pub by_submitted: HashMap<OrderId, usize>,
    /// Resolution index of each piece's order.
    pub by_piece: HashMap<PieceId, usize>,
}

/// Convert the submitted movement orders into the resolution set,
/// synthesizing holds for pieces that lack a legal order.
pub(crate) fn movement_intake(
    state: &GameState,
    map: &Map,
) -> Result<MovementIntake, AdjudicationError> {
    let mut orders: Vec<MainOrder> = Vec::with_capacity(state.pieces.len());
    let mut illegal = Vec::new();
    let mut by_submitted = HashMap::new();

    for submitted in &state.orders {
        match check_main_order(state, map, submitted)? {
            Checked::Legal(order) => {
                if orders.iter().any(|existing| existing.piece == order.piece) {
                    return Err(AdjudicationError::invalid(format!(
                        "multiple orders for the piece at {}",
                        submitted.source_id
                    )));
                }

                by_submitted.insert(submitted.id, orders.len());
                orders.push(order);
            }
            Checked::Illegal(code) => illegal.push((submitted.id, code)),
        }
    }

    // Pieces without a legal order hold.
    for piece in &state.pieces {
        if !orders.iter().any(|order| order.piece == piece.id) {
            orders.push(MainOrder {
                id: None,
                piece: piece.id,
                nation: piece.nation.clone(),
                piece_type: piece.kind,
                position: piece.position(),
                command: MainCommand::Hold,
            });
        }
    }

    let by_piece = orders
        .iter()
        .enumerate()
        .map(|(idx, order)| (order.piece, idx))
        .collect();

    Ok(MovementIntake {
        orders,
        illegal,
        by_submitted,
        by_piece,
    })
}

fn check_main_order(
    state: &GameState,
    map: &Map,
    submitted: &SubmittedOrder,
) -> Result<Checked<MainOrder>, AdjudicationError> {
    let source = map.territory(submitted.source_id).ok_or_else(|| {
        AdjudicationError::invalid(format!(
            "{} addresses unknown territory {}",
            submitted.id, submitted.source_id
        ))
    })?;

    let piece = match state.occupier(submitted.source_id) {
        Some(piece) => piece,
        None => return Ok(Checked::Illegal(IllegalCode::NoPiece)),
    };

    if piece.nation != submitted.nation {
        return Ok(Checked::Illegal(IllegalCode::ForeignPiece));
    }

    let command = match submitted.kind {
        OrderKind::Hold => MainCommand::Hold,
        OrderKind::Move => {
            let target_id = require_target(submitted)?;
            let target = require_territory(map, submitted, target_id)?;

            if piece.kind == PieceType::Fleet && target.has_multiple_coasts() {
                match submitted.target_coast_id {
                    None => return Ok(Checked::Illegal(IllegalCode::MissingNamedCoast)),
                    Some(coast_id) => {
                        let coast = map.coast(coast_id).ok_or_else(|| {
                            AdjudicationError::invalid(format!(
                                "{} names unknown coast {}",
                                submitted.id, coast_id
                            ))
                        })?;
                        if coast.parent_id != target_id {
                            return Err(AdjudicationError::invalid(format!(
                                "{} names {} which belongs to another territory",
                                submitted.id, coast_id
                            )));
                        }
                    }
                }
            }

            let dest = Position::new(
                target_id,
                match piece.kind {
                    PieceType::Fleet if target.has_multiple_coasts() => submitted.target_coast_id,
                    _ => None,
                },
            );

            let convoyable =
                convoy_conceivable(map, piece.kind, submitted.source_id, target_id);

            if submitted.via_convoy {
                if !convoyable {
                    return Ok(Checked::Illegal(IllegalCode::InvalidConvoy));
                }
                MoveCommand::via_convoy(dest).into()
            } else if map.can_reach(piece.kind, piece.position(), dest) || convoyable {
                MoveCommand::new(dest).into()
            } else {
                return Ok(Checked::Illegal(IllegalCode::UnreachableTarget));
            }
        }
        OrderKind::Support => {
            let supported_source = submitted.aux_source_id.ok_or_else(|| {
                AdjudicationError::invalid(format!("{} is a support without a supported piece", submitted.id))
            })?;
            require_territory(map, submitted, supported_source)?;

            let supported = match submitted.aux_target_id {
                Some(supported_target) => {
                    require_territory(map, submitted, supported_target)?;
                    SupportedOrder::Move(supported_source, supported_target)
                }
                None => SupportedOrder::Hold(supported_source),
            };

            if !map.can_reach_territory(piece.kind, piece.position(), supported.needed_at()) {
                return Ok(Checked::Illegal(IllegalCode::UnreachableTarget));
            }

            if let SupportedOrder::Move(from, to) = supported {
                if let Some(supported_piece) = state.occupier(from) {
                    let reachable = map.can_reach_territory(
                        supported_piece.kind,
                        supported_piece.position(),
                        to,
                    ) || convoy_conceivable(map, supported_piece.kind, from, to);

                    if !reachable {
                        return Ok(Checked::Illegal(IllegalCode::UnreachableSupport));
                    }
                }
            }

            supported.into()
        }
        OrderKind::Convoy => {
            let from = submitted.aux_source_id.ok_or_else(|| {
                AdjudicationError::invalid(format!("{} is a convoy without a convoyed piece", submitted.id))
            })?;
            let to = submitted.aux_target_id.ok_or_else(|| {
                AdjudicationError::invalid(format!("{} is a convoy without a destination", submitted.id))
            })?;
            require_territory(map, submitted, from)?;
            require_territory(map, submitted, to)?;

            if piece.kind != PieceType::Fleet || source.terrain != Terrain::Sea {
                return Ok(Checked::Illegal(IllegalCode::ConvoyNotAtSea));
            }

            if !convoy_conceivable(map, PieceType::Army, from, to) {
                return Ok(Checked::Illegal(IllegalCode::InvalidConvoy));
            }

            if let Some(carried) = state.occupier(from) {
                if carried.kind != PieceType::Army {
                    return Ok(Checked::Illegal(IllegalCode::InvalidConvoy));
                }
            }

            ConvoyedMove::new(from, to).into()
        }
        other => {
            return Err(AdjudicationError::invalid(format!(
                "{} kind {} is not accepted during the order phase",
                submitted.id, other
            )))
        }
    };

    Ok(Checked::Legal(MainOrder {
        id: Some(submitted.id),
        piece: piece.id,
        nation: piece.nation.clone(),
        piece_type: piece.kind,
        position: piece.position(),
        command,
    }))
}

fn require_target(submitted: &SubmittedOrder) -> Result<crate::geo::TerritoryId, AdjudicationError> {
    submitted.target_id.ok_or_else(|| {
        AdjudicationError::invalid(format!("{} is a move without a target", submitted.id))
    })
}

fn require_territory<'a>(
    map: &Map<'a>,
    submitted: &SubmittedOrder,
    id: crate::geo::TerritoryId,
) -> Result<&'a crate::geo::Territory, AdjudicationError> {
    map.territory(id).ok_or_else(|| {
        AdjudicationError::invalid(format!(
            "{} references unknown territory {}",
            submitted.id, id
        ))
    })
}
