//! Build-phase adjudication.
//!
//! Each nation's adjustment allowance is the difference between the supply
//! centers it controls and the pieces it keeps on the board. Builds beyond
//! the allowance are rejected; disbands short of the requirement are
//! completed by the civil-disorder rule: pieces farthest from the nation's
//! owned home centers go first, fleets before armies at equal distance,
//! alphabetical by territory name as the final tiebreak.

use std::collections::{HashMap, HashSet};

use crate::error::AdjudicationError;
use crate::geo::{Map, TerritoryId};
use crate::nation::Nation;
use crate::order::BuildCommand;
use crate::state::{GameState, OrderKind, PieceId, SubmittedOrder};
use crate::unit::PieceType;

use super::legality::{Checked, IllegalCode};
use super::outcome::{NewPiece, OrderReport, OutcomeLabel, PieceReport, TerritoryReport, TurnReport};

struct Ledger {
    /// Positive: builds available. Negative: disbands owed.
    delta: i32,
    builds_done: i32,
    disbands_done: i32,
}

pub(crate) fn adjudicate(state: &GameState, map: &Map) -> Result<TurnReport, AdjudicationError> {
    let mut ledgers: HashMap<Nation, Ledger> = state
        .nations()
        .into_iter()
        .map(|nation| {
            let centers = state.controlled_centers(&nation).count() as i32;
            let pieces = state
                .pieces
                .iter()
                .filter(|p| p.nation == nation)
                .count() as i32;
            (
                nation,
                Ledger {
                    delta: centers - pieces,
                    builds_done: 0,
                    disbands_done: 0,
                },
            )
        })
        .collect();

    let mut order_reports = Vec::with_capacity(state.orders.len());
    let mut new_pieces: Vec<NewPiece> = Vec::new();
    let mut disbanded: HashSet<PieceId> = HashSet::new();
    let mut built_territories: HashSet<TerritoryId> = HashSet::new();

    for submitted in &state.orders {
        let checked = check_adjustment(
            state,
            map,
            submitted,
            &mut ledgers,
            &mut disbanded,
            &built_territories,
        )?;

        match checked {
            Checked::Illegal(code) => order_reports.push(OrderReport::illegal(submitted.id, code)),
            Checked::Legal(command) => {
                match command {
                    BuildCommand::Build { piece_type, coast } => {
                        built_territories.insert(submitted.source_id);
                        new_pieces.push(NewPiece {
                            nation: submitted.nation.clone(),
                            kind: piece_type,
                            territory_id: submitted.source_id,
                            named_coast_id: coast,
                        });
                    }
                    BuildCommand::Disband => {}
                }
                order_reports.push(OrderReport::legal(submitted.id, OutcomeLabel::Succeeds));
            }
        }
    }

    civil_disorder(state, map, &ledgers, &mut disbanded);

    let piece_reports = state
        .pieces
        .iter()
        .map(|piece| {
            let mut report = PieceReport::sustains(piece.id);
            report.disbanded = disbanded.contains(&piece.id);
            report
        })
        .collect();

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
        new_pieces,
    })
}

fn check_adjustment(
    state: &GameState,
    map: &Map,
    submitted: &SubmittedOrder,
    ledgers: &mut HashMap<Nation, Ledger>,
    disbanded: &mut HashSet<PieceId>,
    built_territories: &HashSet<TerritoryId>,
) -> Result<Checked<BuildCommand>, AdjudicationError> {
    let territory = map.territory(submitted.source_id).ok_or_else(|| {
        AdjudicationError::invalid(format!(
            "{} addresses unknown territory {}",
            submitted.id, submitted.source_id
        ))
    })?;

    match submitted.kind {
        OrderKind::Build => {
            if !territory.is_home_center_of(&submitted.nation) {
                return Ok(Checked::Illegal(IllegalCode::OutsideNationalBorders));
            }

            if territory.controlled_by.as_ref() != Some(&submitted.nation) {
                return Ok(Checked::Illegal(IllegalCode::ForeignControlled));
            }

            // Both coasts of a multi-coast territory count as one spot.
            let occupied = state.pieces.iter().any(|p| {
                p.territory_id == submitted.source_id && !disbanded.contains(&p.id)
            }) || built_territories.contains(&submitted.source_id);
            if occupied {
                return Ok(Checked::Illegal(IllegalCode::SourceOccupied));
            }

            let piece_type = submitted.piece_type.ok_or_else(|| {
                AdjudicationError::invalid(format!(
                    "{} is a build without a piece type",
                    submitted.id
                ))
            })?;

            if !piece_type.can_occupy(territory.terrain) {
                return Ok(Checked::Illegal(IllegalCode::InvalidTerritoryType));
            }

            let coast = match piece_type {
                PieceType::Fleet if territory.has_multiple_coasts() => {
                    match submitted.named_coast_id {
                        None => return Ok(Checked::Illegal(IllegalCode::MissingNamedCoast)),
                        Some(coast_id) => {
                            let coast = map.coast(coast_id).ok_or_else(|| {
                                AdjudicationError::invalid(format!(
                                    "{} names unknown coast {}",
                                    submitted.id, coast_id
                                ))
                            })?;
                            if coast.parent_id != territory.id {
                                return Err(AdjudicationError::invalid(format!(
                                    "{} names {} which belongs to another territory",
                                    submitted.id, coast_id
                                )));
                            }
                            Some(coast_id)
                        }
                    }
                }
                _ => None,
            };

            let ledger = ledgers
                .entry(submitted.nation.clone())
                .or_insert(Ledger {
                    delta: 0,
                    builds_done: 0,
                    disbands_done: 0,
                });

            if ledger.delta <= ledger.builds_done {
                return Ok(Checked::Illegal(IllegalCode::ExceedsAllowance));
            }

            ledger.builds_done += 1;
            Ok(Checked::Legal(BuildCommand::Build { piece_type, coast }))
        }
        OrderKind::Disband => {
            let piece = match state.occupier(submitted.source_id) {
                Some(piece) => piece,
                None => return Ok(Checked::Illegal(IllegalCode::NoPiece)),
            };

            if piece.nation != submitted.nation {
                return Ok(Checked::Illegal(IllegalCode::ForeignPiece));
            }

            if disbanded.contains(&piece.id) {
                return Err(AdjudicationError::invalid(format!(
                    "multiple orders for the piece at {}",
                    submitted.source_id
                )));
            }

            let ledger = ledgers
                .entry(submitted.nation.clone())
                .or_insert(Ledger {
                    delta: 0,
                    builds_done: 0,
                    disbands_done: 0,
                });

            if -ledger.delta <= ledger.disbands_done {
                return Ok(Checked::Illegal(IllegalCode::ExceedsAllowance));
            }

            ledger.disbands_done += 1;
            disbanded.insert(piece.id);
            Ok(Checked::Legal(BuildCommand::Disband))
        }
        other => Err(AdjudicationError::invalid(format!(
            "{} kind {} is not accepted during the build phase",
            submitted.id, other
        ))),
    }
}

/// Complete under-ordered disbands by the fixed rule.
fn civil_disorder(
    state: &GameState,
    map: &Map,
    ledgers: &HashMap<Nation, Ledger>,
    disbanded: &mut HashSet<PieceId>,
) {
    let graph = map.to_graph();

    for (nation, ledger) in ledgers {
        let owed = -ledger.delta - ledger.disbands_done;
        if ledger.delta >= 0 || owed <= 0 {
            continue;
        }

        let home_centers: Vec<TerritoryId> = state
            .territories
            .iter()
            .filter(|t| t.is_home_center_of(nation) && t.controlled_by.as_ref() == Some(nation))
            .map(|t| t.id)
            .collect();

        let mut candidates: Vec<(u32, PieceType, String, PieceId)> = state
            .pieces
            .iter()
            .filter(|p| &p.nation == nation && !disbanded.contains(&p.id))
            .map(|piece| {
                let distances =
                    petgraph::algo::dijkstra(&graph, piece.territory_id, None, |_| 1u32);
                let distance = home_centers
                    .iter()
                    .filter_map(|center| distances.get(center).copied())
                    .min()
                    .unwrap_or(u32::MAX);
                let name = map
                    .territory(piece.territory_id)
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                (distance, piece.kind, name, piece.id)
            })
            .collect();

        // Farthest pieces go first; fleets disband before armies when
        // equidistant; names break the remaining ties.
        candidates.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then(b.1.cmp(&a.1))
                .then_with(|| a.2.cmp(&b.2))
        });

        for (_, _, _, piece) in candidates.into_iter().take(owed as usize) {
            disbanded.insert(piece);
        }
    }
}
