//! Movement-phase cases from the Diplomacy Adjudicator Test Cases.

#[path = "./util.rs"]
mod util;

use std::collections::HashMap;

use adjudicator::geo::standard::{coasts, nations::*, territories::*};
use adjudicator::judge::{DislodgedDecision, OutcomeLabel};
use util::*;

/// 6.A.1: moving to a non-adjacent territory is rejected outright.
#[test]
fn move_to_non_neighbour_is_illegal() {
    let mut b = StateBuilder::movement();
    b.fleet(ENGLAND, NORTH_SEA);
    let order = b.mv(ENGLAND, NORTH_SEA, PICARDY);
    let report = process_ok(&b.finish());

    assert_eq!("003", illegal_code_of(&report, order));
}

/// 6.A.2
#[test]
fn army_cannot_move_to_sea() {
    let mut b = StateBuilder::movement();
    b.army(ENGLAND, LIVERPOOL);
    let order = b.mv(ENGLAND, LIVERPOOL, IRISH_SEA);
    let report = process_ok(&b.finish());

    assert_eq!("003", illegal_code_of(&report, order));
}

/// 6.A.3
#[test]
fn fleet_cannot_move_inland() {
    let mut b = StateBuilder::movement();
    b.fleet(GERMANY, KIEL);
    let order = b.mv(GERMANY, KIEL, MUNICH);
    let report = process_ok(&b.finish());

    assert_eq!("003", illegal_code_of(&report, order));
}

/// 6.A.6: ordering another nation's piece.
#[test]
fn ordering_a_foreign_piece_is_illegal() {
    let mut b = StateBuilder::movement();
    b.fleet(ENGLAND, LONDON);
    let order = b.mv(GERMANY, LONDON, NORTH_SEA);
    let report = process_ok(&b.finish());

    assert_eq!("002", illegal_code_of(&report, order));
}

#[test]
fn order_to_empty_territory_is_illegal() {
    let mut b = StateBuilder::movement();
    b.fleet(ENGLAND, LONDON);
    b.hold(ENGLAND, LONDON);
    let order = b.mv(FRANCE, PARIS, BURGUNDY);
    let report = process_ok(&b.finish());

    assert_eq!("001", illegal_code_of(&report, order));
}

/// 6.A.7: only armies can be convoyed.
#[test]
fn fleet_cannot_be_convoyed() {
    let mut b = StateBuilder::movement();
    b.fleet(ENGLAND, LONDON);
    b.fleet(ENGLAND, NORTH_SEA);
    let mv = b.mv(ENGLAND, LONDON, BELGIUM);
    let convoy = b.convoy(ENGLAND, NORTH_SEA, LONDON, BELGIUM);
    let report = process_ok(&b.finish());

    assert_eq!("003", illegal_code_of(&report, mv));
    assert_eq!("006", illegal_code_of(&report, convoy));
}

/// 6.A.8: supporting yourself to hold is not possible; the piece is taken
/// at plain hold strength.
#[test]
fn support_to_hold_self_is_illegal() {
    let mut b = StateBuilder::movement();
    b.army(ITALY, VENICE);
    b.army(ITALY, TYROLIA);
    let tri = b.fleet(AUSTRIA, TRIESTE);
    let mv = b.mv(ITALY, VENICE, TRIESTE);
    let sup = b.support_move(ITALY, TYROLIA, VENICE, TRIESTE);
    let self_sup = b.support_hold(AUSTRIA, TRIESTE, TRIESTE);
    let report = process_ok(&b.finish());

    assert_eq!("003", illegal_code_of(&report, self_sup));
    assert_eq!(OutcomeLabel::Moves, outcome_of(&report, mv));
    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, sup));
    assert_eq!(
        DislodgedDecision::Dislodged,
        report.piece(tri).unwrap().dislodged_decision
    );
}

/// 6.A.11
#[test]
fn simple_bounce_contests_the_territory() {
    let mut b = StateBuilder::movement();
    let vie = b.army(AUSTRIA, VIENNA);
    let ven = b.army(ITALY, VENICE);
    let mv1 = b.mv(AUSTRIA, VIENNA, TYROLIA);
    let mv2 = b.mv(ITALY, VENICE, TYROLIA);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, mv1));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, mv2));
    assert!(report.territory(TYROLIA).unwrap().contested);
    for piece in [vie, ven] {
        assert_eq!(
            DislodgedDecision::Sustains,
            report.piece(piece).unwrap().dislodged_decision
        );
    }
}

/// Three-piece rotation: every move in an all-move cycle succeeds.
#[test]
fn three_army_rotation_succeeds() {
    let mut b = StateBuilder::movement();
    b.army(GERMANY, BERLIN);
    b.army(GERMANY, KIEL);
    b.army(GERMANY, MUNICH);
    let m1 = b.mv(GERMANY, BERLIN, KIEL);
    let m2 = b.mv(GERMANY, KIEL, MUNICH);
    let m3 = b.mv(GERMANY, MUNICH, BERLIN);
    let report = process_ok(&b.finish());

    for order in [m1, m2, m3] {
        assert_eq!(OutcomeLabel::Moves, outcome_of(&report, order));
    }
}

/// Equally supported attacks on the same territory all bounce; the
/// territory stays empty and contested.
#[test]
fn equal_supported_attacks_bounce() {
    let mut b = StateBuilder::movement();
    b.fleet(ENGLAND, ENGLISH_CHANNEL);
    b.fleet(ENGLAND, NORTH_SEA);
    b.army(FRANCE, BURGUNDY);
    b.army(FRANCE, RUHR);
    let eng_mv = b.mv(ENGLAND, ENGLISH_CHANNEL, BELGIUM);
    let eng_sup = b.support_move(ENGLAND, NORTH_SEA, ENGLISH_CHANNEL, BELGIUM);
    let fra_mv = b.mv(FRANCE, BURGUNDY, BELGIUM);
    let fra_sup = b.support_move(FRANCE, RUHR, BURGUNDY, BELGIUM);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, eng_mv));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, fra_mv));
    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, eng_sup));
    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, fra_sup));
    assert!(report.territory(BELGIUM).unwrap().contested);
}

/// A nation cannot dislodge its own piece, even with support.
#[test]
fn self_dislodgement_is_forbidden() {
    let mut b = StateBuilder::movement();
    let wal = b.army(ENGLAND, WALES);
    b.army(ENGLAND, LONDON);
    b.fleet(ENGLAND, ENGLISH_CHANNEL);
    b.hold(ENGLAND, WALES);
    let mv = b.mv(ENGLAND, LONDON, WALES);
    let sup = b.support_move(ENGLAND, ENGLISH_CHANNEL, LONDON, WALES);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, mv));
    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, sup));
    assert_eq!(
        DislodgedDecision::Sustains,
        report.piece(wal).unwrap().dislodged_decision
    );
}

/// Supports to dislodge a countryman of the occupier do not count.
#[test]
fn foreign_support_cannot_dislodge_own_piece() {
    let mut b = StateBuilder::movement();
    let mun = b.army(GERMANY, MUNICH);
    b.army(GERMANY, SILESIA);
    b.army(AUSTRIA, BOHEMIA);
    b.hold(GERMANY, MUNICH);
    let mv = b.mv(GERMANY, SILESIA, MUNICH);
    let sup = b.support_move(AUSTRIA, BOHEMIA, SILESIA, MUNICH);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, mv));
    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, sup));
    assert_eq!(
        DislodgedDecision::Sustains,
        report.piece(mun).unwrap().dislodged_decision
    );
}

/// A support is cut by an attack from anywhere except the territory the
/// supported move is aimed at.
#[test]
fn support_cut_by_flank_attack() {
    let mut b = StateBuilder::movement();
    b.army(ITALY, VENICE);
    b.army(ITALY, TYROLIA);
    let tri = b.fleet(AUSTRIA, TRIESTE);
    b.army(AUSTRIA, VIENNA);
    let mv = b.mv(ITALY, VENICE, TRIESTE);
    let sup = b.support_move(ITALY, TYROLIA, VENICE, TRIESTE);
    b.hold(AUSTRIA, TRIESTE);
    let cut = b.mv(AUSTRIA, VIENNA, TYROLIA);
    let report = process_ok(&b.finish());

    // The support is cut, the attack drops to strength one, and the
    // occupier holds.
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, sup));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, mv));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, cut));
    assert_eq!(
        DislodgedDecision::Sustains,
        report.piece(tri).unwrap().dislodged_decision
    );
}

/// An attack from the supported move's target does not cut the support
/// unless it dislodges the supporter.
#[test]
fn support_holds_against_attack_from_target() {
    let mut b = StateBuilder::movement();
    b.army(ITALY, VENICE);
    b.army(ITALY, TYROLIA);
    let tri = b.fleet(AUSTRIA, TRIESTE);
    let mv = b.mv(ITALY, VENICE, TRIESTE);
    let sup = b.support_move(ITALY, TYROLIA, VENICE, TRIESTE);
    let counter = b.mv(AUSTRIA, TRIESTE, TYROLIA);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, sup));
    assert_eq!(OutcomeLabel::Moves, outcome_of(&report, mv));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, counter));
    let tri_report = report.piece(tri).unwrap();
    assert_eq!(DislodgedDecision::Dislodged, tri_report.dislodged_decision);
    assert_eq!(Some(VENICE), tri_report.attacker_territory);
}

/// A convoyed army arrives when every fleet in the chain survives.
#[test]
fn convoyed_move_succeeds() {
    let mut b = StateBuilder::movement();
    b.army(ENGLAND, LONDON);
    b.fleet(ENGLAND, NORTH_SEA);
    let mv = b.mv_via_convoy(ENGLAND, LONDON, NORWAY);
    let convoy = b.convoy(ENGLAND, NORTH_SEA, LONDON, NORWAY);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Moves, outcome_of(&report, mv));
    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, convoy));
}

/// Dislodging a convoying fleet disrupts the convoy.
#[test]
fn dislodged_convoy_strands_the_army() {
    let mut b = StateBuilder::movement();
    b.army(ENGLAND, LONDON);
    let nth = b.fleet(ENGLAND, NORTH_SEA);
    b.fleet(GERMANY, SKAGERRAK);
    b.fleet(GERMANY, HELGOLAND_BIGHT);
    let mv = b.mv_via_convoy(ENGLAND, LONDON, NORWAY);
    let convoy = b.convoy(ENGLAND, NORTH_SEA, LONDON, NORWAY);
    let atk = b.mv(GERMANY, SKAGERRAK, NORTH_SEA);
    let sup = b.support_move(GERMANY, HELGOLAND_BIGHT, SKAGERRAK, NORTH_SEA);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Moves, outcome_of(&report, atk));
    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, sup));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, convoy));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, mv));
    assert_eq!(
        DislodgedDecision::Dislodged,
        report.piece(nth).unwrap().dislodged_decision
    );
}

/// The simple convoy paradox, resolved by the Szykman rule: the
/// paradoxical convoy is treated as disrupted and the army stays.
#[test]
fn convoy_paradox_resolves_against_the_convoy() {
    let mut b = StateBuilder::movement();
    b.fleet(ENGLAND, LONDON);
    b.fleet(ENGLAND, WALES);
    b.army(FRANCE, BREST);
    let eng = b.fleet(FRANCE, ENGLISH_CHANNEL);
    let sup = b.support_move(ENGLAND, LONDON, WALES, ENGLISH_CHANNEL);
    let atk = b.mv(ENGLAND, WALES, ENGLISH_CHANNEL);
    let ferry = b.mv_via_convoy(FRANCE, BREST, LONDON);
    let convoy = b.convoy(FRANCE, ENGLISH_CHANNEL, BREST, LONDON);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, convoy));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, ferry));
    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, sup));
    assert_eq!(OutcomeLabel::Moves, outcome_of(&report, atk));
    assert_eq!(
        DislodgedDecision::Dislodged,
        report.piece(eng).unwrap().dislodged_decision
    );
}

/// Fleets take named-coast adjacency into account when moving.
#[test]
fn fleet_moves_respect_named_coasts() {
    let mut b = StateBuilder::movement();
    b.fleet(FRANCE, GASCONY);
    b.fleet(FRANCE, MARSEILLES);
    let nc = b.mv_coast(FRANCE, GASCONY, SPAIN, coasts::SPAIN_NC);
    let sc = b.mv_coast(FRANCE, MARSEILLES, SPAIN, coasts::SPAIN_SC);
    let report = process_ok(&b.finish());

    // Both legal, but they bounce over the shared parent territory.
    assert!(is_legal(&report, nc));
    assert!(is_legal(&report, sc));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, nc));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, sc));
}

#[test]
fn fleet_move_to_multi_coast_requires_coast() {
    let mut b = StateBuilder::movement();
    b.fleet(FRANCE, GASCONY);
    let order = b.mv(FRANCE, GASCONY, SPAIN);
    let report = process_ok(&b.finish());

    assert_eq!("007", illegal_code_of(&report, order));
}

#[test]
fn unreachable_coast_is_illegal() {
    let mut b = StateBuilder::movement();
    b.fleet(FRANCE, GASCONY);
    let order = b.mv_coast(FRANCE, GASCONY, SPAIN, coasts::SPAIN_SC);
    let report = process_ok(&b.finish());

    assert_eq!("003", illegal_code_of(&report, order));
}

/// 6.B.4: support to an unreachable coast is allowed; support addresses
/// the territory.
#[test]
fn support_to_unreachable_coast_is_legal() {
    let mut b = StateBuilder::movement();
    b.fleet(FRANCE, GASCONY);
    b.fleet(FRANCE, MARSEILLES);
    b.fleet(ITALY, WESTERN_MEDITERRANEAN);
    let mv = b.mv_coast(FRANCE, GASCONY, SPAIN, coasts::SPAIN_NC);
    let sup = b.support_move(FRANCE, MARSEILLES, GASCONY, SPAIN);
    let foe = b.mv_coast(ITALY, WESTERN_MEDITERRANEAN, SPAIN, coasts::SPAIN_SC);
    let report = process_ok(&b.finish());

    assert_eq!(OutcomeLabel::Succeeds, outcome_of(&report, sup));
    assert_eq!(OutcomeLabel::Moves, outcome_of(&report, mv));
    assert_eq!(OutcomeLabel::Fails, outcome_of(&report, foe));
}

/// Movement conserves pieces: nobody is created or destroyed, and every
/// piece either stays, moves, or is dislodged in place.
#[test]
fn movement_conserves_pieces() {
    let mut b = StateBuilder::movement();
    b.army(GERMANY, BERLIN);
    b.army(GERMANY, KIEL);
    b.army(RUSSIA, PRUSSIA);
    b.army(RUSSIA, WARSAW);
    b.mv(GERMANY, BERLIN, PRUSSIA);
    b.support_move(GERMANY, KIEL, BERLIN, PRUSSIA);
    b.hold(RUSSIA, PRUSSIA);
    b.mv(RUSSIA, WARSAW, SILESIA);
    let state = b.finish();
    let report = process_ok(&state);

    let mut by_nation: HashMap<&str, usize> = HashMap::new();
    for piece in &state.pieces {
        *by_nation.entry(piece.nation.name()).or_default() += 1;
    }
    assert_eq!(2, by_nation["GERMANY"]);
    assert_eq!(2, by_nation["RUSSIA"]);
    assert_eq!(state.pieces.len(), report.pieces.len());

    let prussia = report.pieces.iter().find(|p| p.id.0 == 3).unwrap();
    assert_eq!(DislodgedDecision::Dislodged, prussia.dislodged_decision);
    assert_eq!(Some(BERLIN), prussia.attacker_territory);
    assert_eq!(Some(1), prussia.dislodged_by.map(|p| p.0));
}
