#![allow(dead_code)]
#![cfg(test)]

use adjudicator::geo::standard_territories;
use adjudicator::geo::{CoastId, TerritoryId};
use adjudicator::judge::{OutcomeLabel, TurnReport};
use adjudicator::state::{
    GameState, OrderId, OrderKind, Phase, PieceId, PieceState, Season, SubmittedOrder,
};
use adjudicator::{Nation, PieceType};

/// Assembles a standard-map game state one piece and order at a time.
pub struct StateBuilder {
    state: GameState,
    next_piece: u32,
    next_order: u32,
}

impl StateBuilder {
    fn new(season: Season, phase: Phase) -> Self {
        StateBuilder {
            state: GameState {
                variant: String::from("standard"),
                year: 1901,
                season,
                phase,
                territories: standard_territories(),
                pieces: Vec::new(),
                orders: Vec::new(),
            },
            next_piece: 0,
            next_order: 0,
        }
    }

    pub fn movement() -> Self {
        Self::new(Season::Spring, Phase::Order)
    }

    pub fn fall_movement() -> Self {
        Self::new(Season::Fall, Phase::Order)
    }

    pub fn retreat() -> Self {
        Self::new(Season::Spring, Phase::Retreat)
    }

    pub fn build() -> Self {
        Self::new(Season::Fall, Phase::Build)
    }

    pub fn finish(self) -> GameState {
        self.state
    }

    fn add_piece(
        &mut self,
        nation: &str,
        kind: PieceType,
        territory: TerritoryId,
        coast: Option<CoastId>,
    ) -> PieceId {
        self.next_piece += 1;
        let id = PieceId(self.next_piece);
        self.state.pieces.push(PieceState {
            id,
            nation: Nation::from(nation),
            kind,
            territory_id: territory,
            named_coast_id: coast,
            dislodged: false,
            must_retreat: false,
            attacker_territory_id: None,
        });
        id
    }

    pub fn army(&mut self, nation: &str, territory: TerritoryId) -> PieceId {
        self.add_piece(nation, PieceType::Army, territory, None)
    }

    pub fn fleet(&mut self, nation: &str, territory: TerritoryId) -> PieceId {
        self.add_piece(nation, PieceType::Fleet, territory, None)
    }

    pub fn fleet_on_coast(
        &mut self,
        nation: &str,
        territory: TerritoryId,
        coast: CoastId,
    ) -> PieceId {
        self.add_piece(nation, PieceType::Fleet, territory, Some(coast))
    }

    /// A piece awaiting retreat, with the dislodging attack's origin.
    pub fn retreater(
        &mut self,
        nation: &str,
        kind: PieceType,
        territory: TerritoryId,
        attacker: TerritoryId,
    ) -> PieceId {
        let id = self.add_piece(nation, kind, territory, None);
        let piece = self.state.pieces.last_mut().unwrap();
        piece.dislodged = true;
        piece.must_retreat = true;
        piece.attacker_territory_id = Some(attacker);
        id
    }

    pub fn control(&mut self, territory: TerritoryId, nation: Option<&str>) {
        let entry = self
            .state
            .territories
            .iter_mut()
            .find(|t| t.id == territory)
            .expect("territory should exist on the standard map");
        entry.controlled_by = nation.map(Nation::from);
    }

    pub fn contested(&mut self, territory: TerritoryId) {
        let entry = self
            .state
            .territories
            .iter_mut()
            .find(|t| t.id == territory)
            .expect("territory should exist on the standard map");
        entry.contested = true;
    }

    fn add_order(&mut self, nation: &str, kind: OrderKind, source: TerritoryId) -> OrderId {
        self.next_order += 1;
        let id = OrderId(self.next_order);
        self.state.orders.push(SubmittedOrder {
            id,
            nation: Nation::from(nation),
            kind,
            source_id: source,
            target_id: None,
            target_coast_id: None,
            aux_source_id: None,
            aux_target_id: None,
            piece_type: None,
            named_coast_id: None,
            via_convoy: false,
        });
        id
    }

    fn last_order(&mut self) -> &mut SubmittedOrder {
        self.state.orders.last_mut().unwrap()
    }

    pub fn hold(&mut self, nation: &str, source: TerritoryId) -> OrderId {
        self.add_order(nation, OrderKind::Hold, source)
    }

    pub fn mv(&mut self, nation: &str, source: TerritoryId, target: TerritoryId) -> OrderId {
        let id = self.add_order(nation, OrderKind::Move, source);
        self.last_order().target_id = Some(target);
        id
    }

    pub fn mv_coast(
        &mut self,
        nation: &str,
        source: TerritoryId,
        target: TerritoryId,
        coast: CoastId,
    ) -> OrderId {
        let id = self.mv(nation, source, target);
        self.last_order().target_coast_id = Some(coast);
        id
    }

    pub fn mv_via_convoy(
        &mut self,
        nation: &str,
        source: TerritoryId,
        target: TerritoryId,
    ) -> OrderId {
        let id = self.mv(nation, source, target);
        self.last_order().via_convoy = true;
        id
    }

    pub fn support_hold(
        &mut self,
        nation: &str,
        source: TerritoryId,
        supported: TerritoryId,
    ) -> OrderId {
        let id = self.add_order(nation, OrderKind::Support, source);
        self.last_order().aux_source_id = Some(supported);
        id
    }

    pub fn support_move(
        &mut self,
        nation: &str,
        source: TerritoryId,
        from: TerritoryId,
        to: TerritoryId,
    ) -> OrderId {
        let id = self.add_order(nation, OrderKind::Support, source);
        self.last_order().aux_source_id = Some(from);
        self.last_order().aux_target_id = Some(to);
        id
    }

    pub fn convoy(
        &mut self,
        nation: &str,
        source: TerritoryId,
        from: TerritoryId,
        to: TerritoryId,
    ) -> OrderId {
        let id = self.add_order(nation, OrderKind::Convoy, source);
        self.last_order().aux_source_id = Some(from);
        self.last_order().aux_target_id = Some(to);
        id
    }

    pub fn retreat_to(
        &mut self,
        nation: &str,
        source: TerritoryId,
        target: TerritoryId,
    ) -> OrderId {
        let id = self.add_order(nation, OrderKind::Retreat, source);
        self.last_order().target_id = Some(target);
        id
    }

    pub fn disband(&mut self, nation: &str, source: TerritoryId) -> OrderId {
        self.add_order(nation, OrderKind::Disband, source)
    }

    pub fn build_army(&mut self, nation: &str, territory: TerritoryId) -> OrderId {
        let id = self.add_order(nation, OrderKind::Build, territory);
        self.last_order().piece_type = Some(PieceType::Army);
        id
    }

    pub fn build_fleet(
        &mut self,
        nation: &str,
        territory: TerritoryId,
        coast: Option<CoastId>,
    ) -> OrderId {
        let id = self.add_order(nation, OrderKind::Build, territory);
        self.last_order().piece_type = Some(PieceType::Fleet);
        self.last_order().named_coast_id = coast;
        id
    }
}

pub fn process_ok(state: &GameState) -> TurnReport {
    adjudicator::process(state).expect("state should adjudicate")
}

pub fn outcome_of(report: &TurnReport, id: OrderId) -> OutcomeLabel {
    report
        .order(id)
        .unwrap_or_else(|| panic!("{} should be reported", id))
        .outcome
        .unwrap_or_else(|| panic!("{} should have an outcome", id))
}

pub fn illegal_code_of(report: &TurnReport, id: OrderId) -> String {
    report
        .order(id)
        .unwrap_or_else(|| panic!("{} should be reported", id))
        .illegal_code
        .clone()
        .unwrap_or_else(|| panic!("{} should be illegal", id))
}

pub fn is_legal(report: &TurnReport, id: OrderId) -> bool {
    use adjudicator::judge::LegalDecision;
    report
        .order(id)
        .unwrap_or_else(|| panic!("{} should be reported", id))
        .legal_decision
        == LegalDecision::Legal
}
