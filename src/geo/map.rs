use std::collections::{HashMap, HashSet};

use petgraph::graphmap::UnGraphMap;

use crate::error::AdjudicationError;
use crate::geo::{CoastId, NamedCoast, Position, Terrain, Territory, TerritoryId};
use crate::unit::PieceType;

/// An indexed, validated view over the territory table supplied with a
/// game state.
///
/// The map derives a symmetric adjacency relation by taking the union of
/// both directions of every neighbour pair; a one-sided entry in the
/// supplied table is a data bug, not a rule of the game.
#[derive(Debug, Clone)]
pub struct Map<'a> {
    territories: HashMap<TerritoryId, &'a Territory>,
    coasts: HashMap<CoastId, &'a NamedCoast>,
    neighbours: HashMap<TerritoryId, HashSet<TerritoryId>>,
}

impl<'a> Map<'a> {
    /// Index a territory table, validating its internal references.
    pub fn new(table: &'a [Territory]) -> Result<Self, AdjudicationError> {
        let mut territories = HashMap::with_capacity(table.len());
        let mut coasts = HashMap::new();

        for territory in table {
            if territories.insert(territory.id, territory).is_some() {
                return Err(AdjudicationError::invalid(format!(
                    "duplicate territory id {}",
                    territory.id
                )));
            }

            for coast in &territory.named_coasts {
                if coast.parent_id != territory.id {
                    return Err(AdjudicationError::invalid(format!(
                        "named coast {} does not belong to territory {}",
                        coast.id, territory.id
                    )));
                }

                if coasts.insert(coast.id, coast).is_some() {
                    return Err(AdjudicationError::invalid(format!(
                        "duplicate named coast id {}",
                        coast.id
                    )));
                }
            }
        }

        let mut neighbours: HashMap<TerritoryId, HashSet<TerritoryId>> = HashMap::new();
        for territory in table {
            for &other in territory
                .neighbours
                .iter()
                .chain(&territory.shared_coasts)
                .chain(territory.named_coasts.iter().flat_map(|c| &c.neighbours))
            {
                if !territories.contains_key(&other) {
                    return Err(AdjudicationError::invalid(format!(
                        "territory {} lists unknown neighbour {}",
                        territory.id, other
                    )));
                }

                neighbours.entry(territory.id).or_default().insert(other);
                neighbours.entry(other).or_default().insert(territory.id);
            }
        }

        Ok(Map {
            territories,
            coasts,
            neighbours,
        })
    }

    pub fn territory(&self, id: TerritoryId) -> Option<&'a Territory> {
        self.territories.get(&id).copied()
    }

    pub fn coast(&self, id: CoastId) -> Option<&'a NamedCoast> {
        self.coasts.get(&id).copied()
    }

    pub fn territories(&self) -> impl Iterator<Item = &'a Territory> + '_ {
        self.territories.values().copied()
    }

    pub fn are_neighbours(&self, a: TerritoryId, b: TerritoryId) -> bool {
        self.neighbours
            .get(&a)
            .map(|set| set.contains(&b))
            .unwrap_or(false)
    }

    /// Whether a piece of the given type can travel directly from one
    /// position to another, honouring terrain, shared-coast edges, and
    /// named-coast adjacency.
    pub fn can_reach(&self, piece_type: PieceType, from: Position, to: Position) -> bool {
        match piece_type {
            PieceType::Army => self.army_can_reach(from.territory, to.territory),
            PieceType::Fleet => self.fleet_can_reach(from, to),
        }
    }

    /// Whether a piece can travel directly to *any* position within the
    /// target territory. Used for support reach, where assisting one coast
    /// of a territory assists the whole territory.
    pub fn can_reach_territory(
        &self,
        piece_type: PieceType,
        from: Position,
        to: TerritoryId,
    ) -> bool {
        let target = match self.territory(to) {
            Some(t) => t,
            None => return false,
        };

        if target.has_multiple_coasts() && piece_type == PieceType::Fleet {
            target
                .named_coasts
                .iter()
                .any(|c| self.can_reach(piece_type, from, Position::new(to, c.id)))
        } else {
            self.can_reach(piece_type, from, Position::new(to, None))
        }
    }

    fn army_can_reach(&self, from: TerritoryId, to: TerritoryId) -> bool {
        if !self.are_neighbours(from, to) || from == to {
            return false;
        }

        self.territory(to)
            .map(|t| t.terrain != Terrain::Sea)
            .unwrap_or(false)
    }

    fn fleet_can_reach(&self, from: Position, to: Position) -> bool {
        if from.territory == to.territory {
            return false;
        }

        let (origin, target) = match (self.territory(from.territory), self.territory(to.territory))
        {
            (Some(o), Some(t)) => (o, t),
            _ => return false,
        };

        // The side standing on (or moving to) a named coast is constrained
        // to that coast's own neighbour list.
        if let Some(coast) = from.coast.and_then(|c| self.coast(c)) {
            if !coast.neighbours.contains(&to.territory) {
                return false;
            }
        } else {
            if !self.are_neighbours(from.territory, to.territory) {
                return false;
            }

            // Fleet movement between two plain coastal territories needs a
            // shared coast edge, not just land adjacency.
            if origin.terrain == Terrain::Coastal
                && target.terrain == Terrain::Coastal
                && !target.has_multiple_coasts()
                && !origin.shared_coasts.contains(&to.territory)
            {
                return false;
            }
        }

        match target.terrain {
            Terrain::Inland => false,
            Terrain::Sea => to.coast.is_none(),
            Terrain::Coastal => {
                if target.has_multiple_coasts() {
                    match to.coast.and_then(|c| self.coast(c)) {
                        Some(coast) => {
                            coast.parent_id == to.territory
                                && coast.neighbours.contains(&from.territory)
                        }
                        None => false,
                    }
                } else {
                    to.coast.is_none()
                }
            }
        }
    }

    /// The undifferentiated territory graph, used for distance calculations
    /// in the civil-disorder disband rule.
    pub fn to_graph(&self) -> UnGraphMap<TerritoryId, ()> {
        let mut graph = UnGraphMap::new();
        for &id in self.territories.keys() {
            graph.add_node(id);
        }

        for (&id, others) in &self.neighbours {
            for &other in others {
                graph.add_edge(id, other, ());
            }
        }

        graph
    }
}
