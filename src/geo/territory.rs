use crate::geo::named_coast::{CoastId, NamedCoast};
use crate::nation::Nation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable integer identifier of a territory, assigned by the map table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerritoryId(pub u32);

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The environment of a territory. Armies cannot operate at sea, and fleets
/// cannot operate inland.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Inland,
    Sea,
    Coastal,
}

/// A spot a piece can stand on: a territory, and for fleets on a
/// multi-coast territory, the specific coast they are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub territory: TerritoryId,
    pub coast: Option<CoastId>,
}

impl Position {
    pub fn new(territory: TerritoryId, coast: impl Into<Option<CoastId>>) -> Self {
        Position {
            territory,
            coast: coast.into(),
        }
    }
}

impl From<TerritoryId> for Position {
    fn from(territory: TerritoryId) -> Self {
        Position::new(territory, None)
    }
}

/// One entry of the map table supplied with the game state.
///
/// Geometry (terrain, adjacency, coasts) is immutable configuration; the
/// `controlled_by` and `contested` fields are the per-turn slice of state
/// that the persistence layer embeds in the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    #[serde(rename = "type")]
    pub terrain: Terrain,
    pub neighbours: Vec<TerritoryId>,
    /// Coastal neighbours a fleet can reach directly. Fleet movement between
    /// two coastal territories requires a shared coast edge, which the
    /// undifferentiated neighbour list cannot express.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_coasts: Vec<TerritoryId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub named_coasts: Vec<NamedCoast>,
    #[serde(default)]
    pub supply_center: bool,
    /// Home-nation tag. Builds are only ever legal in a supply center
    /// carrying the building nation's tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<Nation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled_by: Option<Nation>,
    /// Set when the previous movement phase ended in a standoff here.
    /// Retreats may not enter a contested territory.
    #[serde(default)]
    pub contested: bool,
}

impl Territory {
    /// A fleet entering or occupying this territory must name a coast.
    pub fn has_multiple_coasts(&self) -> bool {
        self.named_coasts.len() >= 2
    }

    /// Whether the given nation may ever build here.
    pub fn is_home_center_of(&self, nation: &Nation) -> bool {
        self.supply_center && self.nationality.as_ref() == Some(nation)
    }
}
