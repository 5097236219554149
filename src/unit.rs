use crate::geo::Terrain;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a military piece. Armies are convoyable land-based pieces;
/// fleets are sea-going pieces which are able to convoy armies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    /// A land-based piece which can traverse inland and coastal territories.
    Army,

    /// A sea-based piece which can traverse sea and coastal territories.
    Fleet,
}

impl PieceType {
    /// Whether a piece of this type is ever allowed to sit in a territory
    /// of the given terrain.
    pub fn can_occupy(self, terrain: Terrain) -> bool {
        match terrain {
            Terrain::Coastal => true,
            Terrain::Inland => self == PieceType::Army,
            Terrain::Sea => self == PieceType::Fleet,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PieceType::Army => write!(f, "A"),
            PieceType::Fleet => write!(f, "F"),
        }
    }
}
