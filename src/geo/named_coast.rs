use crate::geo::territory::TerritoryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable integer identifier of a named coast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoastId(pub u32);

impl fmt::Display for CoastId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "coast #{}", self.0)
    }
}

/// A distinct coast of a multi-coast territory, with its own adjacency.
///
/// Modelling coasts as first-class entities (rather than suffixes on
/// territory names) keeps reachability questions answerable from the map
/// alone: a fleet attached to a coast can reach exactly the territories in
/// that coast's neighbour list, in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCoast {
    pub id: CoastId,
    pub name: String,
    pub parent_id: TerritoryId,
    pub neighbours: Vec<TerritoryId>,
}
