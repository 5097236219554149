//! The map model: territories, named coasts, and adjacency queries.
//!
//! The adjudicator consumes map data as a static table embedded in the game
//! state; this module indexes that table and answers the reachability
//! questions the resolvers ask.

mod map;
mod named_coast;
pub mod standard;
mod territory;

pub use self::map::Map;
pub use self::named_coast::{CoastId, NamedCoast};
pub use self::standard::standard_territories;
pub use self::territory::{Position, Terrain, Territory, TerritoryId};
