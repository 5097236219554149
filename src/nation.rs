use serde::{Deserialize, Serialize};
use std::fmt;

/// An actor in the game. Nations own pieces, issue orders, and control
/// supply centers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nation(String);

impl Nation {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Nation {
    fn from(s: &str) -> Self {
        Nation(String::from(s))
    }
}

impl From<String> for Nation {
    fn from(s: String) -> Self {
        Nation(s)
    }
}
