use serde::{Deserialize, Serialize};
use crate::form::Position;

/// A name resolved to a position, only ever produced by a split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
}

/// One player per position, in position order
pub type Team = Vec<Player>;

/// The two teams produced by one split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPair {
    pub team_a: Team,
    pub team_b: Team,
}
