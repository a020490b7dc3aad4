use serde::{Deserialize, Serialize};
use crate::teams::{Team, TeamPair};

/// One saved split. Serialized with the same field names the browser page used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: String,
    #[serde(rename = "date")]
    pub created_at: String,
    pub team_a: Team,
    pub team_b: Team,
}

impl TeamRecord {
    pub fn teams(&self) -> TeamPair {
        TeamPair {
            team_a: self.team_a.clone(),
            team_b: self.team_b.clone(),
        }
    }
}
