use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of the legacy score submission.
#[derive(Debug, Deserialize)]
pub struct LegacyScoreRequest {
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
}

impl LegacyScoreRequest {
    /// An empty player name or a zero score counts as missing.
    pub fn validate(self) -> Result<(String, i64), ApiError> {
        match (self.player, self.score) {
            (Some(player), Some(score)) if !player.is_empty() && score != 0 => Ok((player, score)),
            _ => Err(ApiError::bad_request("Missing data")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedScoreResponse {
    pub success: bool,
    pub id: i32,
}
