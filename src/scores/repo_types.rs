use serde::Serialize;
use sqlx::FromRow;

/// Row of the legacy `scores` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LegacyScore {
    pub id: i32,
    pub player: String,
    pub score: i64,
}
