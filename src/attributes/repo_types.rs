use serde::Serialize;
use sqlx::FromRow;

/// A user joined with one of their attribute rows. Shared by the user data
/// lookup and the top scores listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlayerRow {
    pub id: i32,
    pub username: String,
    pub player_id: i32,
    pub score: i64,
    pub coin: i64,
    pub green_skin: i16,
    pub red_skin: i16,
    pub blue_skin: i16,
}

/// Result of an attribute update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated { rows: u64 },
    PlayerNotFound,
    NoAttributes,
}
