use serde::Serialize;
use sqlx::FromRow;

/// Row of `db_user`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 PHC string, never sent to clients
}
