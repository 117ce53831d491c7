use anyhow::Context;
use sqlx::PgPool;

use super::repo_types::LegacyScore;
use crate::attributes::repo_types::PlayerRow;

pub const TOP_SCORES_LIMIT: i64 = 5;
pub const LEGACY_SCORES_LIMIT: i64 = 20;

/// Highest scores across all attribute rows, joined with their user.
pub async fn top_scores(db: &PgPool, limit: i64) -> anyhow::Result<Vec<PlayerRow>> {
    let rows = sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT u.id, u.username, a.player_id, a.score, a.coin,
               a.green_skin, a.red_skin, a.blue_skin
          FROM db_attributes a
          JOIN db_user u ON u.id = a.player_id
         ORDER BY a.score DESC, a.id ASC
         LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await
    .context("list top scores")?;
    Ok(rows)
}

pub async fn insert_legacy(db: &PgPool, player: &str, score: i64) -> anyhow::Result<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO scores (player, score)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(player)
    .bind(score)
    .fetch_one(db)
    .await
    .context("insert legacy score")?;
    Ok(id)
}

pub async fn list_legacy(db: &PgPool, limit: i64) -> anyhow::Result<Vec<LegacyScore>> {
    let rows = sqlx::query_as::<_, LegacyScore>(
        r#"
        SELECT id, player, score
          FROM scores
         ORDER BY score DESC, id ASC
         LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await
    .context("list legacy scores")?;
    Ok(rows)
}
