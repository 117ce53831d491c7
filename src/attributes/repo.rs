use anyhow::Context;
use sqlx::PgPool;

use super::{
    dto::AttributeValues,
    repo_types::{PlayerRow, UpdateOutcome},
};

/// Insert an attribute row for `player_id`. The player is not checked for
/// existence; `db_attributes.player_id` carries no foreign key.
pub async fn insert(db: &PgPool, player_id: i32, values: &AttributeValues) -> anyhow::Result<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO db_attributes (player_id, score, coin, green_skin, red_skin, blue_skin)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(player_id)
    .bind(values.score)
    .bind(values.coin)
    .bind(values.green_skin)
    .bind(values.red_skin)
    .bind(values.blue_skin)
    .fetch_one(db)
    .await
    .context("insert attributes")?;
    Ok(id)
}

/// Overwrite every attribute row of `player_id`.
///
/// The player lookup holds a share lock on the `db_user` row for the duration
/// of the transaction, so the existence check and the write see the same state.
pub async fn update_for_player(
    db: &PgPool,
    player_id: i32,
    values: &AttributeValues,
) -> anyhow::Result<UpdateOutcome> {
    let mut tx = db.begin().await.context("begin tx")?;

    let player = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT id
          FROM db_user
         WHERE id = $1
           FOR SHARE
        "#,
    )
    .bind(player_id)
    .fetch_optional(&mut *tx)
    .await
    .context("lock player")?;

    if player.is_none() {
        tx.rollback().await.context("rollback tx")?;
        return Ok(UpdateOutcome::PlayerNotFound);
    }

    let result = sqlx::query(
        r#"
        UPDATE db_attributes
           SET score = $2,
               coin = $3,
               green_skin = $4,
               red_skin = $5,
               blue_skin = $6
         WHERE player_id = $1
        "#,
    )
    .bind(player_id)
    .bind(values.score)
    .bind(values.coin)
    .bind(values.green_skin)
    .bind(values.red_skin)
    .bind(values.blue_skin)
    .execute(&mut *tx)
    .await
    .context("update attributes")?;

    if result.rows_affected() == 0 {
        tx.rollback().await.context("rollback tx")?;
        return Ok(UpdateOutcome::NoAttributes);
    }

    tx.commit().await.context("commit tx")?;
    Ok(UpdateOutcome::Updated {
        rows: result.rows_affected(),
    })
}

/// User joined with their oldest attribute row.
pub async fn find_player_row(db: &PgPool, user_id: i32) -> anyhow::Result<Option<PlayerRow>> {
    let row = sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT u.id, u.username, a.player_id, a.score, a.coin,
               a.green_skin, a.red_skin, a.blue_skin
          FROM db_user u
          JOIN db_attributes a ON a.player_id = u.id
         WHERE u.id = $1
         ORDER BY a.id ASC
         LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("fetch user data")?;
    Ok(row)
}
