use anyhow::Context;
use sqlx::PgPool;

use crate::auth::repo_types::User;

impl User {
    /// Find a user by exact username.
    pub async fn find_by_username(db: &PgPool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash
            FROM db_user
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
        .context("find user by username")?;
        Ok(user)
    }

    /// Insert a new user and return the generated id, if the database
    /// reported one.
    pub async fn create(
        db: &PgPool,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<i32>> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO db_user (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(db)
        .await
        .context("insert user")?;
        Ok(id)
    }
}
