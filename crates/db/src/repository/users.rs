//! User listings, split by the `is_charity` flag.

use crate::{models::UserRow, DbError, DbPool};

/// Return every user who is not a charity.
pub async fn list_artists(pool: &DbPool) -> Result<Vec<UserRow>, DbError> {
    list_by_role(pool, false).await
}

/// Return every user flagged as a charity.
pub async fn list_charities(pool: &DbPool) -> Result<Vec<UserRow>, DbError> {
    list_by_role(pool, true).await
}

async fn list_by_role(pool: &DbPool, is_charity: bool) -> Result<Vec<UserRow>, DbError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, name, email, profile_picture, about, is_charity
        FROM users
        WHERE is_charity = ?
        "#,
    )
    .bind(is_charity)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
