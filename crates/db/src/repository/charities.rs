//! Charity profile lookup.

use tracing::debug;

use crate::{
    models::{CharityArtworkRow, CharityProfile},
    DbError, DbPool,
};

/// Fetch a charity together with every artwork whose `cause_id` points at it.
///
/// A single left join from `users` through `artworks` to the artist's
/// `users` row, so a charity without artworks still yields one row.
/// Nested artworks are ordered by id. Returns `DbError::NotFound` if the id
/// matches no user.
pub async fn get_charity_profile(pool: &DbPool, id: i64) -> Result<CharityProfile, DbError> {
    let rows = sqlx::query_as::<_, CharityArtworkRow>(
        r#"
        SELECT charity.id              AS charity_id,
               charity.username        AS charity_username,
               charity.name            AS charity_name,
               charity.email           AS charity_email,
               charity.profile_picture AS charity_profile_picture,
               charity.about           AS charity_about,
               charity.is_charity      AS charity_is_charity,
               artworks.id           AS artwork_id,
               artworks.name         AS artwork_name,
               artworks.image        AS artwork_image,
               artworks.price        AS artwork_price,
               artworks.is_available AS artwork_is_available,
               artworks.artist_id    AS artwork_artist_id,
               artworks.cause_id     AS artwork_cause_id,
               artist.name AS artist_name
        FROM users AS charity
        LEFT JOIN artworks        ON artworks.cause_id = charity.id
        LEFT JOIN users AS artist ON artist.id = artworks.artist_id
        WHERE charity.id = ?
        ORDER BY artworks.id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    debug!(id, rows = rows.len(), "loaded charity rows");
    CharityProfile::from_rows(id, rows)
}
