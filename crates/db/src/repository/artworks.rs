//! Artwork reads and writes.
//!
//! Every read joins `artworks` to `users` twice: once aliased as `artist`
//! (through `artist_id`) and once as `cause` (through `cause_id`).

use sqlx::{QueryBuilder, Sqlite};
use tracing::{debug, warn};

use crate::{
    models::{ArtworkDetail, ArtworkJoinRow, ArtworkSummary, CreateOutcome, NewArtwork},
    DbError, DbPool,
};

/// Return every artwork with display-formatted artist and cause names.
///
/// Rows come back in store order.
pub async fn list_artworks(pool: &DbPool) -> Result<Vec<ArtworkSummary>, DbError> {
    let rows = sqlx::query_as::<_, ArtworkJoinRow>(
        r#"
        SELECT artworks.id           AS id,
               artworks.name         AS name,
               artworks.price        AS price,
               artworks.image        AS image,
               artworks.is_available AS is_available,
               artist.id              AS artist_id,
               artist.name            AS artist_name,
               artist.profile_picture AS artist_profile,
               artist.about           AS artist_about,
               cause.id               AS cause_id,
               cause.name             AS cause_name
        FROM artworks
        JOIN users AS artist ON artist.id = artworks.artist_id
        JOIN users AS cause  ON cause.id  = artworks.cause_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    debug!(count = rows.len(), "listed artworks");
    Ok(rows.into_iter().map(ArtworkSummary::from).collect())
}

/// Fetch a single artwork with its description and raw artist/cause names.
///
/// Returns `DbError::NotFound` if no artwork has this id.
pub async fn get_artwork_detail(pool: &DbPool, id: i64) -> Result<ArtworkDetail, DbError> {
    let row = sqlx::query_as::<_, ArtworkJoinRow>(
        r#"
        SELECT artworks.id           AS id,
               artworks.name         AS name,
               artworks.price        AS price,
               artworks.description  AS description,
               artworks.image        AS image,
               artworks.is_available AS is_available,
               artist.id   AS artist_id,
               artist.name AS artist_name,
               cause.id    AS cause_id,
               cause.name  AS cause_name
        FROM artworks
        JOIN users AS artist ON artist.id = artworks.artist_id
        JOIN users AS cause  ON cause.id  = artworks.cause_id
        WHERE artworks.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound { entity: "artwork", id })?;

    Ok(ArtworkDetail::from(row))
}

/// Insert a new artwork, always listed as available, and read it back.
///
/// Failures are logged and reported through [`CreateOutcome::Failed`]
/// rather than returned as an error.
pub async fn create_artwork(pool: &DbPool, artwork: NewArtwork) -> CreateOutcome {
    match insert_and_fetch(pool, &artwork).await {
        Ok(detail) => {
            debug!(id = detail.id, "created artwork");
            CreateOutcome::Created(detail)
        }
        Err(err) => {
            warn!(
                name = %artwork.name,
                artist_id = artwork.artist_id,
                cause_id = artwork.cause_id,
                "failed to create artwork: {err}"
            );
            CreateOutcome::Failed(err)
        }
    }
}

async fn insert_and_fetch(pool: &DbPool, artwork: &NewArtwork) -> Result<ArtworkDetail, DbError> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO artworks (image, name, description, price, artist_id, cause_id, is_available)
        VALUES (?, ?, ?, ?, ?, ?, TRUE)
        RETURNING id
        "#,
    )
    .bind(&artwork.image)
    .bind(&artwork.name)
    .bind(&artwork.description)
    .bind(artwork.price)
    .bind(artwork.artist_id)
    .bind(artwork.cause_id)
    .fetch_one(pool)
    .await?;

    // Separate statement: the insert and this read are not atomic.
    get_artwork_detail(pool, id).await
}

/// Mark every listed artwork as sold in one statement.
///
/// Unknown ids and artworks that are already sold are skipped, so the
/// returned count is the number of artworks that changed state.
pub async fn mark_sold(pool: &DbPool, ids: &[i64]) -> Result<u64, DbError> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new(
        "UPDATE artworks SET is_available = FALSE WHERE is_available = TRUE AND id IN (",
    );
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let result = query.build().execute(pool).await?;
    debug!(requested = ids.len(), updated = result.rows_affected(), "marked artworks sold");
    Ok(result.rows_affected())
}
