//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`,
//! except artwork creation which reports through [`CreateOutcome`].
//! [`Repository`] binds one pool so callers don't thread it through.

pub mod artworks;
pub mod charities;
pub mod users;

use crate::{
    models::{ArtworkDetail, ArtworkSummary, CharityProfile, CreateOutcome, NewArtwork, UserRow},
    DbError, DbPool,
};

/// The data-access layer bound to a single pool.
///
/// Cloning is cheap; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn list_artworks(&self) -> Result<Vec<ArtworkSummary>, DbError> {
        artworks::list_artworks(&self.pool).await
    }

    pub async fn get_artwork_detail(&self, id: i64) -> Result<ArtworkDetail, DbError> {
        artworks::get_artwork_detail(&self.pool, id).await
    }

    pub async fn get_charity_profile(&self, id: i64) -> Result<CharityProfile, DbError> {
        charities::get_charity_profile(&self.pool, id).await
    }

    pub async fn create_artwork(&self, artwork: NewArtwork) -> CreateOutcome {
        artworks::create_artwork(&self.pool, artwork).await
    }

    pub async fn mark_sold(&self, ids: &[i64]) -> Result<u64, DbError> {
        artworks::mark_sold(&self.pool, ids).await
    }

    pub async fn list_artists(&self) -> Result<Vec<UserRow>, DbError> {
        users::list_artists(&self.pool).await
    }

    pub async fn list_charities(&self) -> Result<Vec<UserRow>, DbError> {
        users::list_charities(&self.pool).await
    }
}
