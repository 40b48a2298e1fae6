//! Row structs read from the store and the view models built from them.
//!
//! Row structs mirror the aliased column lists of the repository queries.
//! The `users` table appears twice in most joins (once as the artist, once as
//! the cause), so joined rows keep each role in its own prefixed field group.
//! View models serialize with camelCase keys, the shape the web layer expects.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::format::capitalize_first_letter;
use crate::DbError;

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A raw `users` row. Artists and charities share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub about: Option<String>,
    pub is_charity: bool,
}

// ---------------------------------------------------------------------------
// artworks joined to users as artist and cause
// ---------------------------------------------------------------------------

/// One artwork with its artist and cause resolved through two aliases of `users`.
///
/// `description` and the artist's profile fields are only selected by the
/// queries that need them, hence optional.
#[derive(Debug, Clone, FromRow)]
pub struct ArtworkJoinRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    pub is_available: bool,
    #[sqlx(default)]
    pub description: Option<String>,

    pub artist_id: i64,
    pub artist_name: String,
    #[sqlx(default)]
    pub artist_profile: Option<String>,
    #[sqlx(default)]
    pub artist_about: Option<String>,

    pub cause_id: i64,
    pub cause_name: String,
}

/// Listing entry. Artist and cause names are capitalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkSummary {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_profile: Option<String>,
    pub artist_about: Option<String>,
    pub cause_id: i64,
    pub cause_name: String,
    pub is_available: bool,
}

impl From<ArtworkJoinRow> for ArtworkSummary {
    fn from(row: ArtworkJoinRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            price: row.price,
            artist_id: row.artist_id,
            artist_name: capitalize_first_letter(&row.artist_name),
            artist_profile: row.artist_profile,
            artist_about: row.artist_about,
            cause_id: row.cause_id,
            cause_name: capitalize_first_letter(&row.cause_name),
            is_available: row.is_available,
        }
    }
}

/// Single-artwork view. Names are passed through exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetail {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub cause_id: i64,
    pub cause_name: String,
    pub is_available: bool,
}

impl From<ArtworkJoinRow> for ArtworkDetail {
    fn from(row: ArtworkJoinRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            price: row.price,
            description: row.description,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            cause_id: row.cause_id,
            cause_name: row.cause_name,
            is_available: row.is_available,
        }
    }
}

// ---------------------------------------------------------------------------
// charity profile
// ---------------------------------------------------------------------------

/// One row of the charity left join: the charity's own columns repeated on
/// every row, plus one artwork (and its artist's name) or all-null artwork
/// columns when the charity has none.
#[derive(Debug, Clone, FromRow)]
pub struct CharityArtworkRow {
    pub charity_id: i64,
    pub charity_username: String,
    pub charity_name: String,
    pub charity_email: String,
    pub charity_profile_picture: Option<String>,
    pub charity_about: Option<String>,
    pub charity_is_charity: bool,

    pub artwork_id: Option<i64>,
    pub artwork_name: Option<String>,
    pub artwork_image: Option<String>,
    pub artwork_price: Option<f64>,
    pub artwork_is_available: Option<bool>,
    pub artwork_artist_id: Option<i64>,
    pub artwork_cause_id: Option<i64>,
    pub artist_name: Option<String>,
}

impl CharityArtworkRow {
    /// The artwork carried by this row, if the left join matched one.
    fn into_artwork(self) -> Option<CharityArtwork> {
        Some(CharityArtwork {
            id: self.artwork_id?,
            name: self.artwork_name?,
            image: self.artwork_image,
            price: self.artwork_price?,
            artist_id: self.artwork_artist_id?,
            cause_id: self.artwork_cause_id?,
            artist_name: self.artist_name?,
            is_available: self.artwork_is_available?,
        })
    }
}

/// An artwork nested under a charity profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharityArtwork {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: f64,
    pub artist_id: i64,
    pub cause_id: i64,
    pub artist_name: String,
    pub is_available: bool,
}

/// A charity's own fields and every artwork raising money for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharityProfile {
    pub id: i64,
    pub charity_name: String,
    pub username: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub about: Option<String>,
    pub is_charity: bool,
    pub artworks: Vec<CharityArtwork>,
}

impl CharityProfile {
    /// Fold the rows of one charity into a profile.
    ///
    /// Charity fields come from the first row; every row then contributes
    /// its artwork, skipping the single all-null row a charity without
    /// artworks produces. No rows at all means the id matched no user.
    pub fn from_rows(id: i64, rows: Vec<CharityArtworkRow>) -> Result<Self, DbError> {
        let first = rows.first().ok_or(DbError::NotFound { entity: "user", id })?;

        let profile = Self {
            id: first.charity_id,
            charity_name: first.charity_name.clone(),
            username: first.charity_username.clone(),
            email: first.charity_email.clone(),
            profile_picture: first.charity_profile_picture.clone(),
            about: first.charity_about.clone(),
            is_charity: first.charity_is_charity,
            artworks: rows
                .into_iter()
                .filter_map(CharityArtworkRow::into_artwork)
                .collect(),
        };

        Ok(profile)
    }
}

// ---------------------------------------------------------------------------
// artwork creation
// ---------------------------------------------------------------------------

/// Fields submitted for a new artwork.
///
/// `is_available` is accepted so forms can round-trip, but it is ignored:
/// new artworks are always listed for sale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArtwork {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub artist_id: i64,
    pub cause_id: i64,
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// Result of creating an artwork.
///
/// Creation never returns an error to the caller; a rejected insert (for
/// example an unknown artist or cause) is reported as `Failed` instead.
#[must_use]
#[derive(Debug)]
pub enum CreateOutcome {
    Created(ArtworkDetail),
    Failed(DbError),
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn artwork(&self) -> Option<&ArtworkDetail> {
        match self {
            Self::Created(artwork) => Some(artwork),
            Self::Failed(_) => None,
        }
    }

    pub fn into_result(self) -> Result<ArtworkDetail, DbError> {
        match self {
            Self::Created(artwork) => Ok(artwork),
            Self::Failed(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charity_row(artwork: Option<(i64, &str)>) -> CharityArtworkRow {
        CharityArtworkRow {
            charity_id: 7,
            charity_username: "oxfam_nz".into(),
            charity_name: "oxfam".into(),
            charity_email: "hello@oxfam.test".into(),
            charity_profile_picture: None,
            charity_about: Some("aid".into()),
            charity_is_charity: true,
            artwork_id: artwork.map(|(id, _)| id),
            artwork_name: artwork.map(|(_, name)| name.to_string()),
            artwork_image: None,
            artwork_price: artwork.map(|_| 120.0),
            artwork_is_available: artwork.map(|_| true),
            artwork_artist_id: artwork.map(|_| 3),
            artwork_cause_id: artwork.map(|_| 7),
            artist_name: artwork.map(|_| "bob".to_string()),
        }
    }

    #[test]
    fn profile_without_rows_is_not_found() {
        let err = CharityProfile::from_rows(42, Vec::new()).unwrap_err();
        assert!(matches!(err, DbError::NotFound { entity: "user", id: 42 }));
    }

    #[test]
    fn null_artwork_row_yields_empty_artworks() {
        let profile = CharityProfile::from_rows(7, vec![charity_row(None)]).unwrap();
        assert_eq!(profile.charity_name, "oxfam");
        assert!(profile.artworks.is_empty());
    }

    #[test]
    fn every_artwork_row_becomes_a_nested_entry() {
        let rows = vec![charity_row(Some((1, "dawn"))), charity_row(Some((2, "dusk")))];
        let profile = CharityProfile::from_rows(7, rows).unwrap();
        let names: Vec<_> = profile.artworks.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["dawn", "dusk"]);
        assert!(profile.artworks.iter().all(|a| a.artist_name == "bob"));
    }

    #[test]
    fn summary_capitalizes_but_detail_keeps_raw_names() {
        let row = ArtworkJoinRow {
            id: 1,
            name: "dawn".into(),
            price: 50.0,
            image: None,
            is_available: true,
            description: Some("oil on canvas".into()),
            artist_id: 3,
            artist_name: "bob".into(),
            artist_profile: None,
            artist_about: None,
            cause_id: 7,
            cause_name: "oxfam".into(),
        };

        let summary = ArtworkSummary::from(row.clone());
        assert_eq!(summary.artist_name, "Bob");
        assert_eq!(summary.cause_name, "Oxfam");

        let detail = ArtworkDetail::from(row);
        assert_eq!(detail.artist_name, "bob");
        assert_eq!(detail.cause_name, "oxfam");
    }

    #[test]
    fn view_models_serialize_with_camel_case_keys() {
        let profile = CharityProfile::from_rows(7, vec![charity_row(Some((1, "dawn")))]).unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["charityName"], "oxfam");
        assert_eq!(json["isCharity"], true);
        assert_eq!(json["artworks"][0]["artistName"], "bob");
        assert_eq!(json["artworks"][0]["isAvailable"], true);
    }

    #[test]
    fn new_artwork_accepts_camel_case_form_fields() {
        let new: NewArtwork = serde_json::from_str(
            r#"{"name":"dawn","price":50,"artistId":3,"causeId":7,"isAvailable":false}"#,
        )
        .unwrap();
        assert_eq!(new.artist_id, 3);
        assert_eq!(new.is_available, Some(false));
        assert!(new.description.is_none());
    }
}
