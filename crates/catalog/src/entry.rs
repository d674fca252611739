//! Catalog entry model and field-level validation.

use serde::{Deserialize, Serialize};

use videoclub_core::{ApiError, EntryId};

pub const TITLE_MAX: usize = 200;
pub const GENRE_MAX: usize = 100;
pub const DIRECTOR_MAX: usize = 100;
pub const POSTER_URL_MAX: usize = 500;
pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2030;

/// One item in the managed collection, as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub year_released: Option<i32>,
    pub duration_minutes: Option<u32>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

/// The mutable fields of an entry, used as the create/update request body.
///
/// The server assigns `id`; it is deliberately absent here so the client can
/// never transmit one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_released: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl EntryDraft {
    /// Check every field constraint. A draft that fails here must never be
    /// transmitted.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::validation("title is required"));
        }
        if self.title.chars().count() > TITLE_MAX {
            return Err(ApiError::validation(format!(
                "title must be at most {TITLE_MAX} characters"
            )));
        }

        if let Some(genre) = &self.genre {
            if genre.chars().count() > GENRE_MAX {
                return Err(ApiError::validation(format!(
                    "genre must be at most {GENRE_MAX} characters"
                )));
            }
        }

        if let Some(director) = &self.director {
            if director.chars().count() > DIRECTOR_MAX {
                return Err(ApiError::validation(format!(
                    "director must be at most {DIRECTOR_MAX} characters"
                )));
            }
        }

        if let Some(year) = self.year_released {
            if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
                return Err(ApiError::validation(format!(
                    "year must be between {YEAR_MIN} and {YEAR_MAX}"
                )));
            }
        }

        if let Some(minutes) = self.duration_minutes {
            if minutes == 0 {
                return Err(ApiError::validation("duration must be positive"));
            }
        }

        if let Some(rating) = self.rating {
            if !(0.0..=10.0).contains(&rating) {
                return Err(ApiError::validation("rating must be between 0.0 and 10.0"));
            }
        }

        if let Some(url) = &self.poster_url {
            if url.chars().count() > POSTER_URL_MAX {
                return Err(ApiError::validation(format!(
                    "poster URL must be at most {POSTER_URL_MAX} characters"
                )));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ApiError::validation("poster URL must start with http:// or https://"));
            }
        }

        Ok(())
    }
}

impl From<CatalogEntry> for EntryDraft {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            title: entry.title,
            description: entry.description,
            genre: entry.genre,
            director: entry.director,
            year_released: entry.year_released,
            duration_minutes: entry.duration_minutes,
            rating: entry.rating,
            poster_url: entry.poster_url,
        }
    }
}
