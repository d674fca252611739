//! The entry form: create and edit modes over raw string fields.

use std::sync::Arc;

use videoclub_catalog::input::{non_empty, parse_optional_i32, parse_optional_rating, parse_optional_u32};
use videoclub_catalog::{CatalogEntry, EntryDraft};
use videoclub_client::CatalogApi;
use videoclub_core::{ApiError, EntryId};

use super::surface_error;

/// Which submission the form performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntryId),
}

/// State behind the create/edit form.
///
/// Fields hold the raw text exactly as typed; coercion to typed optionals
/// happens at submit time, where a blank field means "unset" and is never
/// coerced to zero.
pub struct EntryFormController {
    catalog: Arc<dyn CatalogApi>,
    mode: FormMode,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub director: String,
    pub year_released: String,
    pub duration_minutes: String,
    pub rating: String,
    pub poster_url: String,
    busy: bool,
    message: Option<String>,
}

impl EntryFormController {
    pub fn create(catalog: Arc<dyn CatalogApi>) -> Self {
        Self::with_mode(catalog, FormMode::Create)
    }

    pub fn edit(catalog: Arc<dyn CatalogApi>, id: EntryId) -> Self {
        Self::with_mode(catalog, FormMode::Edit(id))
    }

    fn with_mode(catalog: Arc<dyn CatalogApi>, mode: FormMode) -> Self {
        Self {
            catalog,
            mode,
            title: String::new(),
            description: String::new(),
            genre: String::new(),
            director: String::new(),
            year_released: String::new(),
            duration_minutes: String::new(),
            rating: String::new(),
            poster_url: String::new(),
            busy: false,
            message: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Pre-fill the fields from the existing entry. Create mode is a no-op.
    pub async fn load(&mut self) {
        let FormMode::Edit(id) = self.mode else {
            return;
        };
        match self.catalog.get(id).await {
            Ok(entry) => {
                self.fill(entry);
                self.message = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, %id, "form preload failed");
                self.message = Some(surface_error(&err, "Failed to load movie"));
            }
        }
    }

    fn fill(&mut self, entry: CatalogEntry) {
        self.title = entry.title;
        self.description = entry.description.unwrap_or_default();
        self.genre = entry.genre.unwrap_or_default();
        self.director = entry.director.unwrap_or_default();
        self.year_released = entry.year_released.map(|y| y.to_string()).unwrap_or_default();
        self.duration_minutes = entry
            .duration_minutes
            .map(|m| m.to_string())
            .unwrap_or_default();
        self.rating = entry.rating.map(|r| r.to_string()).unwrap_or_default();
        self.poster_url = entry.poster_url.unwrap_or_default();
    }

    /// Coerce the raw fields into a draft. Numeric fields left blank come
    /// out unset; garbage input is a validation failure before any request.
    pub fn draft(&self) -> Result<EntryDraft, ApiError> {
        Ok(EntryDraft {
            title: self.title.trim().to_string(),
            description: non_empty(&self.description),
            genre: non_empty(&self.genre),
            director: non_empty(&self.director),
            year_released: parse_optional_i32("year", &self.year_released)?,
            duration_minutes: parse_optional_u32("duration", &self.duration_minutes)?,
            rating: parse_optional_rating(&self.rating)?,
            poster_url: non_empty(&self.poster_url),
        })
    }

    /// Submit the form. Returns the saved entry on success.
    ///
    /// While a submission is in flight the form is busy and further calls
    /// return immediately, so a double-click cannot issue two requests.
    pub async fn submit(&mut self) -> Option<CatalogEntry> {
        if self.busy {
            return None;
        }

        let draft = match self.draft() {
            Ok(draft) => draft,
            Err(err) => {
                self.message = Some(surface_error(&err, "Invalid input"));
                return None;
            }
        };

        self.busy = true;
        let result = match self.mode {
            FormMode::Create => self.catalog.create(&draft).await,
            FormMode::Edit(id) => self.catalog.update(id, &draft).await,
        };
        self.busy = false;

        match result {
            Ok(entry) => {
                self.message = None;
                Some(entry)
            }
            Err(err) => {
                tracing::warn!(error = %err, "form submit failed");
                self.message = Some(surface_error(&err, "Failed to save movie"));
                None
            }
        }
    }
}
