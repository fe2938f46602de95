//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all spotz operations, regardless of the UI in
//! front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., converting display indexes to UUIDs)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, stderr, or file formatting
//! - **Presentation**: it returns data structures, not strings
//!
//! ## Generic Over the Stores
//!
//! `SpotzApi<R: RecordStore, B: BlobStore>` is generic over both backends:
//! - Production: `SpotzApi<JsonRecordStore, DirBlobStore>`
//! - Testing: `SpotzApi<MemRecordStore, MemBlobStore>`
//!
//! This allows exercising every operation without touching the filesystem.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::commands;
use crate::error::{Result, SpotzError};
use crate::filter::PlaceFilter;
use crate::media::PhotoFile;
use crate::model::{Place, PriceTier};
use crate::picker::Picker;
use crate::store::{BlobStore, RecordStore};

/// The main API facade for spotz operations.
///
/// Owns the catalog and the pick state. All UI clients (CLI, web, etc.)
/// should interact through this API.
pub struct SpotzApi<R: RecordStore, B: BlobStore> {
    catalog: Catalog<R, B>,
    picker: Picker,
}

impl<R: RecordStore, B: BlobStore> SpotzApi<R, B> {
    pub fn new(records: R, blobs: B) -> Self {
        Self::with_picker(records, blobs, Picker::new())
    }

    /// Like [`SpotzApi::new`] with a caller-supplied picker, so tests can
    /// seed the random draws.
    pub fn with_picker(records: R, blobs: B, picker: Picker) -> Self {
        Self {
            catalog: Catalog::new(records, blobs),
            picker,
        }
    }

    pub fn refresh(&mut self) -> Result<commands::CmdResult> {
        commands::refresh::run(&mut self.catalog)
    }

    pub fn create_place(
        &mut self,
        fields: commands::NewPlace,
        files: &[PhotoFile],
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.catalog, fields, files)
    }

    pub fn update_place(
        &mut self,
        id: &Uuid,
        update: commands::PlaceUpdate,
        new_files: &[PhotoFile],
        photos_to_remove: &[String],
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.catalog, id, update, new_files, photos_to_remove)
    }

    pub fn delete_place(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalog, id)
    }

    pub fn toggle_favorite(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::marking::toggle_favorite(&mut self.catalog, id)
    }

    pub fn toggle_visited(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::marking::toggle_visited(&mut self.catalog, id)
    }

    pub fn add_note(
        &mut self,
        id: &Uuid,
        comment: &str,
        reviewer: Option<&str>,
        rating: Option<u8>,
    ) -> Result<commands::CmdResult> {
        commands::notes::add(&mut self.catalog, id, comment, reviewer, rating)
    }

    pub fn remove_note(&mut self, id: &Uuid, index: usize) -> Result<commands::CmdResult> {
        commands::notes::remove(&mut self.catalog, id, index)
    }

    pub fn list_places(&self, filter: &PlaceFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, filter)
    }

    pub fn pick(&mut self, criteria: Option<PlaceFilter>) -> Result<commands::CmdResult> {
        commands::pick::run(&self.catalog, &mut self.picker, criteria)
    }

    /// The remembered pick, if it still exists and still matches the
    /// picker's criteria.
    pub fn current_pick(&self) -> Option<&Place> {
        self.picker.current(self.catalog.places())
    }

    pub fn places(&self) -> &[Place] {
        self.catalog.places()
    }

    pub fn cuisines(&self) -> Vec<String> {
        self.catalog.distinct_cuisines()
    }

    pub fn locations(&self) -> Vec<String> {
        self.catalog.distinct_locations()
    }

    pub fn prices(&self) -> Vec<PriceTier> {
        self.catalog.distinct_prices()
    }

    /// Convert a 1-based display index (list order) into the place's id.
    ///
    /// Records written before ids existed are listable but not addressable;
    /// selecting one reports how to fix it.
    pub fn resolve_index(&self, index: usize) -> Result<Uuid> {
        let places = self.catalog.places();
        if index == 0 || index > places.len() {
            return Err(SpotzError::Validation(format!(
                "no place at index {}",
                index
            )));
        }
        let place = &places[index - 1];
        place.id.ok_or_else(|| {
            SpotzError::Validation(format!(
                "'{}' has no id (old record); edit the record file directly",
                place.name
            ))
        })
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NewPlace, PlaceUpdate};
