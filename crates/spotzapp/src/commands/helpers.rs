//! Shared helpers for command implementations.

use chrono::Local;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{Result, SpotzError};
use crate::model::{Place, DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::store::{BlobStore, RecordStore};

/// Today's calendar date, for visit dates and note dates.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Full timestamp, for creation times.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Clone the place with the given id out of the catalog, or fail with
/// [`SpotzError::NotFound`].
pub fn resolve<R: RecordStore, B: BlobStore>(catalog: &Catalog<R, B>, id: &Uuid) -> Result<Place> {
    catalog
        .get(id)
        .cloned()
        .ok_or(SpotzError::NotFound(*id))
}
