//! Append and remove review notes.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, SpotzError};
use crate::model::{Note, DEFAULT_REVIEWER};
use crate::store::{BlobStore, RecordStore};

/// Append a note. The comment is required; reviewer falls back to
/// [`DEFAULT_REVIEWER`] and the note is dated today.
pub fn add<R: RecordStore, B: BlobStore>(
    catalog: &mut Catalog<R, B>,
    id: &Uuid,
    comment: &str,
    reviewer: Option<&str>,
    rating: Option<u8>,
) -> Result<CmdResult> {
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(SpotzError::Validation(
            "note comment cannot be empty".to_string(),
        ));
    }
    if let Some(r) = rating {
        if !(1..=5).contains(&r) {
            return Err(SpotzError::Validation(format!(
                "rating must be between 1 and 5, got {}",
                r
            )));
        }
    }

    let mut place = helpers::resolve(catalog, id)?;
    let reviewer = reviewer
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_REVIEWER);
    place.reviews.push(Note {
        rating,
        comment: comment.to_string(),
        reviewer: reviewer.to_string(),
        date: helpers::today(),
    });
    let saved = catalog.save(&place)?;

    let mut result = CmdResult::new();
    result.add_message(CmdMessage::success(format!("Note added to {}", saved.name)));
    Ok(result.with_affected_places(vec![saved]))
}

/// Remove the note at `index` (zero-based, in list order).
pub fn remove<R: RecordStore, B: BlobStore>(
    catalog: &mut Catalog<R, B>,
    id: &Uuid,
    index: usize,
) -> Result<CmdResult> {
    let mut place = helpers::resolve(catalog, id)?;
    if index >= place.reviews.len() {
        return Err(SpotzError::Validation(format!(
            "{} has no note at position {}",
            place.name,
            index + 1
        )));
    }
    place.reviews.remove(index);
    let saved = catalog.save(&place)?;

    let mut result = CmdResult::new();
    result.add_message(CmdMessage::success(format!(
        "Note removed from {}",
        saved.name
    )));
    Ok(result.with_affected_places(vec![saved]))
}
