//! Edit an existing place: field merges plus photo add/remove.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, SpotzError};
use crate::media::{self, PhotoFile};
use crate::model::{PriceTier, VenueKind};
use crate::store::{BlobStore, RecordStore};

/// Partial update: `None` leaves the field as it was.
#[derive(Debug, Clone, Default)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub price: Option<PriceTier>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub kind: Option<VenueKind>,
}

/// Apply a partial update, remove the listed photos, and upload new ones.
///
/// Validation (including the rename collision check) happens before any
/// blob traffic. Removed photo URLs leave the record even when the blob
/// delete fails; the failure is reported as a warning. If the record write
/// fails, the photos uploaded during this call are deleted again and the
/// catalog keeps the pre-update value.
pub fn run<R: RecordStore, B: BlobStore>(
    catalog: &mut Catalog<R, B>,
    id: &Uuid,
    update: PlaceUpdate,
    new_files: &[PhotoFile],
    photos_to_remove: &[String],
) -> Result<CmdResult> {
    let mut working = helpers::resolve(catalog, id)?;

    if let Some(name) = &update.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpotzError::Validation(
                "place name cannot be empty".to_string(),
            ));
        }
        if catalog.is_name_taken(name, Some(id)) {
            return Err(SpotzError::DuplicateName(name.to_string()));
        }
        working.name = name.to_string();
    }
    if let Some(cuisine) = &update.cuisine {
        working.cuisine = cuisine.trim().to_string();
    }
    if let Some(price) = update.price {
        working.price = Some(price);
    }
    if let Some(location) = &update.location {
        working.location = location.trim().to_string();
    }
    if let Some(address) = &update.address {
        let address = address.trim();
        if address.is_empty() {
            return Err(SpotzError::Validation(
                "address cannot be empty".to_string(),
            ));
        }
        working.address = address.to_string();
    }
    if let Some(kind) = update.kind {
        working.kind = kind;
    }

    let mut warnings = Vec::new();

    // Removals first. The URL leaves the record even if the blob delete
    // fails.
    if !photos_to_remove.is_empty() {
        for (url, err) in media::detach(catalog.blobs(), photos_to_remove) {
            warnings.push(format!("Photo delete failed ({}): {}", url, err));
        }
        working.photos.retain(|url| !photos_to_remove.contains(url));
    }

    let outcome = media::attach(catalog.blobs(), &working.name, new_files);
    for (file, err) in &outcome.failures {
        warnings.push(format!("Photo upload failed ({}): {}", file, err));
    }
    working.photos.extend(outcome.urls.iter().cloned());

    let saved = match catalog.save(&working) {
        Ok(saved) => saved,
        Err(err) => {
            media::purge_all(catalog.blobs(), &outcome.urls);
            return Err(err);
        }
    };

    let mut result = CmdResult::new().with_affected_places(vec![saved.clone()]);
    for warning in warnings {
        result.add_message(CmdMessage::warning(warning));
    }
    result.add_message(CmdMessage::success(format!(
        "Place updated: {}",
        saved.name
    )));
    Ok(result)
}
