//! Add a new place to the catalog.

use crate::catalog::Catalog;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, SpotzError};
use crate::media::{self, PhotoFile};
use crate::model::{Place, PriceTier, VenueKind};
use crate::store::{BlobStore, RecordStore};

/// Caller-supplied fields for a new place. Everything else (id, flags,
/// dates, photos) is decided here.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub name: String,
    pub cuisine: String,
    pub price: Option<PriceTier>,
    pub location: String,
    pub address: String,
    pub kind: VenueKind,
    pub visited: bool,
}

/// Validate, upload any photos, and persist the new place.
///
/// Photo uploads that fail are reported as warnings and the place is
/// created without them. If the record write itself fails, the uploads
/// that did land are deleted again so no blob is left orphaned.
pub fn run<R: RecordStore, B: BlobStore>(
    catalog: &mut Catalog<R, B>,
    fields: NewPlace,
    files: &[PhotoFile],
) -> Result<CmdResult> {
    let name = fields.name.trim().to_string();
    if name.is_empty() {
        return Err(SpotzError::Validation(
            "place name cannot be empty".to_string(),
        ));
    }
    let address = fields.address.trim().to_string();
    if address.is_empty() {
        return Err(SpotzError::Validation(
            "address cannot be empty".to_string(),
        ));
    }
    if catalog.is_name_taken(&name, None) {
        return Err(SpotzError::DuplicateName(name));
    }

    let outcome = media::attach(catalog.blobs(), &name, files);

    let place = Place {
        id: None,
        name,
        cuisine: fields.cuisine.trim().to_string(),
        price: fields.price,
        location: fields.location.trim().to_string(),
        address,
        kind: fields.kind,
        favorite: false,
        visited: fields.visited,
        visited_date: if fields.visited {
            Some(helpers::today())
        } else {
            None
        },
        photos: outcome.urls.clone(),
        reviews: Vec::new(),
        added_date: helpers::timestamp(),
    };

    let saved = match catalog.save(&place) {
        Ok(saved) => saved,
        Err(err) => {
            // The record never landed, so the uploads must not outlive it.
            media::purge_all(catalog.blobs(), &outcome.urls);
            return Err(err);
        }
    };

    let mut result = CmdResult::new().with_affected_places(vec![saved.clone()]);
    for (file, err) in &outcome.failures {
        result.add_message(CmdMessage::warning(format!(
            "Photo upload failed ({}): {}",
            file, err
        )));
    }
    result.add_message(CmdMessage::success(format!("Place added: {}", saved.name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::{MemBlobStore, MemRecordStore};

    fn empty_catalog() -> Catalog<MemRecordStore, MemBlobStore> {
        let mut catalog = Catalog::new(MemRecordStore::new(), MemBlobStore::new());
        catalog.reload().unwrap();
        catalog
    }

    fn fields(name: &str) -> NewPlace {
        NewPlace {
            name: name.to_string(),
            cuisine: "Italian".to_string(),
            price: Some(PriceTier::Moderate),
            location: "West Loop".to_string(),
            address: "838 W Randolph St".to_string(),
            kind: VenueKind::Restaurant,
            visited: false,
        }
    }

    #[test]
    fn creates_place_with_generated_id_and_defaults() {
        let mut catalog = empty_catalog();
        let result = run(&mut catalog, fields("Monteverde"), &[]).unwrap();

        assert_eq!(result.affected_places.len(), 1);
        let place = &result.affected_places[0];
        assert!(place.id.is_some());
        assert_eq!(place.name, "Monteverde");
        assert!(!place.favorite);
        assert!(!place.visited);
        assert!(place.visited_date.is_none());
        assert!(place.photos.is_empty());
        assert!(place.reviews.is_empty());
        assert!(!place.added_date.is_empty());
        assert_eq!(catalog.places().len(), 1);
    }

    #[test]
    fn name_is_trimmed_before_storing() {
        let mut catalog = empty_catalog();
        let result = run(&mut catalog, fields("  Monteverde  "), &[]).unwrap();
        assert_eq!(result.affected_places[0].name, "Monteverde");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut catalog = empty_catalog();
        match run(&mut catalog, fields("   "), &[]) {
            Err(SpotzError::Validation(msg)) => assert!(msg.contains("name")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert!(catalog.places().is_empty());
    }

    #[test]
    fn empty_address_is_rejected() {
        let mut catalog = empty_catalog();
        let mut f = fields("Monteverde");
        f.address = "   ".to_string();
        match run(&mut catalog, f, &[]) {
            Err(SpotzError::Validation(msg)) => assert!(msg.contains("address")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_name_is_rejected_case_insensitively() {
        let mut catalog = empty_catalog();
        run(&mut catalog, fields("Monteverde"), &[]).unwrap();

        let photo = PhotoFile::new("front.jpg", vec![1, 2, 3]);
        match run(&mut catalog, fields("MONTEVERDE"), &[photo]) {
            Err(SpotzError::DuplicateName(name)) => assert_eq!(name, "MONTEVERDE"),
            other => panic!("Expected DuplicateName, got {:?}", other),
        }
        // Rejected before upload: nothing to clean up.
        assert_eq!(catalog.blobs().blob_count(), 0);
        assert_eq!(catalog.places().len(), 1);
    }

    #[test]
    fn visited_on_create_sets_todays_date() {
        let mut catalog = empty_catalog();
        let mut f = fields("Monteverde");
        f.visited = true;
        let result = run(&mut catalog, f, &[]).unwrap();

        let place = &result.affected_places[0];
        assert!(place.visited);
        assert_eq!(place.visited_date.as_deref(), Some(helpers::today().as_str()));
    }

    #[test]
    fn photos_are_uploaded_and_recorded_in_order() {
        let mut catalog = empty_catalog();
        let files = vec![
            PhotoFile::new("front.jpg", vec![1]),
            PhotoFile::new("menu.png", vec![2]),
        ];
        let result = run(&mut catalog, fields("Monteverde"), &files).unwrap();

        let place = &result.affected_places[0];
        assert_eq!(place.photos.len(), 2);
        assert!(place.photos[0].ends_with(".jpg"));
        assert!(place.photos[1].ends_with(".png"));
        assert_eq!(catalog.blobs().blob_count(), 2);
        for url in &place.photos {
            assert!(catalog.blobs().contains(url));
        }
    }

    #[test]
    fn failed_upload_becomes_warning_and_place_keeps_the_rest() {
        let mut catalog = empty_catalog();
        catalog.blobs().fail_put_matching(".png");
        let files = vec![
            PhotoFile::new("front.jpg", vec![1]),
            PhotoFile::new("menu.png", vec![2]),
        ];
        let result = run(&mut catalog, fields("Monteverde"), &files).unwrap();

        assert_eq!(result.affected_places[0].photos.len(), 1);
        let warnings: Vec<&CmdMessage> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].content.contains("menu.png"));
    }

    #[test]
    fn record_write_failure_purges_fresh_uploads() {
        let mut records = MemRecordStore::new();
        records.set_fail_upserts(true);
        let mut catalog = Catalog::new(records, MemBlobStore::new());
        catalog.reload().unwrap();

        let files = vec![PhotoFile::new("front.jpg", vec![1])];
        match run(&mut catalog, fields("Monteverde"), &files) {
            Err(SpotzError::Storage(_)) => {}
            other => panic!("Expected Storage error, got {:?}", other),
        }
        assert_eq!(catalog.blobs().blob_count(), 0);
        assert!(catalog.places().is_empty());
    }
}
