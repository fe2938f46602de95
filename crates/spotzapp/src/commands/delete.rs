//! Delete a place and every photo it owns.

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::media;
use crate::store::{BlobStore, RecordStore};

/// Remove the place's photos from the blob store, then the record itself.
///
/// The purge always runs and always runs first. Blobs that fail to delete
/// are reported as warnings and the deletion continues.
pub fn run<R: RecordStore, B: BlobStore>(
    catalog: &mut Catalog<R, B>,
    id: &Uuid,
) -> Result<CmdResult> {
    let place = helpers::resolve(catalog, id)?;

    let mut result = CmdResult::new();
    for (url, err) in media::purge_all(catalog.blobs(), &place.photos) {
        result.add_message(CmdMessage::warning(format!(
            "Photo delete failed ({}): {}",
            url, err
        )));
    }

    catalog.remove(id)?;

    result.add_message(CmdMessage::success(format!("Place deleted: {}", place.name)));
    Ok(result.with_affected_places(vec![place]))
}
