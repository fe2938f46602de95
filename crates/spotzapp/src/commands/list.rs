//! List places matching a filter.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{apply_filters, PlaceFilter};
use crate::model::Place;
use crate::store::{BlobStore, RecordStore};

pub fn run<R: RecordStore, B: BlobStore>(
    catalog: &Catalog<R, B>,
    filter: &PlaceFilter,
) -> Result<CmdResult> {
    let matched: Vec<Place> = apply_filters(catalog.places(), filter)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::new();
    result.add_message(CmdMessage::info(format!(
        "{} of {} places",
        matched.len(),
        catalog.places().len()
    )));
    Ok(result.with_listed_places(matched))
}
