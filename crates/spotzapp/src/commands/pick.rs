//! Pick tonight's place at random.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{apply_filters, PlaceFilter};
use crate::picker::Picker;
use crate::store::{BlobStore, RecordStore};

/// Draw from the filtered pool. Passing criteria replaces the picker's
/// active ones; passing `None` re-rolls with whatever was set before.
pub fn run<R: RecordStore, B: BlobStore>(
    catalog: &Catalog<R, B>,
    picker: &mut Picker,
    criteria: Option<PlaceFilter>,
) -> Result<CmdResult> {
    if let Some(criteria) = criteria {
        picker.set_criteria(criteria);
    }
    let pool_size = apply_filters(catalog.places(), picker.criteria()).len();
    let picked = picker.pick(catalog.places())?.clone();

    let mut result = CmdResult::new();
    result.add_message(CmdMessage::info(format!(
        "{} place(s) match the current filters",
        pool_size
    )));
    result.add_message(CmdMessage::success(format!(
        "Tonight's pick: {}",
        picked.name
    )));
    Ok(result.with_affected_places(vec![picked]))
}
