//! Reload the catalog from the record store.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BlobStore, RecordStore};

/// Throw away the in-memory list and reload every record, reporting each
/// skipped (malformed) record as a warning.
pub fn run<R: RecordStore, B: BlobStore>(catalog: &mut Catalog<R, B>) -> Result<CmdResult> {
    let report = catalog.reload()?;

    let mut result = CmdResult::new().with_listed_places(catalog.places().to_vec());
    for reason in &report.skipped {
        result.add_message(CmdMessage::warning(format!("Skipped a record: {}", reason)));
    }
    result.add_message(CmdMessage::success(format!(
        "Loaded {} places",
        report.loaded
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::RawRecord;
    use crate::store::memory::{fixtures, MemBlobStore, MemRecordStore};

    #[test]
    fn loads_every_well_formed_record() {
        let records = vec![
            fixtures::raw_record("Alinea"),
            fixtures::legacy_record("Lou's"),
        ];
        let mut catalog = Catalog::new(MemRecordStore::with_records(records), MemBlobStore::new());

        let result = run(&mut catalog).unwrap();
        assert_eq!(result.listed_places.len(), 2);
        assert_eq!(result.messages.last().unwrap().content, "Loaded 2 places");
    }

    #[test]
    fn malformed_records_are_skipped_with_warnings() {
        let mut bad_id = fixtures::raw_record("Ghost");
        bad_id.id = Some("not-a-uuid".to_string());
        let records = vec![fixtures::raw_record("Alinea"), RawRecord::default(), bad_id];
        let mut catalog = Catalog::new(MemRecordStore::with_records(records), MemBlobStore::new());

        let result = run(&mut catalog).unwrap();
        assert_eq!(result.listed_places.len(), 1);
        let warnings: Vec<&CmdMessage> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.content.contains("Skipped a record")));
        assert_eq!(result.messages.last().unwrap().content, "Loaded 1 places");
    }
}
