//! Record store backed by a single JSON file.
//!
//! The whole catalog lives in one pretty-printed array, the layout the very
//! first release used and every one since has kept. Reads load the full file;
//! writes rewrite it atomically (temp file + rename in the same directory).

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::RecordStore;
use crate::error::{Result, SpotzError};
use crate::model::RawRecord;

pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<RawRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<RawRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn persist(&self, records: &[RawRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(records)?;

        // Atomic write: the temp file lands in the same directory so the
        // rename cannot cross filesystems.
        let tmp = self
            .path
            .with_file_name(format!(".places-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RecordStore for JsonRecordStore {
    fn list_all(&self) -> Result<Vec<RawRecord>> {
        self.load()
    }

    fn upsert(&mut self, mut record: RawRecord) -> Result<RawRecord> {
        let mut records = self.load()?;
        match record.id.clone() {
            None => {
                record.id = Some(Uuid::new_v4().to_string());
                records.push(record.clone());
            }
            Some(id) => {
                match records.iter_mut().find(|r| r.id.as_deref() == Some(id.as_str())) {
                    Some(slot) => *slot = record.clone(),
                    // A set id that matches nothing is a stale edit, not an
                    // insert. Nothing is written.
                    None => {
                        let parsed = Uuid::parse_str(&id).map_err(|_| {
                            SpotzError::MalformedRecord(format!("invalid record id: '{}'", id))
                        })?;
                        return Err(SpotzError::NotFound(parsed));
                    }
                }
            }
        }
        self.persist(&records)?;
        Ok(record)
    }

    fn delete_by_id(&mut self, id: &Uuid) -> Result<()> {
        let mut records = self.load()?;
        let target = id.to_string();
        let before = records.len();
        records.retain(|r| r.id.as_deref() != Some(target.as_str()));
        if records.len() == before {
            return Err(SpotzError::NotFound(*id));
        }
        self.persist(&records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonRecordStore {
        JsonRecordStore::new(dir.path().join("places.json"))
    }

    fn named(name: &str) -> RawRecord {
        RawRecord {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn list_all_on_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn upsert_assigns_id_on_insert() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let stored = store.upsert(named("Lou's")).unwrap();
        let id = stored.id.expect("insert should assign an id");
        Uuid::parse_str(&id).expect("assigned id should be a uuid");

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(id));
    }

    #[test]
    fn upsert_with_id_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let a = store.upsert(named("A")).unwrap();
        store.upsert(named("B")).unwrap();

        let mut edited = a.clone();
        edited.cuisine = Some("Diner".to_string());
        store.upsert(edited).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name.as_deref(), Some("A"));
        assert_eq!(all[0].cuisine.as_deref(), Some("Diner"));
        assert_eq!(all[1].name.as_deref(), Some("B"));
    }

    #[test]
    fn delete_by_id_removes_record() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let a = store.upsert(named("A")).unwrap();
        let id = Uuid::parse_str(a.id.as_deref().unwrap()).unwrap();
        store.delete_by_id(&id).unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let id = Uuid::new_v4();
        match store.delete_by_id(&id) {
            Err(SpotzError::NotFound(err_id)) => assert_eq!(err_id, id),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn upsert_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.upsert(named("A")).unwrap();

        let gone = Uuid::new_v4();
        let mut edit = named("B");
        edit.id = Some(gone.to_string());
        match store.upsert(edit) {
            Err(SpotzError::NotFound(err_id)) => assert_eq!(err_id, gone),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        // The edit left no trace on disk.
        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name.as_deref(), Some("A"));
    }

    #[test]
    fn upsert_unmatched_invalid_id_is_malformed() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let mut edit = named("A");
        edit.id = Some("not-a-uuid".to_string());
        match store.upsert(edit) {
            Err(SpotzError::MalformedRecord(msg)) => assert!(msg.contains("not-a-uuid")),
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn file_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.upsert(named("Lou's")).unwrap();

        let content = fs::read_to_string(dir.path().join("places.json")).unwrap();
        assert!(content.contains("\n  "));
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.upsert(named("A")).unwrap();
        store.upsert(named("B")).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn survives_reopening() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("places.json");
        let id = {
            let mut store = JsonRecordStore::new(&path);
            store.upsert(named("Lou's")).unwrap().id
        };
        let store = JsonRecordStore::new(&path);
        assert_eq!(store.list_all().unwrap()[0].id, id);
    }
}
