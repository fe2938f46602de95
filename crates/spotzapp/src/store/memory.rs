//! In-memory store fakes for testing logic without filesystem I/O.
//!
//! Both fakes support failure injection so command tests can exercise the
//! compensating-action paths: a record write that fails after photos were
//! uploaded, a blob delete that fails during a purge, and so on.

use std::cell::RefCell;
use std::collections::HashMap;

use uuid::Uuid;

use super::{BlobStore, RecordStore};
use crate::error::{Result, SpotzError};
use crate::model::RawRecord;

/// Record store over a plain `Vec`, insertion-ordered like the JSON file.
#[derive(Default)]
pub struct MemRecordStore {
    records: Vec<RawRecord>,
    fail_upserts: bool,
    fail_deletes: bool,
}

impl MemRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Make every subsequent `upsert` fail with a storage error.
    pub fn set_fail_upserts(&mut self, fail: bool) {
        self.fail_upserts = fail;
    }

    /// Make every subsequent `delete_by_id` fail with a storage error.
    pub fn set_fail_deletes(&mut self, fail: bool) {
        self.fail_deletes = fail;
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }
}

impl RecordStore for MemRecordStore {
    fn list_all(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn upsert(&mut self, mut record: RawRecord) -> Result<RawRecord> {
        if self.fail_upserts {
            return Err(SpotzError::Storage(
                "Simulated record write failure".to_string(),
            ));
        }
        match record.id.clone() {
            None => {
                record.id = Some(Uuid::new_v4().to_string());
                self.records.push(record.clone());
            }
            Some(id) => {
                match self
                    .records
                    .iter_mut()
                    .find(|r| r.id.as_deref() == Some(id.as_str()))
                {
                    Some(slot) => *slot = record.clone(),
                    // Same contract as the JSON store: a set id that matches
                    // nothing is a stale edit, not an insert.
                    None => {
                        let parsed = Uuid::parse_str(&id).map_err(|_| {
                            SpotzError::MalformedRecord(format!("invalid record id: '{}'", id))
                        })?;
                        return Err(SpotzError::NotFound(parsed));
                    }
                }
            }
        }
        Ok(record)
    }

    fn delete_by_id(&mut self, id: &Uuid) -> Result<()> {
        if self.fail_deletes {
            return Err(SpotzError::Storage(
                "Simulated record delete failure".to_string(),
            ));
        }
        let target = id.to_string();
        let before = self.records.len();
        self.records
            .retain(|r| r.id.as_deref() != Some(target.as_str()));
        if self.records.len() == before {
            return Err(SpotzError::NotFound(*id));
        }
        Ok(())
    }
}

/// Blob store over a `HashMap`. The trait takes `&self`, so state lives in
/// `RefCell`s, same as the real store's interior filesystem.
#[derive(Default)]
pub struct MemBlobStore {
    blobs: RefCell<HashMap<String, Vec<u8>>>,
    fail_put_patterns: RefCell<Vec<String>>,
    fail_deletes: RefCell<bool>,
}

impl MemBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any `put` whose suggested name contains `pattern`.
    pub fn fail_put_matching(&self, pattern: &str) {
        self.fail_put_patterns.borrow_mut().push(pattern.to_string());
    }

    /// Make every subsequent `delete` fail with a storage error.
    pub fn set_fail_deletes(&self, fail: bool) {
        *self.fail_deletes.borrow_mut() = fail;
    }

    pub fn contains(&self, url: &str) -> bool {
        self.blobs.borrow().contains_key(url)
    }

    pub fn blob_count(&self) -> usize {
        self.blobs.borrow().len()
    }

    pub fn stored_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.blobs.borrow().keys().cloned().collect();
        urls.sort();
        urls
    }
}

impl BlobStore for MemBlobStore {
    fn put(&self, bytes: &[u8], suggested_name: &str) -> Result<String> {
        let blocked = self
            .fail_put_patterns
            .borrow()
            .iter()
            .any(|p| suggested_name.contains(p.as_str()));
        if blocked {
            return Err(SpotzError::Storage(format!(
                "Simulated upload failure: {}",
                suggested_name
            )));
        }
        let url = format!("mem://{}", suggested_name);
        self.blobs.borrow_mut().insert(url.clone(), bytes.to_vec());
        Ok(url)
    }

    fn delete(&self, url: &str) -> Result<()> {
        if *self.fail_deletes.borrow() {
            return Err(SpotzError::Storage(format!(
                "Simulated delete failure: {}",
                url
            )));
        }
        // Missing URL is fine: idempotent delete.
        self.blobs.borrow_mut().remove(url);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{RawNote, RawRecord};

    /// A fully-populated record the way the current release writes them.
    pub fn raw_record(name: &str) -> RawRecord {
        RawRecord {
            id: Some(Uuid::new_v4().to_string()),
            name: Some(name.to_string()),
            cuisine: Some("Italian".to_string()),
            price: Some("$$".to_string()),
            location: Some("River North".to_string()),
            address: Some("1 N Wacker".to_string()),
            kind: Some("restaurant".to_string()),
            favorite: Some(false),
            visited: Some(false),
            visited_date: None,
            photos: Some(Vec::new()),
            reviews: Some(Vec::new()),
            added_date: Some("2024-01-01 12:00:00".to_string()),
        }
    }

    /// A record the way the first release wrote them: no id, no flags, no
    /// photos.
    pub fn legacy_record(name: &str) -> RawRecord {
        RawRecord {
            name: Some(name.to_string()),
            cuisine: Some("Tacos".to_string()),
            price: Some("$".to_string()),
            location: Some("Pilsen".to_string()),
            reviews: Some(vec![RawNote {
                rating: Some(4),
                comment: Some("Get the al pastor".to_string()),
                reviewer: Some("Sam".to_string()),
                date: Some("2023-11-02".to_string()),
            }]),
            ..Default::default()
        }
    }
}
