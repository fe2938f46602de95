//! # Storage Layer
//!
//! This module defines the two adapter contracts the engine consumes. Both
//! wrap "remote" stores from the engine's point of view; in this repository
//! the production implementations happen to live on the local filesystem, but
//! nothing above this layer knows that.
//!
//! ## The Two Stores
//!
//! 1. **Records** ([`RecordStore`]): structured venue data. One logical
//!    record per place, exchanged as loosely-typed [`RawRecord`] values so
//!    that files written by any historical release still load.
//! 2. **Blobs** ([`BlobStore`]): photo bytes, addressed by URL. The engine
//!    never interprets a URL; it only stores, forwards, and deletes them.
//!
//! ## Contract Notes
//!
//! - `upsert` with an unset id is an insert; the store assigns the id and
//!   returns the completed record. The caller re-normalizes from that
//!   response rather than trusting its own copy. A set id must match a
//!   stored record; editing a record another session deleted surfaces
//!   `NotFound`, and `refresh` is the way back in sync.
//! - `delete` on the blob side is idempotent: deleting an object that is
//!   already gone is success. Venue deletion relies on this to be safely
//!   repeatable after partial failures.
//! - Errors surface as [`crate::error::SpotzError`]; no adapter panics on
//!   ordinary failure.
//!
//! ## Implementations
//!
//! - [`json_records::JsonRecordStore`]: one pretty-printed JSON array file,
//!   written atomically.
//! - [`dir_blobs::DirBlobStore`]: a flat photos directory, file paths as
//!   URLs.
//! - [`memory::MemRecordStore`] / [`memory::MemBlobStore`]: in-memory fakes
//!   with failure injection, for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── spotz.toml            # optional config
//! ├── places.json           # record store
//! └── photos/
//!     └── {owner}_{token}.{ext}
//! ```

use crate::error::Result;
use crate::model::RawRecord;
use uuid::Uuid;

pub mod dir_blobs;
pub mod json_records;
pub mod memory;

/// Structured storage for venue records.
pub trait RecordStore {
    /// Every record currently persisted, in stored order.
    fn list_all(&self) -> Result<Vec<RawRecord>>;

    /// Insert (id unset) or replace (id set) a record. Returns the record as
    /// stored, with its id populated. `NotFound` when a set id matches no
    /// stored record.
    fn upsert(&mut self, record: RawRecord) -> Result<RawRecord>;

    /// Remove a record permanently. `NotFound` if no record has this id.
    fn delete_by_id(&mut self, id: &Uuid) -> Result<()>;
}

/// Binary object storage for photos.
pub trait BlobStore {
    /// Store bytes under a suggested object name; returns the URL that from
    /// now on identifies the blob.
    fn put(&self, bytes: &[u8], suggested_name: &str) -> Result<String>;

    /// Delete a blob. Idempotent: a URL whose object is already gone (or was
    /// never ours) is success.
    fn delete(&self, url: &str) -> Result<()>;
}
