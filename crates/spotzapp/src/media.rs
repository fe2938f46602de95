//! # Media Lifecycle
//!
//! Photo handling around the blob store: naming, upload, and cleanup.
//!
//! Nothing here touches a [`Place`](crate::model::Place). Attach returns the
//! URLs it stored and the caller decides when (and whether) to reference
//! them; the command layer only appends URLs to a place after the record
//! write has succeeded, and purges them when it fails.
//!
//! ## Object Naming
//!
//! Stored names are `{sanitized owner}_{token}{ext}`: the venue name with
//! anything outside alphanumerics / space / `-` / `_` removed and spaces
//! turned into underscores, an 8-hex-char random token, and the source
//! file's extension. Two uploads for the same venue, or two venues whose
//! names sanitize identically, can never overwrite each other.
//!
//! ## Failure Isolation
//!
//! Uploads are independent: a failed file is reported and skipped, the rest
//! proceed. Deletes are idempotent and never block the caller from dropping
//! the URL out of the record; a delete failure surfaces as a warning, not an
//! abort.

use std::path::Path;

use uuid::Uuid;

use crate::error::SpotzError;
use crate::store::BlobStore;

/// An incoming photo: original file name plus raw bytes.
#[derive(Debug, Clone)]
pub struct PhotoFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PhotoFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// What an [`attach`] call achieved: stored URLs in input order, plus one
/// entry per failed file.
#[derive(Debug, Default)]
pub struct AttachOutcome {
    pub urls: Vec<String>,
    pub failures: Vec<(String, SpotzError)>,
}

/// Reduce a venue name to filesystem-safe characters.
///
/// Keeps alphanumerics, spaces, `-`, and `_`; drops everything else; then
/// trims and replaces spaces with underscores. An empty result falls back to
/// `"photo"` so the object name never starts with the token.
pub fn sanitize_owner(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let flattened = kept.trim().replace(' ', "_");
    if flattened.is_empty() {
        "photo".to_string()
    } else {
        flattened
    }
}

/// Collision-free object name for one upload.
pub fn object_name(owner_name: &str, file_name: &str) -> String {
    let token: String = Uuid::new_v4().simple().to_string()[..8].to_string();
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();
    format!("{}_{}{}", sanitize_owner(owner_name), token, ext)
}

/// Upload every file, isolating failures per file.
pub fn attach<B: BlobStore>(blobs: &B, owner_name: &str, files: &[PhotoFile]) -> AttachOutcome {
    let mut outcome = AttachOutcome::default();
    for file in files {
        let name = object_name(owner_name, &file.file_name);
        match blobs.put(&file.bytes, &name) {
            Ok(url) => outcome.urls.push(url),
            Err(e) => outcome.failures.push((file.file_name.clone(), e)),
        }
    }
    outcome
}

/// Delete every blob, collecting failures instead of stopping. A URL whose
/// blob is already gone counts as success (the store's delete is
/// idempotent).
pub fn detach<B: BlobStore>(blobs: &B, urls: &[String]) -> Vec<(String, SpotzError)> {
    urls.iter()
        .filter_map(|url| blobs.delete(url).err().map(|e| (url.clone(), e)))
        .collect()
}

/// Cleanup on venue deletion: same contract as [`detach`], over every photo
/// the venue owned.
pub fn purge_all<B: BlobStore>(blobs: &B, urls: &[String]) -> Vec<(String, SpotzError)> {
    detach(blobs, urls)
}
