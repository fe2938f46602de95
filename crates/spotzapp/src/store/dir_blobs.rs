//! Blob store backed by a flat directory of photo files.
//!
//! URLs are plain absolute paths under the store's root. `delete` treats
//! anything outside the root as foreign and succeeds without touching it, so
//! purging a record whose photo list mixes in web URLs is harmless.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::BlobStore;
use crate::error::Result;

pub struct DirBlobStore {
    root: PathBuf,
}

impl DirBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl BlobStore for DirBlobStore {
    fn put(&self, bytes: &[u8], suggested_name: &str) -> Result<String> {
        self.ensure_root()?;
        let target = self.root.join(suggested_name);

        // Atomic write, same idiom as the record store.
        let tmp = self.root.join(format!(".upload-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &target)?;

        Ok(target.to_string_lossy().into_owned())
    }

    fn delete(&self, url: &str) -> Result<()> {
        let path = Path::new(url);
        if !path.starts_with(&self.root) {
            // Not one of ours; nothing to clean up.
            return Ok(());
        }
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
