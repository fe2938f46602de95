//! # Configuration
//!
//! Settings are loaded by [`confique`]: environment variables override the
//! `spotz.toml` file in the data directory, which overrides the compiled
//! defaults. Everything has a default, so no config file is required.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `records_file` | `places.json` | Record file name inside the data directory |
//! | `photos_dir` | `photos` | Photo directory name inside the data directory |
//! | `default_reviewer` | `Anonymous` | Reviewer name used when a note gives none |

use std::path::{Path, PathBuf};

use confique::Config;

use crate::error::{Result, SpotzError};

pub const CONFIG_FILE: &str = "spotz.toml";

/// Configuration for spotz, stored in `spotz.toml`.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct SpotzConfig {
    /// File name of the JSON record file, relative to the data directory.
    #[config(default = "places.json")]
    pub records_file: String,

    /// Directory name for photo blobs, relative to the data directory.
    #[config(default = "photos")]
    pub photos_dir: String,

    /// Reviewer name for notes that do not name one.
    #[config(default = "Anonymous", env = "SPOTZ_DEFAULT_REVIEWER")]
    pub default_reviewer: String,
}

impl Default for SpotzConfig {
    fn default() -> Self {
        Self {
            records_file: "places.json".to_string(),
            photos_dir: "photos".to_string(),
            default_reviewer: "Anonymous".to_string(),
        }
    }
}

impl SpotzConfig {
    /// Load from environment and `spotz.toml` under `data_dir`, falling back
    /// to defaults for anything unset.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let file = data_dir.join(CONFIG_FILE);
        let mut builder = Self::builder().env();
        if file.exists() {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| SpotzError::Config(e.to_string()))
    }

    /// Absolute path of the record file.
    pub fn records_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.records_file)
    }

    /// Absolute path of the photo directory.
    pub fn photos_root(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.photos_dir)
    }
}
