//! Ordered per-language collections of misconceptions and their JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::extractor::RawMisconception;

/// One misconception as persisted. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misconception {
    pub id: u32,
    pub text: String,
    pub category: String,
    pub source_url: String,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The records of one language, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MisconceptionStore {
    records: Vec<Misconception>,
}

impl MisconceptionStore {
    pub fn new(records: Vec<Misconception>) -> Self {
        Self { records }
    }

    /// Number raw records 1..=n in the order given.
    pub fn from_raw(raw: impl IntoIterator<Item = RawMisconception>) -> Self {
        let records = raw
            .into_iter()
            .zip(1..)
            .map(|(r, id)| Misconception {
                id,
                text: r.text,
                category: r.category,
                source_url: r.source_url,
            })
            .collect();
        Self { records }
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = serde_json::from_str(&data).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { records })
    }

    /// Write as a pretty-printed UTF-8 JSON array, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut json = serde_json::to_string_pretty(&self.records).map_err(|source| {
            StoreError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        json.push('\n');
        fs::write(path, json).map_err(io_err)?;

        info!("Saved {} records to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Stable sort by ID.
    pub fn sort_by_id(&mut self) {
        self.records.sort_by_key(|r| r.id);
    }

    pub fn records(&self) -> &[Misconception] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Misconception] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
