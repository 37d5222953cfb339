//! Pool file loaders
//!
//! Date mode reads a JSON array; theme mode reads a JSON object of
//! slot-keyed arrays.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;

use super::{CandidateEntry, TimeOfDay};
use crate::error::AppError;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::Content {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| AppError::Content {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the date-mode pool. An empty array loads fine; selection rejects it.
pub(crate) fn load_verse_pool(path: &Path) -> Result<Vec<CandidateEntry>, AppError> {
    let entries: Vec<CandidateEntry> = read_json(path)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded verse pool");
    Ok(entries)
}

/// Theme-mode pool: verse entries grouped by time-of-day slot
#[derive(Debug)]
pub(crate) struct ThemedPool {
    source: PathBuf,
    slots: HashMap<String, Vec<CandidateEntry>>,
}

impl ThemedPool {
    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let slots: HashMap<String, Vec<CandidateEntry>> = read_json(path)?;
        tracing::debug!(
            path = %path.display(),
            slots = slots.len(),
            "Loaded themed pool"
        );
        Ok(Self {
            source: path.to_path_buf(),
            slots,
        })
    }

    pub(crate) fn entries(&self, slot: TimeOfDay) -> Result<&[CandidateEntry], AppError> {
        match self.slots.get(slot.as_str()) {
            Some(entries) if !entries.is_empty() => Ok(entries),
            _ => Err(AppError::EmptyPool {
                pool: format!("{}[{}]", self.source.display(), slot),
            }),
        }
    }

    /// Random entry for the slot
    pub(crate) fn choose<R: Rng + ?Sized>(
        &self,
        slot: TimeOfDay,
        rng: &mut R,
    ) -> Result<&CandidateEntry, AppError> {
        let entries = self.entries(slot)?;
        entries.choose(rng).ok_or_else(|| AppError::EmptyPool {
            pool: format!("{}[{}]", self.source.display(), slot),
        })
    }
}
