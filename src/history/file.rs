use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{Fingerprint, Ledger};
use crate::error::{AppError, HistoryError};

/// Ledger stored as a text file, one hex digest per line
#[derive(Debug, Clone)]
pub(crate) struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Every recorded fingerprint. A missing file is an empty ledger.
    pub(crate) fn load_all(&self) -> Result<HashSet<Fingerprint>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(source) => {
                return Err(HistoryError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        Ok(content.lines().filter_map(Fingerprint::from_line).collect())
    }
}

impl Ledger for FileLedger {
    fn contains(&self, fingerprint: &Fingerprint) -> Result<bool, AppError> {
        Ok(self.load_all()?.contains(fingerprint))
    }

    fn append(&mut self, fingerprint: &Fingerprint) -> Result<(), AppError> {
        let append_err = |source| HistoryError::Append {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(append_err)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(append_err)?;
        writeln!(file, "{fingerprint}").map_err(append_err)?;
        file.sync_data().map_err(append_err)?;

        tracing::debug!(path = %self.path.display(), %fingerprint, "Recorded fingerprint");
        Ok(())
    }
}
