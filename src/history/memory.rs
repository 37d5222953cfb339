use std::collections::HashSet;

use super::{FileLedger, Fingerprint, Ledger};
use crate::error::AppError;

/// In-process ledger. Seeded from a file for dry runs, so history is read
/// but never written.
#[derive(Debug, Default)]
pub(crate) struct MemoryLedger {
    entries: HashSet<Fingerprint>,
}

impl MemoryLedger {
    pub(crate) fn seeded_from(file: &FileLedger) -> Result<Self, AppError> {
        Ok(Self {
            entries: file.load_all()?,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<Fingerprint> for MemoryLedger {
    fn from_iter<I: IntoIterator<Item = Fingerprint>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Ledger for MemoryLedger {
    fn contains(&self, fingerprint: &Fingerprint) -> Result<bool, AppError> {
        Ok(self.entries.contains(fingerprint))
    }

    fn append(&mut self, fingerprint: &Fingerprint) -> Result<(), AppError> {
        self.entries.insert(fingerprint.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn seeded_ledger_sees_file_entries_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.txt");
        let mut file = FileLedger::new(&path);
        file.append(&Fingerprint::of("old")).unwrap();

        let mut memory = MemoryLedger::seeded_from(&file).unwrap();
        assert!(memory.contains(&Fingerprint::of("old")).unwrap());

        memory.append(&Fingerprint::of("new")).unwrap();
        assert_eq!(memory.len(), 2);
        assert!(!file.contains(&Fingerprint::of("new")).unwrap());
    }

    #[test]
    fn seeded_from_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = FileLedger::new(dir.path().join("absent.txt"));
        let memory = MemoryLedger::seeded_from(&file).unwrap();
        assert_eq!(memory.len(), 0);
    }
}
