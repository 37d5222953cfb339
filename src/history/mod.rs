//! Append-only history of published outputs
//!
//! The no-repeat selector consults a [`Ledger`] of fingerprints before
//! accepting a generated prayer. The store behind it is swappable.

mod file;
mod fingerprint;
mod memory;

pub(crate) use file::FileLedger;
pub(crate) use fingerprint::Fingerprint;
pub(crate) use memory::MemoryLedger;

use crate::error::AppError;

/// Set of fingerprints that only ever grows
///
/// There is no delete or expiry operation. A ledger that runs for years keeps
/// every digest it was given.
pub(crate) trait Ledger {
    /// Whether the fingerprint was recorded by any earlier run
    fn contains(&self, fingerprint: &Fingerprint) -> Result<bool, AppError>;

    /// Record a fingerprint. Returns once the entry is durable.
    fn append(&mut self, fingerprint: &Fingerprint) -> Result<(), AppError>;
}
