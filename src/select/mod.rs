//! Selection of the text to publish
//!
//! Date mode is a pure rotation over the pool. Theme mode draws generated
//! prayers until one is absent from the history ledger.

mod fresh;
mod retry;
mod rotation;

pub(crate) use fresh::select_unused;
pub(crate) use rotation::select_for_date;
