//! Remote collaborators
//!
//! Each upstream service sits behind a trait so the pipeline can run
//! against fakes in tests.

mod facebook;
mod photos;
mod scripture;

use std::path::Path;
use std::time::Duration;

use image::DynamicImage;
use serde::Serialize;

pub(crate) use facebook::FacebookPage;
pub(crate) use photos::{Pexels, PhotoQuery, background_or_fallback};
pub(crate) use scripture::BibleApi;

use crate::error::AppError;

const READ_TIMEOUT: Duration = Duration::from_secs(30);
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Verse text as returned by the scripture provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Passage {
    pub(crate) reference: String,
    pub(crate) text: String,
}

/// Looks up verse text by reference
pub(crate) trait ScriptureSource {
    fn passage(&self, reference: &str) -> Result<Passage, AppError>;
}

/// Supplies a background photo for a search query
pub(crate) trait BackgroundSource {
    fn background(&self, query: &PhotoQuery) -> Result<DynamicImage, AppError>;
}

/// Remote status of a successful publish
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PublishReceipt {
    pub(crate) status: u16,
    pub(crate) post_id: Option<String>,
}

/// Uploads a rendered asset with its caption
pub(crate) trait Publisher {
    fn publish(&self, asset: &Path, caption: &str) -> Result<PublishReceipt, AppError>;
}

/// Blocking agent that hands non-2xx responses back instead of erroring, so
/// callers can report the body.
fn agent(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Response text, or a note saying why it could not be read
fn read_body(body: Result<String, ureq::Error>) -> String {
    body.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}
