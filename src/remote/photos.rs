use std::path::Path;

use image::DynamicImage;
use rand::seq::SliceRandom;
use serde::Deserialize;

use super::{BackgroundSource, READ_TIMEOUT, agent};
use crate::consts::ENV_PEXELS_KEY;
use crate::error::AppError;

const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";
const SERVICE: &str = "pexels";
/// Largest photo body accepted
const MAX_IMAGE_BYTES: u64 = 25 * 1024 * 1024;

/// Search parameters for one background
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhotoQuery {
    pub(crate) terms: String,
    pub(crate) per_page: u32,
    pub(crate) orientation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    large: String,
}

/// Pexels search client. The key is checked when a photo is requested.
pub(crate) struct Pexels {
    agent: ureq::Agent,
    api_key: Option<String>,
}

impl Pexels {
    pub(crate) fn new(api_key: Option<String>) -> Self {
        Self {
            agent: agent(READ_TIMEOUT),
            api_key,
        }
    }

    fn search(&self, query: &PhotoQuery) -> Result<SearchResponse, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AppError::ConfigurationMissing {
                name: ENV_PEXELS_KEY,
            })?;

        let mut request = self
            .agent
            .get(PEXELS_SEARCH_URL)
            .header("Authorization", api_key)
            .query("query", &query.terms)
            .query("per_page", query.per_page.to_string());
        if let Some(orientation) = &query.orientation {
            request = request.query("orientation", orientation);
        }

        let mut response = request.call().map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RemoteFetch {
                service: SERVICE,
                reason: format!("search returned HTTP {}", status.as_u16()),
            });
        }
        response.body_mut().read_json().map_err(fetch_err)
    }

    fn download(&self, url: &str) -> Result<DynamicImage, AppError> {
        let mut response = self.agent.get(url).call().map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RemoteFetch {
                service: SERVICE,
                reason: format!("photo download returned HTTP {}", status.as_u16()),
            });
        }
        let bytes = response
            .body_mut()
            .with_config()
            .limit(MAX_IMAGE_BYTES)
            .read_to_vec()
            .map_err(fetch_err)?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

fn fetch_err(e: ureq::Error) -> AppError {
    AppError::RemoteFetch {
        service: SERVICE,
        reason: e.to_string(),
    }
}

impl BackgroundSource for Pexels {
    fn background(&self, query: &PhotoQuery) -> Result<DynamicImage, AppError> {
        let results = self.search(query)?;
        let photo = results
            .photos
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| AppError::RemoteFetch {
                service: SERVICE,
                reason: format!("no photos for \"{}\"", query.terms),
            })?;
        tracing::debug!(url = %photo.src.large, "Downloading background");
        self.download(&photo.src.large)
    }
}

/// Background from the source, or the local fallback asset when the source
/// cannot deliver one. Only an unreadable fallback fails the run.
pub(crate) fn background_or_fallback(
    source: &dyn BackgroundSource,
    query: &PhotoQuery,
    fallback: &Path,
) -> Result<DynamicImage, AppError> {
    match source.background(query) {
        Ok(img) => Ok(img),
        Err(e) => {
            tracing::warn!(
                error = %e,
                fallback = %fallback.display(),
                "Background fetch failed, using fallback image"
            );
            Ok(image::open(fallback)?)
        }
    }
}
