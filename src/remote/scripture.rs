use serde::Deserialize;

use super::{Passage, READ_TIMEOUT, ScriptureSource, agent, read_body};
use crate::error::AppError;

const BIBLE_API_URL: &str = "https://bible-api.com";
const SERVICE: &str = "bible-api";

#[derive(Debug, Deserialize)]
struct BibleApiResponse {
    reference: String,
    text: String,
}

/// bible-api.com client
pub(crate) struct BibleApi {
    agent: ureq::Agent,
    base_url: String,
}

impl BibleApi {
    pub(crate) fn new() -> Self {
        Self {
            agent: agent(READ_TIMEOUT),
            base_url: BIBLE_API_URL.to_string(),
        }
    }
}

impl ScriptureSource for BibleApi {
    fn passage(&self, reference: &str) -> Result<Passage, AppError> {
        let url = format!("{}/{}", self.base_url, encode_reference(reference));
        tracing::debug!(%url, "Fetching passage");

        let fetch_err = |reason: String| AppError::RemoteFetch {
            service: SERVICE,
            reason,
        };

        let mut response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|e| fetch_err(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = read_body(response.body_mut().read_to_string());
            return Err(fetch_err(format!("HTTP {}: {}", status.as_u16(), body.trim())));
        }
        let data: BibleApiResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| fetch_err(e.to_string()))?;

        Ok(Passage {
            reference: data.reference.trim().to_string(),
            text: collapse_whitespace(&data.text),
        })
    }
}

/// Percent-encode a reference for use as a URL path segment
fn encode_reference(reference: &str) -> String {
    let mut out = String::with_capacity(reference.len());
    for byte in reference.trim().bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b':' | b',' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// The API returns verse text with embedded line breaks
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
