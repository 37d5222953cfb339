use std::fs;
use std::path::Path;

use super::{PublishReceipt, Publisher, UPLOAD_TIMEOUT, agent, read_body};
use crate::consts::{ENV_PAGE_ID, ENV_PAGE_TOKEN};
use crate::error::AppError;

const GRAPH_URL: &str = "https://graph.facebook.com";

/// Facebook page photo publisher (Graph API `/{page}/photos`)
pub(crate) struct FacebookPage {
    agent: ureq::Agent,
    api_version: String,
    page_id: Option<String>,
    access_token: Option<String>,
}

impl FacebookPage {
    pub(crate) fn new(
        api_version: &str,
        page_id: Option<String>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            agent: agent(UPLOAD_TIMEOUT),
            api_version: api_version.trim_matches('/').to_string(),
            page_id,
            access_token,
        }
    }

    fn endpoint(&self, page_id: &str) -> String {
        if self.api_version.is_empty() {
            format!("{GRAPH_URL}/{page_id}/photos")
        } else {
            format!("{GRAPH_URL}/{}/{page_id}/photos", self.api_version)
        }
    }
}

impl Publisher for FacebookPage {
    fn publish(&self, asset: &Path, caption: &str) -> Result<PublishReceipt, AppError> {
        let page_id = self
            .page_id
            .as_deref()
            .ok_or(AppError::ConfigurationMissing { name: ENV_PAGE_ID })?;
        let access_token = self
            .access_token
            .as_deref()
            .ok_or(AppError::ConfigurationMissing {
                name: ENV_PAGE_TOKEN,
            })?;

        let data = fs::read(asset).map_err(|e| AppError::Content {
            path: asset.to_path_buf(),
            reason: e.to_string(),
        })?;
        let filename = asset
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.png".to_string());

        let mut form = MultipartForm::new(&format!("versecast{:016x}", rand::random::<u64>()));
        form.text("caption", caption);
        form.text("access_token", access_token);
        form.file("source", &filename, content_type_for(asset), &data);
        let (content_type, body) = form.finish();

        let url = self.endpoint(page_id);
        tracing::info!(%url, bytes = body.len(), "Uploading photo");

        let mut response = self
            .agent
            .post(url.as_str())
            .header("Content-Type", content_type)
            .send(body.as_slice())
            .map_err(|e| AppError::PublishRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = read_body(response.body_mut().read_to_string());
        tracing::debug!(status, body = %text, "Graph API response");

        if !response.status().is_success() {
            return Err(AppError::Publish { status, body: text });
        }

        Ok(PublishReceipt {
            status,
            post_id: post_id_from(&text),
        })
    }
}

/// `post_id` when present, else the photo `id`
fn post_id_from(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["post_id", "id"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/png",
    }
}

/// Minimal `multipart/form-data` encoder for one upload
struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    fn new(boundary: &str) -> Self {
        Self {
            boundary: boundary.to_string(),
            body: Vec::new(),
        }
    }

    fn text(&mut self, name: &str, value: &str) {
        self.part_header(&format!("form-data; name=\"{name}\""), None);
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
    }

    fn file(&mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) {
        let filename = filename.replace('"', "");
        self.part_header(
            &format!("form-data; name=\"{name}\"; filename=\"{filename}\""),
            Some(content_type),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
    }

    fn part_header(&mut self, disposition: &str, content_type: Option<&str>) {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body
            .extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
        if let Some(ct) = content_type {
            self.body
                .extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
        }
        self.body.extend_from_slice(b"\r\n");
    }

    /// Content-Type header value and the encoded body
    fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}
