use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Missing configuration: {name} is not set")]
    ConfigurationMissing { name: &'static str },

    #[error("Failed to load config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Candidate pool {pool} is empty")]
    EmptyPool { pool: String },

    #[error("Failed to read {}: {reason}", path.display())]
    Content { path: PathBuf, reason: String },

    #[error("{service} request failed: {reason}")]
    RemoteFetch {
        service: &'static str,
        reason: String,
    },

    #[error("Publish failed (HTTP {status}): {body}")]
    Publish { status: u16, body: String },

    #[error("Publish request failed: {0}")]
    PublishRequest(String),

    #[error("Failed to load font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    History(#[from] HistoryError),
}

#[derive(Debug, Error)]
pub(crate) enum HistoryError {
    #[error("Failed to read history {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to append to history {}: {source}", path.display())]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_missing_config() {
        let e = AppError::ConfigurationMissing {
            name: "FB_PAGE_ID",
        };
        assert_eq!(e.to_string(), "Missing configuration: FB_PAGE_ID is not set");
    }

    #[test]
    fn app_error_display_empty_pool() {
        let e = AppError::EmptyPool {
            pool: "verses.json".to_string(),
        };
        assert_eq!(e.to_string(), "Candidate pool verses.json is empty");
    }

    #[test]
    fn app_error_display_publish() {
        let e = AppError::Publish {
            status: 400,
            body: "bad token".to_string(),
        };
        assert_eq!(e.to_string(), "Publish failed (HTTP 400): bad token");
    }

    #[test]
    fn app_error_from_history_error() {
        let history = HistoryError::Append {
            path: PathBuf::from("history.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let app: AppError = history.into();
        assert_eq!(
            app.to_string(),
            "Failed to append to history history.txt: denied"
        );
    }
}
