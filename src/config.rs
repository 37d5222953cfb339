use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{
    DEFAULT_MAX_ATTEMPTS, ENV_PAGE_ID, ENV_PAGE_TOKEN, ENV_PAGE_TOKEN_ALIAS, ENV_PEXELS_KEY,
};
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct VerseConfig {
    pub(crate) pool: PathBuf,
    pub(crate) font: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) hashtags: String,
    pub(crate) topics: Vec<String>,
}

impl Default for VerseConfig {
    fn default() -> Self {
        Self {
            pool: PathBuf::from("verses.json"),
            font: PathBuf::from("fonts/Roboto-Bold.ttf"),
            output: PathBuf::from("daily_verse.png"),
            hashtags: "#DailyBibleVerse #Faith #Hope".to_string(),
            topics: [
                "peaceful nature",
                "mountain sunrise",
                "calm sky",
                "forest light",
                "quiet ocean",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct PrayerConfig {
    pub(crate) pool: PathBuf,
    pub(crate) font: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) history: PathBuf,
    pub(crate) max_attempts: usize,
    pub(crate) templates: Option<PathBuf>,
    pub(crate) morning_query: String,
    pub(crate) evening_query: String,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            pool: PathBuf::from("prayers/verses.json"),
            font: PathBuf::from("fonts/PlayfairDisplay-Regular.ttf"),
            output: PathBuf::from("output.png"),
            history: PathBuf::from("prayer_history.txt"),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            templates: None,
            morning_query: "sunrise nature peaceful light".to_string(),
            evening_query: "sunset calm night sky peaceful".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct PublishConfig {
    pub(crate) api_version: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            api_version: "v18.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) timezone: Option<String>,
    pub(crate) fallback_image: PathBuf,
    pub(crate) size: u32,
    pub(crate) overlay_opacity: u8,
    pub(crate) verse: VerseConfig,
    pub(crate) prayer: PrayerConfig,
    pub(crate) publish: PublishConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            fallback_image: PathBuf::from("fallback.jpg"),
            size: 1080,
            overlay_opacity: 120,
            verse: VerseConfig::default(),
            prayer: PrayerConfig::default(),
            publish: PublishConfig::default(),
        }
    }
}

impl Config {
    /// Load from an explicit path (which must exist and parse), otherwise the
    /// first readable file on the search path, otherwise defaults.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            tracing::debug!(path = %path.display(), "Loaded config");
            return Ok(config);
        }

        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "Loaded config");
                    return Ok(config);
                }
                Err(e) => tracing::warn!("{e}"),
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self, AppError> {
        let config_err = |reason: String| AppError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        toml::from_str::<Config>(&content).map_err(|e| config_err(e.to_string()))
    }

    fn get_config_paths() -> Vec<PathBuf> {
        // 1. Working directory, next to the pool files
        let mut paths = vec![PathBuf::from("versecast.toml")];

        // 2. XDG config: ~/.config/versecast/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("versecast").join("config.toml"));
        }

        // 3. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("versecast").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 4. Home directory: ~/.versecast.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".versecast.toml"));
        }

        paths
    }
}

/// Secrets, read from the environment only. Presence is checked by the
/// component that needs each one.
#[derive(Debug, Clone, Default)]
pub(crate) struct Credentials {
    pub(crate) page_id: Option<String>,
    pub(crate) page_token: Option<String>,
    pub(crate) pexels_key: Option<String>,
}

impl Credentials {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            page_id: get(ENV_PAGE_ID),
            page_token: get(ENV_PAGE_TOKEN).or_else(|| get(ENV_PAGE_TOKEN_ALIAS)),
            pexels_key: get(ENV_PEXELS_KEY),
        }
    }
}
