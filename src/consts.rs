/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Facebook page id
pub(crate) const ENV_PAGE_ID: &str = "FB_PAGE_ID";
/// Facebook page access token
pub(crate) const ENV_PAGE_TOKEN: &str = "FB_PAGE_ACCESS_TOKEN";
/// Older name for the page token, still honored
pub(crate) const ENV_PAGE_TOKEN_ALIAS: &str = "FB_PAGE_TOKEN";
/// Pexels API key
pub(crate) const ENV_PEXELS_KEY: &str = "PEXELS_API_KEY";

/// Attempts before the no-repeat selector accepts a duplicate
pub(crate) const DEFAULT_MAX_ATTEMPTS: usize = 12;

/// Theme used when an entry has none, or an unknown one
pub(crate) const DEFAULT_THEME: &str = "guidance";

/// Photo search used when no topics are configured
pub(crate) const DEFAULT_TOPIC: &str = "peaceful nature";
