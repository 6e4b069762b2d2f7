//! Runtime configuration loaded from the environment (`.env` is loaded by the binary first).
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | GITHUB_TOKEN | (required) | Bearer token for the gist API. |
//! | GIST_ID | (required) | Gist holding the log document. |
//! | GIST_FILENAME | daily-log.md | File inside the gist. |
//! | WORKLOG_API_BASE | https://api.github.com | API base URL. |

use thiserror::Error;

pub const DEFAULT_FILENAME: &str = "daily-log.md";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set (add it to the environment or .env)")]
    Missing(&'static str),
}

/// Built once at startup and passed by reference to whatever needs it.
#[derive(Clone, PartialEq, Eq)]
pub struct WorklogConfig {
    pub token: String,
    pub gist_id: String,
    pub filename: String,
    pub api_base: String,
}

impl std::fmt::Debug for WorklogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorklogConfig")
            .field("token", &"<redacted>")
            .field("gist_id", &self.gist_id)
            .field("filename", &self.filename)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl WorklogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let token = get("GITHUB_TOKEN").ok_or(ConfigError::Missing("GITHUB_TOKEN"))?;
        let gist_id = get("GIST_ID").ok_or(ConfigError::Missing("GIST_ID"))?;
        let filename = get("GIST_FILENAME").unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        let api_base = get("WORKLOG_API_BASE")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            token,
            gist_id,
            filename,
            api_base,
        })
    }
}
