use std::env;

use crate::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const USER_AGENT_VAR: &str = "GITHUB_USER_AGENT";

/// Connection settings for [`GitHubClient`](crate::GitHubClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base API URL. Must end with `/`.
    pub base_url: String,
    pub user_agent: String,
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            token: None,
        }
    }
}

impl Config {
    /// Reads settings from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            base_url: get(API_URL_VAR).unwrap_or(defaults.base_url),
            user_agent: get(USER_AGENT_VAR).unwrap_or(defaults.user_agent),
            token: get(TOKEN_VAR),
        }
    }
}
