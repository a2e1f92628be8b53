// Runtime configuration: where the API lives and where the token is kept.
// Passed explicitly to the components that need it so tests can point
// them at a mock server and a temporary directory.

use std::path::PathBuf;

use crate::token::expand_home;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Location of the stored personal access token.
pub const TOKEN_FILE: &str = "~/.github/token";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub token_path: PathBuf,
}

impl Config {
    /// Build the configuration from the environment variable
    /// `GITHUB_API_URL` or fall back to `https://api.github.com`.
    pub fn from_env() -> Self {
        let api_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::new(&api_url, expand_home(TOKEN_FILE))
    }

    pub fn new(api_url: &str, token_path: PathBuf) -> Self {
        Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            token_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = Config::new("http://127.0.0.1:1234/", PathBuf::from("/tmp/token"));
        assert_eq!(config.api_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn token_file_lives_under_home() {
        let path = expand_home(TOKEN_FILE);
        assert!(path.ends_with(".github/token"));
        assert!(!path.starts_with("~"));
    }
}
