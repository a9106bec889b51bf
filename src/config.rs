use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// How the aggregated feed is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored, human-readable feed (default)
    Terminal,
    /// JSON array of aggregated items on stdout
    Json,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over anything set here.
pub struct Config {
    /// Path to a `get_feed` export (JSON array of rows)
    pub feed_path: Option<PathBuf>,
    /// Base URL prefixed to relative review photo paths
    pub image_base_url: Option<String>,
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required at load time; call the `require_*` methods before
    /// operations that need a specific setting.
    pub fn load() -> Result<Self> {
        let output_format = match env::var("PLANO_OUTPUT").as_deref() {
            Ok("json") => OutputFormat::Json,
            // "terminal" or unset both default to terminal output
            _ => OutputFormat::Terminal,
        };

        Ok(Self {
            feed_path: env::var("PLANO_FEED_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            image_base_url: env::var("PLANO_IMAGE_BASE_URL")
                .ok()
                .filter(|u| !u.is_empty()),
            output_format,
        })
    }

    /// Resolve the feed file, preferring an explicit command-line path.
    pub fn require_feed_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        match flag.or_else(|| self.feed_path.clone()) {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "No feed file given. Pass --file <PATH> or set PLANO_FEED_PATH in your .env file."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_env_path() {
        let config = Config {
            feed_path: Some(PathBuf::from("env.json")),
            image_base_url: None,
            output_format: OutputFormat::Terminal,
        };
        let path = config
            .require_feed_path(Some(PathBuf::from("flag.json")))
            .unwrap();
        assert_eq!(path, PathBuf::from("flag.json"));
        assert_eq!(
            config.require_feed_path(None).unwrap(),
            PathBuf::from("env.json")
        );
    }

    #[test]
    fn missing_path_is_an_error() {
        let config = Config {
            feed_path: None,
            image_base_url: None,
            output_format: OutputFormat::Terminal,
        };
        let err = config.require_feed_path(None).unwrap_err();
        assert!(err.to_string().contains("PLANO_FEED_PATH"));
    }
}
