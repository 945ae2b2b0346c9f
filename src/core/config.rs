//! Site configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::seo::DEFAULT_SITE_URL;
use crate::core::waitlist::DEFAULT_WAITLIST_ENDPOINT;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("WAITLIST_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

/// Upper bound on one relay call to the capture endpoint
pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Site configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin of the site, used for canonical links, the sitemap and OG tags
    /// Example: https://flowshot.app
    pub site_url: String,

    /// Form-capture endpoint the waitlist relay forwards signups to
    pub waitlist_endpoint: String,

    /// Extra directory of fonts for OG image rendering, on top of the system fonts
    pub og_font_dir: Option<PathBuf>,

    /// How long the relay waits for the capture endpoint before giving up
    pub relay_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_url: non_empty_var("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            waitlist_endpoint: non_empty_var("WAITLIST_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_WAITLIST_ENDPOINT.to_string()),
            og_font_dir: non_empty_var("OG_FONT_DIR").map(PathBuf::from),
            relay_timeout: non_empty_var("WAITLIST_TIMEOUT_SECS")
                .and_then(|secs| match secs.parse::<u64>() {
                    Ok(secs) => Some(Duration::from_secs(secs)),
                    Err(_) => {
                        tracing::warn!("Ignoring WAITLIST_TIMEOUT_SECS={:?}", secs);
                        None
                    }
                })
                .unwrap_or(DEFAULT_RELAY_TIMEOUT),
        }
    }

    /// Reject URLs the server could not use
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("SITE_URL", &self.site_url)?;
        check_url("WAITLIST_ENDPOINT", &self.waitlist_endpoint)?;
        if self.relay_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Site URL without a trailing slash, ready for joining paths
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    /// Whether signups go to the built-in endpoint
    pub fn uses_default_endpoint(&self) -> bool {
        self.waitlist_endpoint == DEFAULT_WAITLIST_ENDPOINT
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            waitlist_endpoint: DEFAULT_WAITLIST_ENDPOINT.to_string(),
            og_font_dir: None,
            relay_timeout: DEFAULT_RELAY_TIMEOUT,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse as a URL with an http(s) scheme and a host
fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let usable = reqwest::Url::parse(value).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    });
    if usable {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert_eq!(config.site_url, "https://flowshot.app");
        assert!(config.uses_default_endpoint());
        assert!(config.og_font_dir.is_none());
        assert_eq!(config.relay_timeout, DEFAULT_RELAY_TIMEOUT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = Config {
            site_url: "http://localhost:3000/".to_string(),
            waitlist_endpoint: "https://forms.example.test/hook".to_string(),
            og_font_dir: Some(PathBuf::from("assets/fonts")),
            relay_timeout: Duration::from_secs(3),
        };

        assert!(config.validate().is_ok());
        assert!(!config.uses_default_endpoint());
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_validate_rejects_non_http_urls() {
        let config = Config {
            site_url: "ftp://flowshot.app".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUrl {
                name: "SITE_URL",
                value: "ftp://flowshot.app".to_string(),
            })
        );

        let config = Config {
            waitlist_endpoint: "https://".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl {
                name: "WAITLIST_ENDPOINT",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        assert!(check_url("X", "http://").is_err());
        assert!(check_url("X", "https:").is_err());
        assert!(check_url("X", "").is_err());
        assert!(check_url("X", "https://a").is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_urls() {
        for value in [
            "http://exa mple.com",
            "https://?x",
            "http://:::",
            "https://#",
            "mailto:team@flowshot.app",
        ] {
            let config = Config {
                waitlist_endpoint: value.to_string(),
                ..Config::default()
            };
            assert!(config.validate().is_err(), "accepted {:?}", value);
        }

        assert!(check_url("X", "https://script.google.com/macros/s/abc/exec").is_ok());
        assert!(check_url("X", "http://127.0.0.1:9/exec").is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            relay_timeout: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_config_error_message_names_variable() {
        let err = check_url("WAITLIST_ENDPOINT", "nope").unwrap_err();
        assert!(err.to_string().contains("WAITLIST_ENDPOINT"));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment; defaults fill the gaps
        let config = Config::from_env();

        assert!(!config.site_url.is_empty());
        assert!(!config.waitlist_endpoint.is_empty());
    }

    #[test]
    fn test_config_debug() {
        let debug_str = format!("{:?}", Config::default());

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("site_url"));
        assert!(debug_str.contains("flowshot.app"));
    }
}
