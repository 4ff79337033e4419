use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::error::AppError;
use crate::feed::github::GITHUB_API_BASE;

/// Largest page size the listing endpoint honours.
pub const MAX_SHOWCASE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket path; takes precedence over `listen` when set
    #[serde(default)]
    pub socket: Option<PathBuf>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,

    /// Projects section configuration
    #[serde(default)]
    pub showcase: ShowcaseConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, uses OTEL_EXPORTER_OTLP_ENDPOINT env var)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ShowcaseConfig {
    /// GitHub account whose repositories are listed
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Number of repositories requested
    #[serde(default = "default_limit")]
    pub limit: NonZeroU32,

    /// Listing API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// GitHub personal access token (optional, increases rate limits)
    #[serde(default)]
    pub token: Option<String>,
}

fn default_owner() -> String {
    "octocat".to_string()
}

fn default_limit() -> NonZeroU32 {
    NonZeroU32::MIN.saturating_add(5)
}

fn default_api_base() -> String {
    GITHUB_API_BASE.to_string()
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            limit: default_limit(),
            api_base: default_api_base(),
            token: None,
        }
    }
}

impl fmt::Debug for ShowcaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowcaseConfig")
            .field("owner", &self.owner)
            .field("limit", &self.limit)
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nested keys use `__` as the separator:
    /// - FOLIO_LISTEN
    /// - FOLIO_SOCKET
    /// - FOLIO_OTEL__ENDPOINT
    /// - FOLIO_OTEL__ENVIRONMENT
    /// - FOLIO_SHOWCASE__OWNER
    /// - FOLIO_SHOWCASE__LIMIT
    /// - FOLIO_SHOWCASE__API_BASE
    /// - FOLIO_SHOWCASE__TOKEN
    ///
    /// FOLIO_GITHUB_USER and FOLIO_GITHUB_TOKEN are accepted as shorthands
    /// for the showcase owner and token. The nested keys win when both are set.
    pub fn load() -> Result<Self, AppError> {
        let config: Config = Self::figment().extract()?;
        config.validate()?;

        Ok(config)
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(
                Env::prefixed("FOLIO_GITHUB_")
                    .only(&["user", "token"])
                    .map(|key| {
                        if key == "user" {
                            "showcase.owner".into()
                        } else {
                            "showcase.token".into()
                        }
                    }),
            )
            .merge(Env::prefixed("FOLIO_").split("__"))
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.showcase.owner.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "showcase.owner must not be empty".to_string(),
            ));
        }

        if self.showcase.limit.get() > MAX_SHOWCASE_LIMIT {
            return Err(AppError::InvalidConfig(format!(
                "showcase.limit must be at most {MAX_SHOWCASE_LIMIT}, got {}",
                self.showcase.limit
            )));
        }

        url::Url::parse(&self.showcase.api_base).map_err(|e| {
            AppError::InvalidConfig(format!(
                "showcase.api_base {:?} is not a URL: {e}",
                self.showcase.api_base
            ))
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            socket: None,
            otel: OtelConfig::default(),
            showcase: ShowcaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn load() -> figment::error::Result<Config> {
        Config::load().map_err(|e| e.to_string().into())
    }

    #[test]
    fn test_default_config() {
        Jail::expect_with(|_jail| {
            let config = load()?;
            assert_eq!(config.listen, "127.0.0.1:3000");
            assert!(config.socket.is_none());
            assert_eq!(config.otel.environment, "development");
            assert_eq!(config.showcase.owner, "octocat");
            assert_eq!(config.showcase.limit.get(), 6);
            assert_eq!(config.showcase.api_base, "https://api.github.com");
            assert!(config.showcase.token.is_none());
            Ok(())
        });
    }

    #[test]
    fn reads_nested_env_vars() {
        Jail::expect_with(|jail| {
            jail.set_env("FOLIO_LISTEN", "0.0.0.0:8080");
            jail.set_env("FOLIO_SHOWCASE__OWNER", "someone");
            jail.set_env("FOLIO_SHOWCASE__LIMIT", "3");
            jail.set_env("FOLIO_SHOWCASE__API_BASE", "http://localhost:9000");
            jail.set_env("FOLIO_OTEL__ENVIRONMENT", "production");

            let config = load()?;
            assert_eq!(config.listen, "0.0.0.0:8080");
            assert_eq!(config.showcase.owner, "someone");
            assert_eq!(config.showcase.limit.get(), 3);
            assert_eq!(config.showcase.api_base, "http://localhost:9000");
            assert_eq!(config.otel.environment, "production");
            Ok(())
        });
    }

    #[test]
    fn accepts_github_shorthands() {
        Jail::expect_with(|jail| {
            jail.set_env("FOLIO_GITHUB_USER", "shorthand");
            jail.set_env("FOLIO_GITHUB_TOKEN", "ghp_test");

            let config = load()?;
            assert_eq!(config.showcase.owner, "shorthand");
            assert_eq!(config.showcase.token.as_deref(), Some("ghp_test"));
            Ok(())
        });
    }

    #[test]
    fn nested_keys_take_precedence_over_shorthands() {
        Jail::expect_with(|jail| {
            jail.set_env("FOLIO_SHOWCASE__OWNER", "nested");
            jail.set_env("FOLIO_GITHUB_USER", "shorthand");
            jail.set_env("FOLIO_SHOWCASE__TOKEN", "ghp_nested");
            jail.set_env("FOLIO_GITHUB_TOKEN", "ghp_shorthand");

            let config = load()?;
            assert_eq!(config.showcase.owner, "nested");
            assert_eq!(config.showcase.token.as_deref(), Some("ghp_nested"));
            Ok(())
        });
    }

    #[test]
    fn shorthands_do_not_leak_into_other_keys() {
        Jail::expect_with(|jail| {
            jail.set_env("FOLIO_GITHUB_API_BASE", "not a url");

            let config = load()?;
            assert_eq!(config.showcase.api_base, "https://api.github.com");
            Ok(())
        });
    }

    #[test]
    fn rejects_zero_limit() {
        Jail::expect_with(|jail| {
            jail.set_env("FOLIO_SHOWCASE__LIMIT", "0");

            assert!(load().is_err());
            Ok(())
        });
    }

    #[test]
    fn rejects_limit_above_page_size_cap() {
        Jail::expect_with(|jail| {
            jail.set_env("FOLIO_SHOWCASE__LIMIT", "101");

            assert!(load().is_err());
            Ok(())
        });
    }

    #[test]
    fn rejects_blank_owner() {
        Jail::expect_with(|jail| {
            jail.set_env("FOLIO_SHOWCASE__OWNER", "  ");

            assert!(load().is_err());
            Ok(())
        });
    }

    #[test]
    fn redacts_token_in_debug_output() {
        let config = ShowcaseConfig {
            token: Some("ghp_secret".to_string()),
            ..ShowcaseConfig::default()
        };

        let debug = format!("{config:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
