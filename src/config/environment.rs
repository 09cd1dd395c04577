// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Validates required Clever credentials at startup and applies documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration, loaded once at process start.
//!
//! Required variables are checked in a single pass so a misconfigured
//! deployment reports every missing name at once instead of failing on the
//! first. The loaded configuration is immutable and passed explicitly to the
//! components that need it.

use anyhow::{bail, Result};
use std::env;
use std::fmt;

/// Default HTTP listen port when `PORT` is not set
pub const DEFAULT_HTTP_PORT: u16 = 3000;
/// Clever OAuth endpoint host
pub const DEFAULT_CLEVER_BASE_URL: &str = "https://clever.com";
/// Clever data API base, including the API version path
pub const DEFAULT_CLEVER_API_URL: &str = "https://api.clever.com/v3.0";

/// Environment variables that must be present and non-empty at startup
pub const REQUIRED_ENV_VARS: [&str; 3] = [
    "CLEVER_CLIENT_ID",
    "CLEVER_CLIENT_SECRET",
    "CLEVER_REDIRECT_URI",
];

/// Runtime environment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Clever OAuth application settings
#[derive(Debug, Clone)]
pub struct CleverConfig {
    /// OAuth client identifier issued by Clever
    pub client_id: String,
    /// OAuth client secret, never logged or sent to the browser
    pub client_secret: String,
    /// Redirect URI registered with Clever for the callback route
    pub redirect_uri: String,
    /// Host serving the OAuth authorize/token endpoints
    pub base_url: String,
    /// Base URL for the data API (`/me`, `/users/{id}`, `/districts/{id}`)
    pub api_url: String,
}

/// Server configuration, immutable after load
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Runtime environment label
    pub environment: Environment,
    /// Comma-separated CORS origin allowlist; empty or `*` allows any origin
    pub cors_allowed_origins: String,
    /// Clever application settings
    pub clever: CleverConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming every missing required variable. A variable
    /// set to the empty string counts as missing.
    pub fn from_env() -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_ENV_VARS
            .iter()
            .copied()
            .filter(|name| env::var(name).map_or(true, |value| value.is_empty()))
            .collect();
        if !missing.is_empty() {
            bail!(
                "Missing required environment variables: {}",
                missing.join(", ")
            );
        }

        let http_port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT")
                .or_else(|_| env::var("NODE_ENV"))
                .unwrap_or_default(),
        );

        Ok(Self {
            http_port,
            environment,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            clever: CleverConfig {
                client_id: env::var("CLEVER_CLIENT_ID")?,
                client_secret: env::var("CLEVER_CLIENT_SECRET")?,
                redirect_uri: env::var("CLEVER_REDIRECT_URI")?,
                base_url: env::var("CLEVER_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_CLEVER_BASE_URL.to_owned()),
                api_url: env::var("CLEVER_API_URL")
                    .unwrap_or_else(|_| DEFAULT_CLEVER_API_URL.to_owned()),
            },
        })
    }

    /// One-line startup summary with secrets redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} environment={} clever_client_id={} redirect_uri={} api_url={}",
            self.http_port,
            self.environment,
            self.clever.client_id,
            self.clever.redirect_uri,
            self.clever.api_url
        )
    }
}
