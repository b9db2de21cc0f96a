// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads HTTP binding, chat reply delay, image placeholder, and CORS origins from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Configuration is environment-only: there is no config file. Every value
//! has a default so the service starts with an empty environment.

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::constants::{
    catalog::DEFAULT_IMAGE_PLACEHOLDER,
    chat::{DEFAULT_MAX_CHAT_SESSIONS, DEFAULT_REPLY_DELAY_MS},
};
use crate::errors::{AppError, AppResult};

/// Default bind address
const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
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

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorsOrigins {
    /// Any origin (`*`)
    Any,
    /// An explicit allow-list
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated origin list; `*` means any origin
    #[must_use]
    pub fn parse(origins: &str) -> Self {
        if origins.trim() == "*" {
            return Self::Any;
        }
        Self::List(
            origins
                .split(',')
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub http_host: IpAddr,
    /// HTTP API port
    pub http_port: u16,
    /// Delay before the scripted assistant replies (milliseconds)
    pub chat_reply_delay_ms: u64,
    /// Chat sessions kept before the oldest is evicted
    pub max_chat_sessions: usize,
    /// Image shown when a recipe image cannot be resolved
    pub image_placeholder: String,
    /// Allowed CORS origins
    pub cors_origins: CorsOrigins,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: IpAddr::from([127, 0, 0, 1]),
            http_port: DEFAULT_HTTP_PORT,
            chat_reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            max_chat_sessions: DEFAULT_MAX_CHAT_SESSIONS,
            image_placeholder: DEFAULT_IMAGE_PLACEHOLDER.to_owned(),
            cors_origins: CorsOrigins::Any,
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a variable is set to a value that cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let http_host = env_var_or("HTTP_HOST", DEFAULT_HTTP_HOST)
            .parse()
            .map_err(|e| AppError::config("Invalid HTTP_HOST value").with_source(e))?;
        let http_port = env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
            .parse()
            .map_err(|e| AppError::config("Invalid HTTP_PORT value").with_source(e))?;
        let chat_reply_delay_ms =
            env_var_or("CHAT_REPLY_DELAY_MS", &DEFAULT_REPLY_DELAY_MS.to_string())
                .parse()
                .map_err(|e| AppError::config("Invalid CHAT_REPLY_DELAY_MS value").with_source(e))?;

        let max_chat_sessions =
            env_var_or("MAX_CHAT_SESSIONS", &DEFAULT_MAX_CHAT_SESSIONS.to_string())
                .parse::<usize>()
                .ok()
                .filter(|max| *max > 0)
                .ok_or_else(|| AppError::config("MAX_CHAT_SESSIONS must be a positive integer"))?;

        let image_placeholder = env_var_or("IMAGE_PLACEHOLDER_URL", DEFAULT_IMAGE_PLACEHOLDER);
        validate_placeholder(&image_placeholder)?;

        let config = Self {
            http_host,
            http_port,
            chat_reply_delay_ms,
            max_chat_sessions,
            image_placeholder,
            cors_origins: CorsOrigins::parse(&env_var_or("CORS_ORIGINS", "*")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Override the HTTP port
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    /// Override the chat reply delay
    #[must_use]
    pub const fn with_chat_reply_delay_ms(mut self, delay_ms: u64) -> Self {
        self.chat_reply_delay_ms = delay_ms;
        self
    }

    /// Override the chat session limit; zero is raised to one
    #[must_use]
    pub fn with_max_chat_sessions(mut self, max: usize) -> Self {
        self.max_chat_sessions = max.max(1);
        self
    }

    /// Socket address the HTTP server binds to
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    /// Chat reply delay as a `Duration`
    #[must_use]
    pub const fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "GLP-1 Companion Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Chat Reply Delay: {}ms\n\
             - Max Chat Sessions: {}\n\
             - Image Placeholder: {}\n\
             - CORS Origins: {}",
            self.bind_addr(),
            self.environment,
            self.chat_reply_delay_ms,
            self.max_chat_sessions,
            self.image_placeholder,
            match &self.cors_origins {
                CorsOrigins::Any => "*".to_owned(),
                CorsOrigins::List(list) => list.join(", "),
            }
        )
    }
}

/// A placeholder is either an absolute URL or a path served by the front end
fn validate_placeholder(placeholder: &str) -> AppResult<()> {
    if placeholder.starts_with('/') || Url::parse(placeholder).is_ok() {
        return Ok(());
    }
    Err(AppError::config(format!(
        "Invalid IMAGE_PLACEHOLDER_URL value: {placeholder}"
    )))
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(CorsOrigins::parse("*"), CorsOrigins::Any);
        assert_eq!(
            CorsOrigins::parse("http://localhost:3000, https://app.example.com,"),
            CorsOrigins::List(vec![
                "http://localhost:3000".to_owned(),
                "https://app.example.com".to_owned()
            ])
        );
    }

    #[test]
    fn test_placeholder_validation() {
        assert!(validate_placeholder("/assets/placeholder.svg").is_ok());
        assert!(validate_placeholder("https://cdn.example.com/p.png").is_ok());
        assert!(validate_placeholder("not a url").is_err());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }
}
