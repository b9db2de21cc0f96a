// ABOUTME: CORS layer configuration for the JSON API
// ABOUTME: Builds a tower-http CorsLayer from the configured origin allow-list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::{CorsOrigins, ServerConfig};

/// Configure CORS for a browser shell
///
/// `CORS_ORIGINS="*"` allows any origin. An explicit list is parsed into
/// header values; entries that are not valid header values are skipped, and a
/// list with no valid entry falls back to any origin.
///
/// ```bash
/// export CORS_ORIGINS="https://companion.example.com,http://localhost:5173"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = match &config.cors_origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| {
                    HeaderValue::from_str(origin)
                        .inspect_err(|_| warn!(%origin, "ignoring invalid CORS origin"))
                        .ok()
                })
                .collect();
            if origins.is_empty() {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(origins)
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
