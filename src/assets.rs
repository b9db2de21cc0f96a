// ABOUTME: Image asset resolution with a placeholder fallback
// ABOUTME: Absolute http(s) URLs with a host pass through; anything else resolves to the placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;
use url::Url;

/// Turns a recipe's image reference into something displayable
///
/// Resolution never fails: unusable references map to a placeholder.
pub trait ImageResolver: Send + Sync {
    /// Displayable image location for `reference`
    fn resolve(&self, reference: &str) -> String;
}

/// Resolver that accepts remote images and falls back to a fixed placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImageResolver {
    placeholder: String,
}

impl FallbackImageResolver {
    /// Resolver falling back to `placeholder`
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    /// The fallback image
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl ImageResolver for FallbackImageResolver {
    fn resolve(&self, reference: &str) -> String {
        match Url::parse(reference.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
                url.into()
            }
            _ => {
                debug!(reference, "image unavailable, using placeholder");
                self.placeholder.clone()
            }
        }
    }
}
