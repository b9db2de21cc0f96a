// ABOUTME: Persistence target for the saved dietary profile
// ABOUTME: Async trait seam with an in-memory implementation guarded by a tokio RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use companion_core::models::ProfileData;
use tokio::sync::RwLock;

use crate::errors::AppResult;

/// Where saved profiles go
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The last saved profile, if any
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the backing storage cannot be read
    async fn load(&self) -> AppResult<Option<ProfileData>>;

    /// Replace the saved profile
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the backing storage cannot be written
    async fn save(&self, profile: ProfileData) -> AppResult<()>;
}

/// Process-local profile store
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profile: Arc<RwLock<Option<ProfileData>>>,
}

impl InMemoryProfileStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `profile`
    #[must_use]
    pub fn with_profile(profile: ProfileData) -> Self {
        Self {
            profile: Arc::new(RwLock::new(Some(profile))),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load(&self) -> AppResult<Option<ProfileData>> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: ProfileData) -> AppResult<()> {
        *self.profile.write().await = Some(profile);
        Ok(())
    }
}
