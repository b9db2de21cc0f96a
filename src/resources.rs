// ABOUTME: Shared resource container handed to every HTTP handler
// ABOUTME: Holds the collaborators behind their traits plus the per-process session and UI state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! One [`ServerResources`] is built at startup and shared as
//! `Arc<ServerResources>`. Chat sessions and open profile editors live in
//! `DashMap`s keyed by id; the single-user UI state sits behind tokio locks.

use std::sync::Arc;

use companion_core::models::{Recipe, RecipeId};
use dashmap::DashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::app::AppState;
use crate::assets::{FallbackImageResolver, ImageResolver};
use crate::catalog::{RecipeSource, StaticCatalog};
use crate::chat::{ChatResponder, ChatSession, ScriptedResponder};
use crate::config::ServerConfig;
use crate::education::HydrationTracker;
use crate::errors::{AppError, AppResult};
use crate::favorites::{Favorites, RecipeFlags};
use crate::meal_plan::MealPlan;
use crate::profile::{InMemoryProfileStore, ProfileEditor, ProfileStore};

/// Centralized resource container
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recipe content
    pub catalog: Arc<dyn RecipeSource>,
    /// Image resolution
    pub images: Arc<dyn ImageResolver>,
    /// Profile persistence target
    pub profile_store: Arc<dyn ProfileStore>,
    /// Chat reply source
    pub responder: Arc<dyn ChatResponder>,
    /// Live chat sessions
    pub chat_sessions: DashMap<Uuid, ChatSession>,
    /// Open profile editors
    pub editors: DashMap<Uuid, ProfileEditor>,
    /// Favourite and saved recipes
    pub favorites: RwLock<Favorites>,
    /// Weekly plan
    pub meal_plan: RwLock<MealPlan>,
    /// Today's glasses
    pub hydration: RwLock<HydrationTracker>,
    /// Navigation state
    pub app_state: RwLock<AppState>,
}

impl ServerResources {
    /// Create a new builder for `ServerResources`
    #[must_use]
    pub fn builder() -> ServerResourcesBuilder {
        ServerResourcesBuilder::new()
    }

    /// Look up a recipe
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown id
    pub fn recipe(&self, id: RecipeId) -> AppResult<&Recipe> {
        self.catalog.get(id).ok_or_else(|| {
            AppError::not_found(format!("Recipe {id}")).with_resource_id(id.to_string())
        })
    }

    /// Current toggle state of a recipe card
    pub async fn recipe_flags(&self, id: RecipeId) -> RecipeFlags {
        let favorites = self.favorites.read().await;
        let in_meal_plan = self.meal_plan.read().await.contains(id);
        RecipeFlags {
            favorite: favorites.is_favorite(id),
            saved: favorites.is_saved(id),
            in_meal_plan,
        }
    }

    /// Start a chat session using the configured responder and delay
    ///
    /// At most `max_chat_sessions` sessions are kept; the oldest ones are
    /// closed to make room.
    #[must_use]
    pub fn open_chat_session(&self) -> ChatSession {
        while self.chat_sessions.len() >= self.config.max_chat_sessions.max(1) {
            let oldest = self
                .chat_sessions
                .iter()
                .min_by_key(|entry| entry.value().sequence())
                .map(|entry| *entry.key());
            let Some(oldest) = oldest else {
                break;
            };
            self.chat_sessions.remove(&oldest);
            debug!(session_id = %oldest, "oldest chat session evicted");
        }

        let session = ChatSession::new(
            Arc::clone(&self.responder),
            self.config.chat_reply_delay(),
        );
        self.chat_sessions.insert(session.id(), session.clone());
        session
    }

    /// Look up a chat session
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown session
    pub fn chat_session(&self, id: Uuid) -> AppResult<ChatSession> {
        self.chat_sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                AppError::not_found("Chat session").with_resource_id(id.to_string())
            })
    }

    /// Open a profile editor on the stored profile; returns its id
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store cannot be read
    pub async fn open_editor(&self) -> AppResult<(Uuid, ProfileEditor)> {
        let editor = ProfileEditor::open(self.profile_store.load().await?);
        let id = Uuid::new_v4();
        self.editors.insert(id, editor.clone());
        Ok((id, editor))
    }

    /// Put an editor back under its id, e.g. after a failed save
    pub fn restore_editor(&self, id: Uuid, editor: ProfileEditor) {
        self.editors.insert(id, editor);
    }

    /// Discard every open editor; returns how many were dropped
    pub fn discard_editors(&self) -> usize {
        let discarded = self.editors.len();
        self.editors.clear();
        discarded
    }

    /// Take an open editor out of the registry
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown or already closed editor
    pub fn take_editor(&self, id: Uuid) -> AppResult<ProfileEditor> {
        self.editors
            .remove(&id)
            .map(|(_, editor)| editor)
            .ok_or_else(|| editor_not_found(id))
    }
}

pub(crate) fn editor_not_found(id: Uuid) -> AppError {
    AppError::not_found("Profile editor").with_resource_id(id.to_string())
}

/// Builder for `ServerResources`; every collaborator has a default
pub struct ServerResourcesBuilder {
    config: Option<ServerConfig>,
    catalog: Option<Arc<dyn RecipeSource>>,
    images: Option<Arc<dyn ImageResolver>>,
    profile_store: Option<Arc<dyn ProfileStore>>,
    responder: Option<Arc<dyn ChatResponder>>,
}

impl ServerResourcesBuilder {
    /// Builder with nothing set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: None,
            catalog: None,
            images: None,
            profile_store: None,
            responder: None,
        }
    }

    /// Set the server configuration
    #[must_use]
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the recipe source
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn RecipeSource>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the image resolver
    #[must_use]
    pub fn with_images(mut self, images: Arc<dyn ImageResolver>) -> Self {
        self.images = Some(images);
        self
    }

    /// Set the profile store
    #[must_use]
    pub fn with_profile_store(mut self, store: Arc<dyn ProfileStore>) -> Self {
        self.profile_store = Some(store);
        self
    }

    /// Set the chat responder
    #[must_use]
    pub fn with_responder(mut self, responder: Arc<dyn ChatResponder>) -> Self {
        self.responder = Some(responder);
        self
    }

    /// Build the `ServerResources`
    ///
    /// Unset collaborators default to the seed catalog, the placeholder image
    /// resolver from the config, an in-memory profile store, and the scripted
    /// responder.
    #[must_use]
    pub fn build(self) -> ServerResources {
        let config = self.config.unwrap_or_default();
        let images = self.images.unwrap_or_else(|| {
            Arc::new(FallbackImageResolver::new(config.image_placeholder.clone()))
        });

        ServerResources {
            catalog: self
                .catalog
                .unwrap_or_else(|| Arc::new(StaticCatalog::seeded())),
            images,
            profile_store: self
                .profile_store
                .unwrap_or_else(|| Arc::new(InMemoryProfileStore::new())),
            responder: self
                .responder
                .unwrap_or_else(|| Arc::new(ScriptedResponder)),
            config: Arc::new(config),
            chat_sessions: DashMap::new(),
            editors: DashMap::new(),
            favorites: RwLock::new(Favorites::new()),
            meal_plan: RwLock::new(MealPlan::new()),
            hydration: RwLock::new(HydrationTracker::new()),
            app_state: RwLock::new(AppState::new()),
        }
    }

    /// Build the `ServerResources` wrapped in an `Arc`
    #[must_use]
    pub fn build_arc(self) -> Arc<ServerResources> {
        Arc::new(self.build())
    }
}

impl Default for ServerResourcesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_editor_is_taken_once() {
        let resources = ServerResources::builder().build();
        let (id, _) = resources.open_editor().await.unwrap();

        assert!(resources.take_editor(id).is_ok());
        assert!(resources.take_editor(id).is_err());
    }

    #[tokio::test]
    async fn test_discard_editors_empties_registry() {
        let resources = ServerResources::builder().build();
        resources.open_editor().await.unwrap();
        resources.open_editor().await.unwrap();

        assert_eq!(resources.discard_editors(), 2);
        assert!(resources.editors.is_empty());
    }

    #[tokio::test]
    async fn test_chat_sessions_are_capped() {
        let config = ServerConfig::default().with_max_chat_sessions(2);
        let resources = ServerResources::builder().with_config(config).build();

        let first = resources.open_chat_session();
        let second = resources.open_chat_session();
        let third = resources.open_chat_session();

        assert_eq!(resources.chat_sessions.len(), 2);
        assert!(resources.chat_session(first.id()).is_err());
        assert!(resources.chat_session(second.id()).is_ok());
        assert!(resources.chat_session(third.id()).is_ok());
    }

    #[tokio::test]
    async fn test_flags_follow_meal_plan() {
        let resources = ServerResources::builder().build();
        resources.meal_plan.write().await.add_to_first_free(3, None);

        let flags = resources.recipe_flags(3).await;
        assert!(flags.in_meal_plan);
        assert!(!flags.favorite);
    }
}
