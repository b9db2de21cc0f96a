// ABOUTME: Profile route handlers: stored profile, option table, and the editor lifecycle
// ABOUTME: An editor is opened, edited through actions, then either saved or cancelled exactly once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile routes
//!
//! Editors are held server-side between requests. Saving hands the draft to
//! the profile store; cancelling drops it. Either closes the editor, and
//! later requests for it return `RESOURCE_NOT_FOUND`. A save the store
//! rejects leaves the editor open.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use companion_core::models::ProfileData;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::{EditAction, ProfileOptions};
use crate::resources::{editor_not_found, ServerResources};

/// Response for the stored profile
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Stored profile, if one was ever saved
    pub profile: Option<ProfileData>,
}

/// An open editor and its draft
#[derive(Debug, Serialize, Deserialize)]
pub struct EditorResponse {
    /// Editor id
    pub id: Uuid,
    /// Current draft
    pub draft: ProfileData,
}

/// Profile routes handler
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", get(Self::get_profile))
            .route("/api/profile/options", get(Self::get_options))
            .route("/api/profile/editor", post(Self::open_editor))
            .route("/api/profile/editor/:editor_id", get(Self::get_editor))
            .route(
                "/api/profile/editor/:editor_id/actions",
                post(Self::apply_action),
            )
            .route("/api/profile/editor/:editor_id/save", post(Self::save_editor))
            .route(
                "/api/profile/editor/:editor_id/cancel",
                post(Self::cancel_editor),
            )
            .with_state(resources)
    }

    /// Get the stored profile
    async fn get_profile(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = ProfileResponse {
            profile: resources.profile_store.load().await?,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Get every selectable option
    async fn get_options() -> Result<Response, AppError> {
        Ok((StatusCode::OK, Json(ProfileOptions::new())).into_response())
    }

    /// Open an editor on the stored profile
    async fn open_editor(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let (id, editor) = resources.open_editor().await?;
        info!(editor_id = %id, "profile editor opened");

        let response = EditorResponse {
            id,
            draft: editor.draft().clone(),
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Get an editor's draft
    async fn get_editor(
        State(resources): State<Arc<ServerResources>>,
        Path(editor_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let draft = resources
            .editors
            .get(&editor_id)
            .map(|editor| editor.draft().clone())
            .ok_or_else(|| editor_not_found(editor_id))?;

        let response = EditorResponse {
            id: editor_id,
            draft,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Apply one edit to the draft
    async fn apply_action(
        State(resources): State<Arc<ServerResources>>,
        Path(editor_id): Path<Uuid>,
        Json(action): Json<EditAction>,
    ) -> Result<Response, AppError> {
        let draft = {
            let mut editor = resources
                .editors
                .get_mut(&editor_id)
                .ok_or_else(|| editor_not_found(editor_id))?;
            editor.apply(action);
            editor.draft().clone()
        };

        let response = EditorResponse {
            id: editor_id,
            draft,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Save the draft and close the editor
    async fn save_editor(
        State(resources): State<Arc<ServerResources>>,
        Path(editor_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let editor = resources.take_editor(editor_id)?;
        // A failed save leaves the editor open with its draft intact
        let profile = match editor.clone().save(resources.profile_store.as_ref()).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(%editor_id, error = %e, "profile save failed, editor kept open");
                resources.restore_editor(editor_id, editor);
                return Err(e);
            }
        };

        let response = ProfileResponse {
            profile: Some(profile),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Discard the draft and close the editor
    async fn cancel_editor(
        State(resources): State<Arc<ServerResources>>,
        Path(editor_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        resources.take_editor(editor_id)?.cancel();
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
