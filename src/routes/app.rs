// ABOUTME: App state route handlers: current view, navigation, and modal dialogs
// ABOUTME: Lets a browser shell mirror the view router held server-side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::app::{AppState, Modal, Navigation};
use crate::errors::AppError;
use crate::resources::ServerResources;

/// App state plus what the current screen shows
#[derive(Debug, Serialize)]
pub struct AppStateResponse {
    /// Navigation state
    #[serde(flatten)]
    pub state: AppState,
    /// Placeholder text when the screen is not built yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl From<AppState> for AppStateResponse {
    fn from(state: AppState) -> Self {
        Self {
            placeholder: state.placeholder(),
            state,
        }
    }
}

/// App state routes handler
pub struct AppRoutes;

impl AppRoutes {
    /// Create all app state routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/app", get(Self::get_state))
            .route("/api/app/navigate", post(Self::navigate))
            .route("/api/app/modals/:modal/open", post(Self::open_modal))
            .route("/api/app/modals/:modal/close", post(Self::close_modal))
            .with_state(resources)
    }

    /// Get the navigation state
    async fn get_state(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let state = *resources.app_state.read().await;
        Ok((StatusCode::OK, Json(AppStateResponse::from(state))).into_response())
    }

    /// Apply a navigation request
    async fn navigate(
        State(resources): State<Arc<ServerResources>>,
        Json(navigation): Json<Navigation>,
    ) -> Result<Response, AppError> {
        let state = {
            let mut app = resources.app_state.write().await;
            app.apply(navigation);
            *app
        };
        Ok((StatusCode::OK, Json(AppStateResponse::from(state))).into_response())
    }

    /// Open a dialog
    async fn open_modal(
        State(resources): State<Arc<ServerResources>>,
        Path(modal): Path<Modal>,
    ) -> Result<Response, AppError> {
        let state = {
            let mut app = resources.app_state.write().await;
            app.open(modal);
            *app
        };
        Ok((StatusCode::OK, Json(AppStateResponse::from(state))).into_response())
    }

    /// Close a dialog
    ///
    /// Closing profile management discards any editor still open, the same
    /// as cancelling it.
    async fn close_modal(
        State(resources): State<Arc<ServerResources>>,
        Path(modal): Path<Modal>,
    ) -> Result<Response, AppError> {
        if modal == Modal::ProfileManagement {
            let discarded = resources.discard_editors();
            if discarded > 0 {
                info!(discarded, "profile edits discarded on close");
            }
        }

        let state = {
            let mut app = resources.app_state.write().await;
            app.close(modal);
            *app
        };
        Ok((StatusCode::OK, Json(AppStateResponse::from(state))).into_response())
    }
}
