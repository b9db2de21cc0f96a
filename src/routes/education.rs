// ABOUTME: Education route handlers: topic catalog and the daily hydration tracker
// ABOUTME: Glass toggles outside the tracker's range are rejected with VALUE_OUT_OF_RANGE
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
use tracing::debug;

use crate::education::{self, hydration::HydrationSummary, Topic, TopicId};
use crate::errors::AppError;
use crate::resources::ServerResources;

/// Response for the topic list
#[derive(Debug, Serialize)]
pub struct TopicListResponse {
    /// Topics in menu order
    pub topics: &'static [Topic],
}

/// Education routes handler
pub struct EducationRoutes;

impl EducationRoutes {
    /// Create all education routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/education/topics", get(Self::list_topics))
            .route("/api/education/topics/:topic_id", get(Self::get_topic))
            .route("/api/education/hydration", get(Self::get_hydration))
            .route("/api/education/hydration/:glass", post(Self::toggle_glass))
            .with_state(resources)
    }

    /// List every topic
    async fn list_topics() -> Result<Response, AppError> {
        let response = TopicListResponse {
            topics: education::topics(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Get one topic
    async fn get_topic(Path(topic_id): Path<String>) -> Result<Response, AppError> {
        let id = TopicId::parse(&topic_id).ok_or_else(|| {
            AppError::not_found("Education topic").with_resource_id(topic_id)
        })?;
        Ok((StatusCode::OK, Json(education::topic(id))).into_response())
    }

    /// Get today's hydration progress
    async fn get_hydration(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let summary: HydrationSummary = resources.hydration.read().await.summary();
        Ok((StatusCode::OK, Json(summary)).into_response())
    }

    /// Tick or untick one glass
    async fn toggle_glass(
        State(resources): State<Arc<ServerResources>>,
        Path(glass): Path<usize>,
    ) -> Result<Response, AppError> {
        let summary = {
            let mut tracker = resources.hydration.write().await;
            let filled = tracker.toggle(glass)?;
            debug!(glass, filled, "glass toggled");
            tracker.summary()
        };
        Ok((StatusCode::OK, Json(summary)).into_response())
    }
}
