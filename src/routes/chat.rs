// ABOUTME: Chat route handlers for the scripted nutrition assistant
// ABOUTME: Provides REST endpoints to open, read, message, and close chat sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Chat routes
//!
//! Posting a message returns the user message at once; the assistant reply
//! appears in the transcript after the configured delay.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use companion_core::models::ChatMessage;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::chat::ChatSession;
use crate::errors::AppError;
use crate::resources::ServerResources;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to send a message
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Message text
    pub text: String,
}

/// A session with its transcript
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session id
    pub id: Uuid,
    /// Transcript, oldest first
    pub messages: Vec<ChatMessage>,
}

impl SessionResponse {
    async fn from_session(session: &ChatSession) -> Self {
        Self {
            id: session.id(),
            messages: session.messages().await,
        }
    }
}

/// Response for a sent message
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// The stored user message
    pub message: ChatMessage,
    /// Milliseconds until the reply is appended
    pub reply_delay_ms: u64,
}

// ============================================================================
// Chat Routes
// ============================================================================

/// Chat routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/chat/sessions", post(Self::create_session))
            .route(
                "/api/chat/sessions/:session_id",
                get(Self::get_session).delete(Self::delete_session),
            )
            .route(
                "/api/chat/sessions/:session_id/messages",
                post(Self::send_message),
            )
            .with_state(resources)
    }

    /// Open a session; its transcript starts with the greeting
    async fn create_session(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let session = resources.open_chat_session();
        info!(session_id = %session.id(), "chat session opened");

        let response = SessionResponse::from_session(&session).await;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Get a session transcript
    async fn get_session(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let session = resources.chat_session(session_id)?;
        let response = SessionResponse::from_session(&session).await;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Close a session
    async fn delete_session(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        if resources.chat_sessions.remove(&session_id).is_none() {
            return Err(AppError::not_found("Chat session").with_resource_id(session_id.to_string()));
        }
        info!(%session_id, "chat session closed");
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Send a message; the reply follows after the session delay
    async fn send_message(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<SendMessageRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.chat_session(session_id)?;
        let message = session
            .submit(&request.text)
            .await
            .ok_or_else(|| AppError::invalid_input("Message text is empty"))?;

        let response = SendMessageResponse {
            message,
            reply_delay_ms: resources.config.chat_reply_delay_ms,
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }
}
