// ABOUTME: HTTP tests for chat session routes: open, send, transcript, and close
// ABOUTME: Uses a short reply delay so the delayed assistant reply can be observed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use glp1_companion::config::ServerConfig;
use glp1_companion::constants::chat::{GREETING, PROTEIN_REPLY};
use glp1_companion::resources::ServerResources;
use helpers::axum_test::AxumTestRequest;
use helpers::{test_resources, test_router, TEST_REPLY_DELAY_MS};
use serde_json::{json, Value};
use tokio::time::sleep;
use uuid::Uuid;

async fn open_session(resources: &Arc<ServerResources>) -> String {
    let response = AxumTestRequest::post("/api/chat/sessions")
        .send(test_router(resources))
        .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn test_new_session_starts_with_greeting() {
    let resources = test_resources();

    let response = AxumTestRequest::post("/api/chat/sessions")
        .send(test_router(&resources))
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["messages"][0]["sender"], "bot");
    assert_eq!(body["messages"][0]["text"], GREETING);
}

#[tokio::test]
async fn test_send_message_then_reply_arrives() {
    let resources = test_resources();
    let id = open_session(&resources).await;

    let response = AxumTestRequest::post(&format!("/api/chat/sessions/{id}/messages"))
        .json(&json!({ "text": "I need a protein recipe" }))
        .send(test_router(&resources))
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["message"]["sender"], "user");
    assert_eq!(body["reply_delay_ms"], TEST_REPLY_DELAY_MS);

    sleep(Duration::from_millis(TEST_REPLY_DELAY_MS * 10)).await;

    let transcript: Value = AxumTestRequest::get(&format!("/api/chat/sessions/{id}"))
        .send(test_router(&resources))
        .await
        .json();
    let messages = transcript["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["text"], "I need a protein recipe");
    assert_eq!(messages[2]["sender"], "bot");
    assert_eq!(messages[2]["text"], PROTEIN_REPLY);
}

#[tokio::test]
async fn test_blank_message_is_rejected() {
    let resources = test_resources();
    let id = open_session(&resources).await;

    let response = AxumTestRequest::post(&format!("/api/chat/sessions/{id}/messages"))
        .json(&json!({ "text": "   " }))
        .send(test_router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_close_session() {
    let resources = test_resources();
    let id = open_session(&resources).await;

    let first = AxumTestRequest::delete(&format!("/api/chat/sessions/{id}"))
        .send(test_router(&resources))
        .await;
    assert_eq!(first.status(), 204);

    let second = AxumTestRequest::delete(&format!("/api/chat/sessions/{id}"))
        .send(test_router(&resources))
        .await;
    assert_eq!(second.status(), 404);

    let lookup = AxumTestRequest::get(&format!("/api/chat/sessions/{id}"))
        .send(test_router(&resources))
        .await;
    assert_eq!(lookup.status(), 404);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let resources = test_resources();

    let response = AxumTestRequest::post(&format!(
        "/api/chat/sessions/{}/messages",
        Uuid::new_v4()
    ))
    .json(&json!({ "text": "hello" }))
    .send(test_router(&resources))
    .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_oldest_session_is_evicted_at_limit() {
    let config = ServerConfig::default()
        .with_chat_reply_delay_ms(TEST_REPLY_DELAY_MS)
        .with_max_chat_sessions(2);
    let resources = ServerResources::builder().with_config(config).build_arc();

    let first = open_session(&resources).await;
    let second = open_session(&resources).await;
    let third = open_session(&resources).await;
    assert_eq!(resources.chat_sessions.len(), 2);

    let evicted = AxumTestRequest::get(&format!("/api/chat/sessions/{first}"))
        .send(test_router(&resources))
        .await;
    assert_eq!(evicted.status(), 404);

    for id in [second, third] {
        let kept = AxumTestRequest::get(&format!("/api/chat/sessions/{id}"))
            .send(test_router(&resources))
            .await;
        assert_eq!(kept.status(), 200);
    }
}
