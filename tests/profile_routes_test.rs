// ABOUTME: HTTP tests for the profile routes and the editor lifecycle over HTTP
// ABOUTME: Verifies save persists, cancel discards, and a closed editor cannot be reused
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use glp1_companion::errors::{AppError, AppResult};
use glp1_companion::models::ProfileData;
use glp1_companion::profile::ProfileStore;
use glp1_companion::resources::ServerResources;
use helpers::axum_test::AxumTestRequest;
use helpers::{test_resources, test_router};
use serde_json::{json, Value};

/// Store that reads as empty and rejects every write
struct ReadOnlyStore;

#[async_trait]
impl ProfileStore for ReadOnlyStore {
    async fn load(&self) -> AppResult<Option<ProfileData>> {
        Ok(None)
    }

    async fn save(&self, _profile: ProfileData) -> AppResult<()> {
        Err(AppError::storage("profile storage is read-only"))
    }
}

async fn open_editor(resources: &Arc<ServerResources>) -> String {
    let response = AxumTestRequest::post("/api/profile/editor")
        .send(test_router(resources))
        .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_owned()
}

async fn act(resources: &Arc<ServerResources>, id: &str, action: &Value) -> Value {
    let response = AxumTestRequest::post(&format!("/api/profile/editor/{id}/actions"))
        .json(action)
        .send(test_router(resources))
        .await;
    assert_eq!(response.status(), 200);
    response.json()
}

async fn saved_profile(resources: &Arc<ServerResources>) -> Value {
    let body: Value = AxumTestRequest::get("/api/profile")
        .send(test_router(resources))
        .await
        .json();
    body["profile"].clone()
}

#[tokio::test]
async fn test_no_profile_before_first_save() {
    let resources = test_resources();
    assert!(saved_profile(&resources).await.is_null());
}

#[tokio::test]
async fn test_options_list_every_group() {
    let resources = test_resources();

    let response = AxumTestRequest::get("/api/profile/options")
        .send(test_router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["core_diets"].as_array().unwrap().len(), 6);
    assert_eq!(body["allergens"].as_array().unwrap().len(), 11);
    assert_eq!(body["symptoms"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_save_persists_draft() {
    let resources = test_resources();
    let id = open_editor(&resources).await;

    act(&resources, &id, &json!({ "action": "select_core_diet", "diet": "vegan" })).await;
    act(&resources, &id, &json!({ "action": "add_custom_allergen", "text": "Sesame" })).await;
    let draft = act(&resources, &id, &json!({ "action": "add_custom_allergen", "text": "sesame" })).await;
    assert_eq!(draft["draft"]["custom_allergens"], json!(["Sesame"]));

    let response = AxumTestRequest::post(&format!("/api/profile/editor/{id}/save"))
        .send(test_router(&resources))
        .await;
    assert_eq!(response.status(), 200);

    let profile = saved_profile(&resources).await;
    assert_eq!(profile["core_diet"], "vegan");
    assert_eq!(profile["custom_allergens"], json!(["Sesame"]));
}

#[tokio::test]
async fn test_cancel_discards_draft() {
    let resources = test_resources();
    let id = open_editor(&resources).await;

    act(&resources, &id, &json!({ "action": "set_on_glp1", "value": true })).await;

    let response = AxumTestRequest::post(&format!("/api/profile/editor/{id}/cancel"))
        .send(test_router(&resources))
        .await;
    assert_eq!(response.status(), 204);

    assert!(saved_profile(&resources).await.is_null());
}

#[tokio::test]
async fn test_closed_editor_cannot_be_reused() {
    let resources = test_resources();
    let id = open_editor(&resources).await;

    let first = AxumTestRequest::post(&format!("/api/profile/editor/{id}/save"))
        .send(test_router(&resources))
        .await;
    assert_eq!(first.status(), 200);

    for path in ["save", "cancel"] {
        let again = AxumTestRequest::post(&format!("/api/profile/editor/{id}/{path}"))
            .send(test_router(&resources))
            .await;
        assert_eq!(again.status(), 404);
    }

    let edit = AxumTestRequest::post(&format!("/api/profile/editor/{id}/actions"))
        .json(&json!({ "action": "clear_core_diet" }))
        .send(test_router(&resources))
        .await;
    assert_eq!(edit.status(), 404);
}

#[tokio::test]
async fn test_editor_opens_on_saved_profile() {
    let resources = test_resources();

    let first = open_editor(&resources).await;
    act(&resources, &first, &json!({ "action": "toggle_symptom", "tag": "fatigue" })).await;
    AxumTestRequest::post(&format!("/api/profile/editor/{first}/save"))
        .send(test_router(&resources))
        .await;

    let second = open_editor(&resources).await;
    let body: Value = AxumTestRequest::get(&format!("/api/profile/editor/{second}"))
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(body["draft"]["symptoms"], json!(["fatigue"]));
}

#[tokio::test]
async fn test_closing_profile_modal_discards_open_editors() {
    let resources = test_resources();
    let first = open_editor(&resources).await;
    open_editor(&resources).await;
    act(&resources, &first, &json!({ "action": "set_on_glp1", "value": true })).await;
    assert_eq!(resources.editors.len(), 2);

    let closed = AxumTestRequest::post("/api/app/modals/profile-management/close")
        .send(test_router(&resources))
        .await;
    assert_eq!(closed.status(), 200);
    assert_eq!(resources.editors.len(), 0);

    let lookup = AxumTestRequest::get(&format!("/api/profile/editor/{first}"))
        .send(test_router(&resources))
        .await;
    assert_eq!(lookup.status(), 404);
    assert!(saved_profile(&resources).await.is_null());
}

#[tokio::test]
async fn test_closing_chat_modal_keeps_editors() {
    let resources = test_resources();
    open_editor(&resources).await;

    AxumTestRequest::post("/api/app/modals/chat/close")
        .send(test_router(&resources))
        .await;

    assert_eq!(resources.editors.len(), 1);
}

#[tokio::test]
async fn test_failed_save_keeps_editor_open() {
    let resources = ServerResources::builder()
        .with_profile_store(Arc::new(ReadOnlyStore))
        .build_arc();
    let id = open_editor(&resources).await;
    act(&resources, &id, &json!({ "action": "select_core_diet", "diet": "vegan" })).await;

    let response = AxumTestRequest::post(&format!("/api/profile/editor/{id}/save"))
        .send(test_router(&resources))
        .await;
    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "STORAGE_ERROR");

    let editor: Value = AxumTestRequest::get(&format!("/api/profile/editor/{id}"))
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(editor["draft"]["core_diet"], "vegan");

    let cancel = AxumTestRequest::post(&format!("/api/profile/editor/{id}/cancel"))
        .send(test_router(&resources))
        .await;
    assert_eq!(cancel.status(), 204);
}
