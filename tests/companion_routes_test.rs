// ABOUTME: HTTP tests for health, suitability, education, meal plan, and app navigation routes
// ABOUTME: Each test builds fresh resources so state never leaks between cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::{test_resources, test_router};
use serde_json::{json, Value};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let resources = test_resources();

    let health: Value = AxumTestRequest::get("/health")
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "glp1-companion");

    let ready = AxumTestRequest::get("/ready")
        .send(test_router(&resources))
        .await;
    assert_eq!(ready.status(), 200);
}

// ============================================================================
// Suitability
// ============================================================================

#[tokio::test]
async fn test_classify_returns_tier_and_analysis() {
    let resources = test_resources();

    let response = AxumTestRequest::post("/api/suitability/classify")
        .json(&json!({ "protein": 28.0, "fibre": 5.0, "calories": 320.0 }))
        .send(test_router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["tier"], 2);
    assert_eq!(body["badge"]["variant"], "full");
    assert_eq!(body["badge"]["heading"], "Moderate GLP-1 Suitability");
    assert_eq!(body["high_protein"], false);
    assert_eq!(body["analysis"]["next_tier"], 3);
}

#[tokio::test]
async fn test_classify_rejects_negative_values() {
    let resources = test_resources();

    let response = AxumTestRequest::post("/api/suitability/classify")
        .json(&json!({ "protein": -1.0, "fibre": 5.0, "calories": 320.0 }))
        .send(test_router(&resources))
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_tiers_listed_highest_first() {
    let resources = test_resources();

    let body: Value = AxumTestRequest::get("/api/suitability/tiers")
        .send(test_router(&resources))
        .await
        .json();

    let tiers: Vec<u64> = body["tiers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|badge| badge["tier"].as_u64().unwrap())
        .collect();
    assert_eq!(tiers, vec![3, 2, 1]);
}

// ============================================================================
// Education
// ============================================================================

#[tokio::test]
async fn test_topics_and_lookup() {
    let resources = test_resources();

    let list: Value = AxumTestRequest::get("/api/education/topics")
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(list["topics"].as_array().unwrap().len(), 7);
    assert_eq!(list["topics"][0]["id"], "hydration");

    let topic = AxumTestRequest::get("/api/education/topics/goal-setting")
        .send(test_router(&resources))
        .await;
    assert_eq!(topic.status(), 200);

    let missing = AxumTestRequest::get("/api/education/topics/keto")
        .send(test_router(&resources))
        .await;
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn test_hydration_tracker() {
    let resources = test_resources();

    let start: Value = AxumTestRequest::get("/api/education/hydration")
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(start["filled"], 0);
    assert_eq!(start["total"], 10);

    let ticked: Value = AxumTestRequest::post("/api/education/hydration/3")
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(ticked["filled"], 1);
    assert_eq!(ticked["glasses"][3], true);

    let out_of_range = AxumTestRequest::post("/api/education/hydration/10")
        .send(test_router(&resources))
        .await;
    assert_eq!(out_of_range.status(), 400);
    let body: Value = out_of_range.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}

// ============================================================================
// Meal plan
// ============================================================================

#[tokio::test]
async fn test_meal_plan_assign_and_clear() {
    let resources = test_resources();

    let empty: Value = AxumTestRequest::get("/api/meal-plan")
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(empty["days"].as_array().unwrap().len(), 7);

    let assigned: Value = AxumTestRequest::put("/api/meal-plan/mon/lunch")
        .json(&json!({ "recipe_id": 1 }))
        .send(test_router(&resources))
        .await
        .json();
    let monday = &assigned["days"][0];
    assert_eq!(monday["day"], "Mon");
    assert_eq!(monday["total_calories"], 420.0);

    let cleared: Value = AxumTestRequest::delete("/api/meal-plan/Mon/Lunch")
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(cleared["days"][0]["total_calories"], 0.0);
}

#[tokio::test]
async fn test_meal_plan_rejects_bad_input() {
    let resources = test_resources();

    let unknown_recipe = AxumTestRequest::put("/api/meal-plan/Tue/Dinner")
        .json(&json!({ "recipe_id": 999 }))
        .send(test_router(&resources))
        .await;
    assert_eq!(unknown_recipe.status(), 404);

    let bad_day = AxumTestRequest::put("/api/meal-plan/Someday/Dinner")
        .json(&json!({ "recipe_id": 1 }))
        .send(test_router(&resources))
        .await;
    assert_eq!(bad_day.status(), 400);
}

// ============================================================================
// App navigation
// ============================================================================

#[tokio::test]
async fn test_app_starts_on_discover() {
    let resources = test_resources();

    let body: Value = AxumTestRequest::get("/api/app")
        .send(test_router(&resources))
        .await
        .json();

    assert_eq!(body["view"], "discover");
    assert_eq!(body["discover_tab"], "recipes");
    assert!(body["placeholder"].is_null());
}

#[tokio::test]
async fn test_navigation_and_placeholders() {
    let resources = test_resources();

    let scan: Value = AxumTestRequest::post("/api/app/navigate")
        .json(&json!({ "to": "view", "view": "scan" }))
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(scan["view"], "scan");
    assert_eq!(scan["placeholder"], "Coming soon");

    let profile: Value = AxumTestRequest::post("/api/app/navigate")
        .json(&json!({ "to": "profile_section", "section": "education" }))
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(profile["view"], "profile");
    assert_eq!(profile["profile_section"], "education");
    assert!(profile["placeholder"].is_null());
}

#[tokio::test]
async fn test_modals_open_and_close() {
    let resources = test_resources();

    let opened: Value = AxumTestRequest::post("/api/app/modals/chat/open")
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(opened["chat_open"], true);
    assert_eq!(opened["profile_management_open"], false);

    let closed: Value = AxumTestRequest::post("/api/app/modals/chat/close")
        .send(test_router(&resources))
        .await
        .json();
    assert_eq!(closed["chat_open"], false);

    let unknown = AxumTestRequest::post("/api/app/modals/settings/open")
        .send(test_router(&resources))
        .await;
    assert_eq!(unknown.status(), 400);
}
