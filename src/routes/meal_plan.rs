// ABOUTME: Meal plan route handlers: weekly grid view and per-slot assignment
// ABOUTME: Day and slot path segments are parsed case-insensitively; unknown recipes are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use companion_core::models::RecipeId;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::meal_plan::{Day, MealSlot, PlanDay};
use crate::resources::ServerResources;

/// Request to fill a slot
#[derive(Debug, Deserialize)]
pub struct AssignMealRequest {
    /// Recipe to plan
    pub recipe_id: RecipeId,
}

/// Response for the weekly grid
#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    /// Monday to Sunday
    pub days: Vec<PlanDay>,
}

/// Meal plan routes handler
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/meal-plan", get(Self::get_plan))
            .route(
                "/api/meal-plan/:day/:slot",
                put(Self::assign_meal).delete(Self::clear_meal),
            )
            .with_state(resources)
    }

    fn parse_slot(day: &str, slot: &str) -> AppResult<(Day, MealSlot)> {
        Ok((day.parse()?, slot.parse()?))
    }

    async fn plan_response(resources: &ServerResources) -> MealPlanResponse {
        MealPlanResponse {
            days: resources.meal_plan.read().await.view(resources.catalog.as_ref()),
        }
    }

    /// Get the weekly grid
    async fn get_plan(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = Self::plan_response(&resources).await;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Put a recipe in a slot
    async fn assign_meal(
        State(resources): State<Arc<ServerResources>>,
        Path((day, slot)): Path<(String, String)>,
        Json(request): Json<AssignMealRequest>,
    ) -> Result<Response, AppError> {
        let (day, slot) = Self::parse_slot(&day, &slot)?;
        let replaced = resources.meal_plan.write().await.assign(
            resources.catalog.as_ref(),
            day,
            slot,
            request.recipe_id,
        )?;
        info!(
            day = day.label(),
            slot = slot.label(),
            recipe_id = request.recipe_id,
            ?replaced,
            "meal slot filled"
        );

        let response = Self::plan_response(&resources).await;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Empty a slot
    async fn clear_meal(
        State(resources): State<Arc<ServerResources>>,
        Path((day, slot)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let (day, slot) = Self::parse_slot(&day, &slot)?;
        resources.meal_plan.write().await.clear(day, slot);

        let response = Self::plan_response(&resources).await;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
