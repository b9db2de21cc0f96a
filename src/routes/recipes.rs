// ABOUTME: Recipe route handlers: filtered listing, filter chips, detail, and card toggles
// ABOUTME: Every recipe response carries the suitability tier recomputed from its nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! Listing query parameters:
//! - `filters`: comma-separated active tags
//! - `match`: `any` (default) or `all`
//! - `q`: case-insensitive title search
//! - `favorites_only`: restrict to favourited recipes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use companion_core::models::RecipeId;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{FilterMode, RecipeCard, RecipeDetail, RecipeQuery, TagFilter};
use crate::constants::catalog::FILTER_CHIPS;
use crate::errors::AppError;
use crate::favorites::{RecipeFlag, RecipeFlags};
use crate::resources::ServerResources;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing recipes
#[derive(Debug, Default, Deserialize)]
pub struct ListRecipesQuery {
    /// Comma-separated active filter tags
    #[serde(default)]
    pub filters: Option<String>,
    /// How active filters combine
    #[serde(default, rename = "match")]
    pub mode: FilterMode,
    /// Title search text
    #[serde(default)]
    pub q: Option<String>,
    /// Only favourited recipes
    #[serde(default)]
    pub favorites_only: bool,
}

/// Response for recipe listings
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    /// Matching recipes in display order
    pub recipes: Vec<RecipeCard>,
    /// Number of matches
    pub total: usize,
    /// Filters applied, sorted
    pub active_filters: Vec<String>,
    /// Filter combination mode
    pub mode: FilterMode,
}

/// Response for the filter chip list
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterChipsResponse {
    /// Chip labels in display order
    pub filters: Vec<String>,
}

/// Response for a card toggle
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// Recipe toggled
    pub id: RecipeId,
    /// Toggle flipped
    pub flag: RecipeFlag,
    /// Whether the flag is set afterwards
    pub active: bool,
    /// Every toggle of the recipe afterwards
    pub flags: RecipeFlags,
}

// ============================================================================
// Recipe Routes
// ============================================================================

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::list_recipes))
            .route("/api/recipes/filters", get(Self::list_filters))
            .route("/api/recipes/:recipe_id", get(Self::get_recipe))
            .route("/api/recipes/:recipe_id/:flag", post(Self::toggle_flag))
            .with_state(resources)
    }

    /// List recipes matching the query
    async fn list_recipes(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListRecipesQuery>,
    ) -> Result<Response, AppError> {
        let filter = query
            .filters
            .as_deref()
            .map(|raw| TagFilter::from_tags(raw.split(',').map(str::trim).filter(|t| !t.is_empty())))
            .unwrap_or_default();
        let favorites = resources.favorites.read().await.favorites().clone();

        let mut recipe_query = RecipeQuery::new(&filter).with_mode(query.mode);
        if let Some(text) = query.q.as_deref() {
            recipe_query = recipe_query.with_search(text);
        }
        if query.favorites_only {
            recipe_query = recipe_query.with_only(&favorites);
        }

        let matches: Vec<RecipeId> = resources
            .catalog
            .search(&recipe_query)
            .into_iter()
            .map(|recipe| recipe.id)
            .collect();

        let mut recipes = Vec::with_capacity(matches.len());
        for id in matches {
            let recipe = resources.recipe(id)?;
            let flags = resources.recipe_flags(id).await;
            recipes.push(RecipeCard::new(recipe, resources.images.as_ref(), flags));
        }

        let response = RecipeListResponse {
            total: recipes.len(),
            recipes,
            active_filters: filter.active().map(ToOwned::to_owned).collect(),
            mode: query.mode,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// List the filter chips
    async fn list_filters() -> Result<Response, AppError> {
        let response = FilterChipsResponse {
            filters: FILTER_CHIPS.iter().map(|&chip| chip.to_owned()).collect(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Get one recipe with its nutrition facts
    async fn get_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path(recipe_id): Path<RecipeId>,
    ) -> Result<Response, AppError> {
        let recipe = resources.recipe(recipe_id)?;
        let flags = resources.recipe_flags(recipe_id).await;
        let response = RecipeDetail::new(recipe, resources.images.as_ref(), flags);

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Flip a card toggle
    async fn toggle_flag(
        State(resources): State<Arc<ServerResources>>,
        Path((recipe_id, flag)): Path<(RecipeId, RecipeFlag)>,
    ) -> Result<Response, AppError> {
        let recipe = resources.recipe(recipe_id)?;

        let active = match flag {
            RecipeFlag::Favorite => resources.favorites.write().await.toggle_favorite(recipe_id),
            RecipeFlag::Saved => resources.favorites.write().await.toggle_saved(recipe_id),
            RecipeFlag::MealPlan => resources.meal_plan.write().await.toggle_recipe(recipe)?,
        };
        info!(recipe_id, ?flag, active, "recipe toggled");

        let response = ToggleResponse {
            id: recipe_id,
            flag,
            active,
            flags: resources.recipe_flags(recipe_id).await,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
