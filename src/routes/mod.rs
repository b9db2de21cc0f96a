// ABOUTME: Route module organization for the GLP-1 companion HTTP endpoints
// ABOUTME: Merges every domain router and wraps it in the tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the GLP-1 companion
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the library types in [`ServerResources`].

/// App navigation state routes
pub mod app;
/// Scripted chat routes
pub mod chat;
/// Education topic and hydration routes
pub mod education;
/// Health check routes
pub mod health;
/// Weekly meal plan routes
pub mod meal_plan;
/// Profile and profile editor routes
pub mod profile;
/// Recipe listing, detail, and toggle routes
pub mod recipes;
/// Suitability classification routes
pub mod suitability;

use std::sync::Arc;

use axum::Router;

pub use app::AppRoutes;
pub use chat::ChatRoutes;
pub use education::EducationRoutes;
pub use health::HealthRoutes;
pub use meal_plan::MealPlanRoutes;
pub use profile::ProfileRoutes;
pub use recipes::RecipeRoutes;
pub use suitability::SuitabilityRoutes;

use crate::middleware::{request_trace_layer, setup_cors};
use crate::resources::ServerResources;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(SuitabilityRoutes::routes())
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(ChatRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(EducationRoutes::routes(Arc::clone(&resources)))
        .merge(MealPlanRoutes::routes(Arc::clone(&resources)))
        .merge(AppRoutes::routes(resources))
        .layer(cors)
        .layer(request_trace_layer())
}
