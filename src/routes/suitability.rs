// ABOUTME: Suitability route handlers: classify a nutrient triple and list the tier badges
// ABOUTME: Rejects negative or non-finite nutrients before they reach the classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use companion_core::models::{CoreNutrients, SuitabilityTier};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intelligence::{BadgeVariant, BadgeView, SuitabilityBadge, ThresholdAnalysis};

/// Request to classify a meal
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Protein per serving (g)
    pub protein: f64,
    /// Fibre per serving (g)
    pub fibre: f64,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Badge placement to render
    #[serde(default)]
    pub variant: BadgeVariant,
}

/// Response for a classification
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// Tier level (1-3)
    pub tier: SuitabilityTier,
    /// Badge for the requested placement
    pub badge: BadgeView,
    /// Whether the "High Protein" chip applies
    pub high_protein: bool,
    /// Thresholds met and missed
    pub analysis: ThresholdAnalysis,
}

/// Response for the badge table
#[derive(Debug, Serialize)]
pub struct TiersResponse {
    /// Badges, highest tier first
    pub tiers: Vec<&'static SuitabilityBadge>,
}

/// Suitability routes handler
pub struct SuitabilityRoutes;

impl SuitabilityRoutes {
    /// Create all suitability routes
    pub fn routes() -> Router {
        Router::new()
            .route("/api/suitability/classify", post(Self::classify))
            .route("/api/suitability/tiers", get(Self::list_tiers))
    }

    /// Classify a nutrient triple
    async fn classify(Json(request): Json<ClassifyRequest>) -> Result<Response, AppError> {
        let nutrients = CoreNutrients::checked(request.protein, request.fibre, request.calories)?;
        let tier = nutrients.suitability();

        let response = ClassifyResponse {
            tier,
            badge: SuitabilityBadge::for_tier(tier).render(request.variant, true),
            high_protein: nutrients.is_high_protein(),
            analysis: ThresholdAnalysis::analyse(&nutrients),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// List every tier badge
    async fn list_tiers() -> Result<Response, AppError> {
        let response = TiersResponse {
            tiers: SuitabilityBadge::all().to_vec(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
