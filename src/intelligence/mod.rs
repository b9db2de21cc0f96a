// ABOUTME: Nutrition intelligence built on the core suitability classifier
// ABOUTME: Badge presentation, threshold analysis, and daily-value nutrition facts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Explains recipes to GLP-1 users: how suitable a meal is and why, and how
//! much of a day's reference intake it provides.

/// Daily-value percentages for the recipe detail view
pub mod nutrition_facts;
/// Suitability badges and threshold analysis
pub mod suitability;

pub use companion_core::models::{classify, SuitabilityTier};
pub use nutrition_facts::{daily_value_percent, nutrition_facts, NutrientFact};
pub use suitability::{
    BadgeTooltip, BadgeVariant, BadgeView, Nutrient, Shortfall, SuitabilityBadge,
    ThresholdAnalysis,
};
