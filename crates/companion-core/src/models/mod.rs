// ABOUTME: Core data models for the GLP-1 companion
// ABOUTME: Re-exports Recipe, SuitabilityTier, ProfileData, ChatMessage and option enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Recipe`: compiled-in recipe content with per-serving nutrients
//! - `SuitabilityTier`: derived 1-3 GLP-1 fit classification
//! - `ProfileData`: the dietary profile edited in the profile dialog
//! - `ChatMessage`: one entry of the assistant transcript

mod chat;
mod profile;
mod recipe;
mod suitability;

pub use chat::{ChatMessage, Sender};
pub use profile::{
    Allergen, CoreDietType, FaithPreference, HealthPreference, ProfileData, ProfileTag, Symptom,
};
pub use recipe::{CoreNutrients, NutritionDetail, Recipe, RecipeId};
pub use suitability::{classify, SuitabilityTier};
