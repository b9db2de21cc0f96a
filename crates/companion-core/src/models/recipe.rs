// ABOUTME: Recipe content model with per-serving nutrients and optional detail
// ABOUTME: Suitability is derived on demand, never stored alongside the nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::suitability::SuitabilityTier;
use crate::constants::suitability::HIGH_PROTEIN_CHIP_MIN_G;
use crate::errors::{AppError, AppResult};

/// Identifier of a catalog recipe
pub type RecipeId = u32;

/// The three nutrients the suitability classifier reads (per serving)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreNutrients {
    /// Protein in grams
    pub protein_g: f64,
    /// Fibre in grams
    pub fibre_g: f64,
    /// Energy in kcal
    pub calories: f64,
}

impl CoreNutrients {
    /// Create a nutrient triple
    #[must_use]
    pub const fn new(protein_g: f64, fibre_g: f64, calories: f64) -> Self {
        Self {
            protein_g,
            fibre_g,
            calories,
        }
    }

    /// Create a nutrient triple from untrusted input
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if any value is negative, NaN, or infinite
    pub fn checked(protein_g: f64, fibre_g: f64, calories: f64) -> AppResult<Self> {
        for (field, value) in [
            ("protein", protein_g),
            ("fibre", fibre_g),
            ("calories", calories),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(Self::new(protein_g, fibre_g, calories))
    }

    /// Whether protein reaches the "High Protein" chip threshold
    #[must_use]
    pub fn is_high_protein(&self) -> bool {
        self.protein_g >= HIGH_PROTEIN_CHIP_MIN_G
    }

    /// Suitability tier for these nutrients
    #[must_use]
    pub fn suitability(&self) -> SuitabilityTier {
        SuitabilityTier::classify(self.protein_g, self.fibre_g, self.calories)
    }
}

/// Extended per-serving nutrition shown on the recipe detail view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionDetail {
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Sugar in grams
    pub sugar_g: f64,
    /// Total fat in grams
    pub fat_g: f64,
    /// Saturated fat in grams
    pub saturated_fat_g: f64,
    /// Sodium in milligrams
    pub sodium_mg: f64,
}

/// A catalog recipe
///
/// Recipes are compiled-in content: they are built once by the catalog seed
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: RecipeId,
    /// Display title
    pub title: String,
    /// Image source reference (resolved by the image resolver)
    pub image: String,
    /// Per-serving protein, fibre, and calories
    pub nutrients: CoreNutrients,
    /// Preparation time in minutes
    pub prep_time_mins: u16,
    /// Number of servings
    pub servings: u8,
    /// Number of users who liked the recipe
    pub likes: u32,
    /// Tags, in display order, without duplicates
    pub tags: Vec<String>,
    /// Ingredient lines, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    /// Method steps, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    /// Extended nutrition, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionDetail>,
}

impl Recipe {
    /// Create a recipe with its core nutrients
    #[must_use]
    pub fn new(id: RecipeId, title: impl Into<String>, nutrients: CoreNutrients) -> Self {
        Self {
            id,
            title: title.into(),
            image: String::new(),
            nutrients,
            prep_time_mins: 0,
            servings: 1,
            likes: 0,
            tags: Vec::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            nutrition: None,
        }
    }

    /// Set the image reference
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set preparation time
    #[must_use]
    pub const fn with_prep_time(mut self, mins: u16) -> Self {
        self.prep_time_mins = mins;
        self
    }

    /// Set the number of servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u8) -> Self {
        self.servings = servings;
        self
    }

    /// Set the like count
    #[must_use]
    pub const fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    /// Add a tag; a tag already present is ignored
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Add several tags
    #[must_use]
    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(self, Self::with_tag)
    }

    /// Set ingredient lines
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: &[&str]) -> Self {
        self.ingredients = ingredients.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    /// Set method steps
    #[must_use]
    pub fn with_instructions(mut self, steps: &[&str]) -> Self {
        self.instructions = steps.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    /// Set extended nutrition
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: NutritionDetail) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    /// Suitability tier, recomputed from the recipe's nutrients
    #[must_use]
    pub fn suitability(&self) -> SuitabilityTier {
        self.nutrients.suitability()
    }

    /// Whether the card shows the "High Protein" chip
    #[must_use]
    pub fn is_high_protein(&self) -> bool {
        self.nutrients.is_high_protein()
    }

    /// Whether the recipe carries a tag (exact match)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// "1 serving" / "2 servings"
    #[must_use]
    pub fn servings_label(&self) -> String {
        if self.servings == 1 {
            "1 serving".to_owned()
        } else {
            format!("{} servings", self.servings)
        }
    }
}
