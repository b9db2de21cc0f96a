// ABOUTME: Serializable recipe card and detail views with the computed tier and badge attached
// ABOUTME: Images are passed through the ImageResolver so broken references fall back to a placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use companion_core::models::{NutritionDetail, Recipe, RecipeId, SuitabilityTier};
use serde::Serialize;

use crate::assets::ImageResolver;
use crate::favorites::RecipeFlags;
use crate::intelligence::{
    nutrition_facts, BadgeVariant, BadgeView, NutrientFact, SuitabilityBadge, ThresholdAnalysis,
};

/// A recipe as shown in the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
    /// Recipe id
    pub id: RecipeId,
    /// Title
    pub title: String,
    /// Resolved image URL
    pub image: String,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Fibre per serving (g)
    pub fibre_g: f64,
    /// Calories per serving
    pub calories: f64,
    /// Preparation time (minutes)
    pub prep_time_mins: u16,
    /// Servings label, e.g. "2 servings"
    pub servings: String,
    /// Likes
    pub likes: u32,
    /// Tags
    pub tags: Vec<String>,
    /// Computed suitability tier
    pub suitability: SuitabilityTier,
    /// Compact badge for the image overlay
    pub badge: BadgeView,
    /// Whether the "High Protein" chip is shown
    pub high_protein: bool,
    /// Card toggles
    pub flags: RecipeFlags,
}

impl RecipeCard {
    /// Build the card for a recipe
    #[must_use]
    pub fn new(recipe: &Recipe, images: &dyn ImageResolver, flags: RecipeFlags) -> Self {
        let suitability = recipe.suitability();
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            image: images.resolve(&recipe.image),
            protein_g: recipe.nutrients.protein_g,
            fibre_g: recipe.nutrients.fibre_g,
            calories: recipe.nutrients.calories,
            prep_time_mins: recipe.prep_time_mins,
            servings: recipe.servings_label(),
            likes: recipe.likes,
            tags: recipe.tags.clone(),
            suitability,
            badge: SuitabilityBadge::for_tier(suitability).render(BadgeVariant::Compact, false),
            high_protein: recipe.is_high_protein(),
            flags,
        }
    }
}

/// A recipe as shown on its detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetail {
    /// Card fields
    #[serde(flatten)]
    pub card: RecipeCard,
    /// Full badge with benefits
    pub full_badge: BadgeView,
    /// Which thresholds the recipe meets
    pub analysis: ThresholdAnalysis,
    /// Ingredients in order
    pub ingredients: Vec<String>,
    /// Method steps in order
    pub instructions: Vec<String>,
    /// Extended nutrition, where known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionDetail>,
    /// Nutrition facts panel rows
    pub nutrition_facts: Vec<NutrientFact>,
}

impl RecipeDetail {
    /// Build the detail view for a recipe
    #[must_use]
    pub fn new(recipe: &Recipe, images: &dyn ImageResolver, flags: RecipeFlags) -> Self {
        let card = RecipeCard::new(recipe, images, flags);
        Self {
            full_badge: SuitabilityBadge::for_tier(card.suitability).render(BadgeVariant::Full, true),
            analysis: ThresholdAnalysis::analyse(&recipe.nutrients),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            nutrition: recipe.nutrition,
            nutrition_facts: nutrition_facts(recipe),
            card,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FallbackImageResolver;
    use crate::catalog::{RecipeSource, StaticCatalog};

    #[test]
    fn test_card_carries_computed_tier_and_fallback_image() {
        let catalog = StaticCatalog::seeded();
        let images = FallbackImageResolver::new("/placeholder.svg");
        let recipe = catalog.get(4).unwrap().clone().with_image("not a url");

        let card = RecipeCard::new(&recipe, &images, RecipeFlags::default());

        assert_eq!(card.suitability, SuitabilityTier::Moderate);
        assert_eq!(card.badge.heading, "Moderate");
        assert_eq!(card.image, "/placeholder.svg");
    }

    #[test]
    fn test_detail_includes_facts_panel() {
        let catalog = StaticCatalog::seeded();
        let images = FallbackImageResolver::new("/placeholder.svg");
        let detail = RecipeDetail::new(catalog.get(1).unwrap(), &images, RecipeFlags::default());

        assert!(!detail.ingredients.is_empty());
        assert_eq!(detail.nutrition_facts[0].name, "Protein");
    }
}
