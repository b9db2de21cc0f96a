// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recipe commands for companion-cli
// ABOUTME: Classifies nutrient triples and lists or shows catalog recipes

use anyhow::Result;
use glp1_companion::assets::FallbackImageResolver;
use glp1_companion::catalog::{
    FilterMode, RecipeCard, RecipeDetail, RecipeQuery, RecipeSource, StaticCatalog, TagFilter,
};
use glp1_companion::constants::catalog::DEFAULT_IMAGE_PLACEHOLDER;
use glp1_companion::errors::AppError;
use glp1_companion::favorites::RecipeFlags;
use glp1_companion::intelligence::{BadgeVariant, SuitabilityBadge, ThresholdAnalysis};
use glp1_companion::models::CoreNutrients;
use serde_json::json;

use crate::helpers::display;

/// Rate a nutrient triple
pub fn classify(protein: f64, fibre: f64, calories: f64, as_json: bool) -> Result<()> {
    let nutrients = CoreNutrients::checked(protein, fibre, calories)?;
    let tier = nutrients.suitability();
    let badge = SuitabilityBadge::for_tier(tier).render(BadgeVariant::Full, true);
    let analysis = ThresholdAnalysis::analyse(&nutrients);

    if as_json {
        return display::print_json(&json!({
            "tier": tier,
            "badge": badge,
            "high_protein": nutrients.is_high_protein(),
            "analysis": analysis,
        }));
    }

    display::display_badge(&badge);
    if nutrients.is_high_protein() {
        println!("High Protein");
    }
    display::display_analysis(&analysis);
    Ok(())
}

/// List recipes matching the filters and search
pub fn list(filters: &[String], mode: FilterMode, search: Option<&str>, as_json: bool) -> Result<()> {
    let catalog = StaticCatalog::seeded();
    let images = FallbackImageResolver::new(DEFAULT_IMAGE_PLACEHOLDER);
    let filter = TagFilter::from_tags(filters.iter().map(String::as_str));

    let mut query = RecipeQuery::new(&filter).with_mode(mode);
    if let Some(text) = search {
        query = query.with_search(text);
    }

    let cards: Vec<RecipeCard> = catalog
        .search(&query)
        .into_iter()
        .map(|recipe| RecipeCard::new(recipe, &images, RecipeFlags::default()))
        .collect();

    if as_json {
        return display::print_json(&cards);
    }
    display::display_cards(&cards);
    Ok(())
}

/// Show one recipe
pub fn show(id: u32, as_json: bool) -> Result<()> {
    let catalog = StaticCatalog::seeded();
    let images = FallbackImageResolver::new(DEFAULT_IMAGE_PLACEHOLDER);
    let recipe = catalog
        .get(id)
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
    let detail = RecipeDetail::new(recipe, &images, RecipeFlags::default());

    if as_json {
        return display::print_json(&detail);
    }
    display::display_detail(&detail);
    Ok(())
}
