// ABOUTME: Recipe catalog: the content-source seam and the compiled-in seed catalog
// ABOUTME: Listings are filtered through RecipeQuery and always carry the recomputed suitability tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog
//!
//! Recipes come from a [`RecipeSource`]. The only source shipped is
//! [`StaticCatalog`], built from the seed data in [`seed`]. Sources hand out
//! pre-validated recipes; nothing downstream re-checks them.

/// Active tag filters and listing queries
pub mod filter;
/// Compiled-in seed recipes
pub mod seed;
/// Card and detail views
pub mod view;

use companion_core::models::{Recipe, RecipeId};

pub use filter::{FilterMode, RecipeQuery, TagFilter};
pub use view::{RecipeCard, RecipeDetail};

/// Supplier of recipe content
pub trait RecipeSource: Send + Sync {
    /// Every recipe, in display order
    fn recipes(&self) -> &[Recipe];

    /// Look up a recipe by id
    fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes().iter().find(|recipe| recipe.id == id)
    }

    /// Recipes matching a query, in display order
    fn search<'a>(&'a self, query: &RecipeQuery<'_>) -> Vec<&'a Recipe> {
        self.recipes()
            .iter()
            .filter(|recipe| query.matches(recipe))
            .collect()
    }
}

/// Catalog backed by a fixed list of recipes
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    recipes: Vec<Recipe>,
}

impl StaticCatalog {
    /// Catalog containing the given recipes
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Catalog containing the seed recipes
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::seed_recipes())
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl RecipeSource for StaticCatalog {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}
