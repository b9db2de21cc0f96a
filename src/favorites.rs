// ABOUTME: Per-recipe favourite and saved toggles shown on recipe cards
// ABOUTME: The meal-plan toggle is derived from the MealPlan rather than stored here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use companion_core::models::RecipeId;
use serde::{Deserialize, Serialize};

/// Card toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeFlag {
    /// Heart icon
    Favorite,
    /// Bookmark icon
    Saved,
    /// Added to the weekly plan
    MealPlan,
}

/// State of every card toggle for one recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecipeFlags {
    /// Favourited
    pub favorite: bool,
    /// Saved for later
    pub saved: bool,
    /// Somewhere in the meal plan
    pub in_meal_plan: bool,
}

/// Favourite and saved recipe sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    favorite: HashSet<RecipeId>,
    saved: HashSet<RecipeId>,
}

impl Favorites {
    /// No favourites, nothing saved
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favourite flag; returns whether it is set afterwards
    pub fn toggle_favorite(&mut self, id: RecipeId) -> bool {
        flip(&mut self.favorite, id)
    }

    /// Flip the saved flag; returns whether it is set afterwards
    pub fn toggle_saved(&mut self, id: RecipeId) -> bool {
        flip(&mut self.saved, id)
    }

    /// Whether a recipe is favourited
    #[must_use]
    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorite.contains(&id)
    }

    /// Whether a recipe is saved
    #[must_use]
    pub fn is_saved(&self, id: RecipeId) -> bool {
        self.saved.contains(&id)
    }

    /// Favourited recipe ids
    #[must_use]
    pub const fn favorites(&self) -> &HashSet<RecipeId> {
        &self.favorite
    }
}

fn flip(set: &mut HashSet<RecipeId>, id: RecipeId) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}
