// ABOUTME: Weekly meal plan grid: one recipe per day and meal slot
// ABOUTME: Assignments reference catalog recipes by id and are validated against the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan
//!
//! A Monday-to-Sunday grid with breakfast, lunch, dinner, and snack slots.

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use companion_core::models::{Recipe, RecipeId, SuitabilityTier};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::RecipeSource;
use crate::errors::{AppError, AppResult};

/// Day of the plan week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
    /// Sunday
    Sun,
}

impl Day {
    /// Every day, Monday first
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Short label, e.g. "Mon"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl FromStr for Day {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::invalid_input(format!("unknown day: {s}")))
    }
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack
    Snack,
}

impl MealSlot {
    /// Every slot, in the order shown
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl FromStr for MealSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::invalid_input(format!("unknown meal slot: {s}")))
    }
}

/// Recipe assignments for the week
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    slots: BTreeMap<(Day, MealSlot), RecipeId>,
}

impl MealPlan {
    /// Empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a recipe in a slot, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the recipe is not in `source`
    pub fn assign(
        &mut self,
        source: &dyn RecipeSource,
        day: Day,
        slot: MealSlot,
        recipe_id: RecipeId,
    ) -> AppResult<Option<RecipeId>> {
        if source.get(recipe_id).is_none() {
            return Err(AppError::not_found(format!("Recipe {recipe_id}"))
                .with_resource_id(recipe_id.to_string()));
        }
        debug!(day = day.label(), slot = slot.label(), recipe_id, "meal planned");
        Ok(self.slots.insert((day, slot), recipe_id))
    }

    /// Empty a slot; returns the recipe it held
    pub fn clear(&mut self, day: Day, slot: MealSlot) -> Option<RecipeId> {
        self.slots.remove(&(day, slot))
    }

    /// Recipe in a slot
    #[must_use]
    pub fn get(&self, day: Day, slot: MealSlot) -> Option<RecipeId> {
        self.slots.get(&(day, slot)).copied()
    }

    /// Every recipe that appears somewhere in the plan
    #[must_use]
    pub fn planned_recipes(&self) -> HashSet<RecipeId> {
        self.slots.values().copied().collect()
    }

    /// Whether a recipe appears somewhere in the plan
    #[must_use]
    pub fn contains(&self, recipe_id: RecipeId) -> bool {
        self.slots.values().any(|id| *id == recipe_id)
    }

    /// Remove a recipe from every slot; returns how many slots it held
    pub fn remove_recipe(&mut self, recipe_id: RecipeId) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, id| *id != recipe_id);
        before - self.slots.len()
    }

    /// Put a recipe in the first free slot of the week, trying its natural
    /// meal slot before the others
    ///
    /// Returns the slot used, or `None` when the week is full.
    pub fn add_to_first_free(
        &mut self,
        recipe_id: RecipeId,
        preferred: Option<MealSlot>,
    ) -> Option<(Day, MealSlot)> {
        let slots = preferred
            .into_iter()
            .chain(MealSlot::ALL.into_iter().filter(|s| Some(*s) != preferred));
        let free = slots
            .flat_map(|slot| Day::ALL.into_iter().map(move |day| (day, slot)))
            .find(|key| !self.slots.contains_key(key))?;
        self.slots.insert(free, recipe_id);
        Some(free)
    }

    /// Card toggle: drop a planned recipe from every slot, or plan an
    /// unplanned one in the first free slot, preferring the meal its tags name
    ///
    /// Returns whether the recipe is planned afterwards.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when the week has no free slot
    pub fn toggle_recipe(&mut self, recipe: &Recipe) -> AppResult<bool> {
        if self.remove_recipe(recipe.id) > 0 {
            return Ok(false);
        }
        let preferred = recipe
            .tags
            .iter()
            .find_map(|tag| tag.parse::<MealSlot>().ok());
        self.add_to_first_free(recipe.id, preferred)
            .map(|_| true)
            .ok_or_else(|| AppError::invalid_input("Meal plan has no free slot"))
    }

    /// The plan as a day-by-day grid with recipe summaries
    #[must_use]
    pub fn view(&self, source: &dyn RecipeSource) -> Vec<PlanDay> {
        Day::ALL
            .into_iter()
            .map(|day| {
                let meals: Vec<PlannedMeal> = MealSlot::ALL
                    .into_iter()
                    .map(|slot| PlannedMeal {
                        slot,
                        recipe: self
                            .get(day, slot)
                            .and_then(|id| source.get(id))
                            .map(|recipe| PlannedRecipe {
                                id: recipe.id,
                                title: recipe.title.clone(),
                                calories: recipe.nutrients.calories,
                                protein_g: recipe.nutrients.protein_g,
                                suitability: recipe.suitability(),
                            }),
                    })
                    .collect();
                let total_calories = meals
                    .iter()
                    .filter_map(|m| m.recipe.as_ref().map(|r| r.calories))
                    .sum();
                let total_protein_g = meals
                    .iter()
                    .filter_map(|m| m.recipe.as_ref().map(|r| r.protein_g))
                    .sum();
                PlanDay {
                    day,
                    meals,
                    total_calories,
                    total_protein_g,
                }
            })
            .collect()
    }
}

/// Summary of a planned recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRecipe {
    /// Recipe id
    pub id: RecipeId,
    /// Title
    pub title: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Suitability tier
    pub suitability: SuitabilityTier,
}

/// One slot of a day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    /// Slot
    pub slot: MealSlot,
    /// Recipe in the slot, if any
    pub recipe: Option<PlannedRecipe>,
}

/// One day of the plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDay {
    /// Day
    pub day: Day,
    /// Slots in display order
    pub meals: Vec<PlannedMeal>,
    /// Calories across planned meals
    pub total_calories: f64,
    /// Protein across planned meals (g)
    pub total_protein_g: f64,
}
