// ABOUTME: Daily-value percentages for the nutrition tab of the recipe detail view
// ABOUTME: Percentages are relative to adult reference intakes and capped at 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use companion_core::models::Recipe;
use serde::Serialize;

use crate::constants::nutrition::{
    DAILY_CARBS_G, DAILY_FAT_G, DAILY_FIBRE_G, DAILY_PROTEIN_G, DAILY_SATURATED_FAT_G,
    DAILY_SODIUM_MG, DAILY_SUGAR_G, MAX_DAILY_PERCENT,
};

/// Percentage of a daily reference value, capped at 100
///
/// A non-positive reference yields 0.
#[must_use]
pub fn daily_value_percent(amount: f64, daily_value: f64) -> f64 {
    if daily_value <= 0.0 {
        return 0.0;
    }
    (amount / daily_value * 100.0).clamp(0.0, MAX_DAILY_PERCENT)
}

/// One row of the nutrition facts table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientFact {
    /// Display name
    pub name: &'static str,
    /// Amount per serving
    pub amount: f64,
    /// Unit of `amount`
    pub unit: &'static str,
    /// Percentage of the daily reference value (0-100)
    pub daily_percent: f64,
    /// Sub-rows (sugar under carbohydrates, saturates under fat) are indented
    pub indented: bool,
}

impl NutrientFact {
    fn new(name: &'static str, amount: f64, unit: &'static str, daily_value: f64) -> Self {
        Self {
            name,
            amount,
            unit,
            daily_percent: daily_value_percent(amount, daily_value),
            indented: false,
        }
    }

    const fn indented(mut self) -> Self {
        self.indented = true;
        self
    }
}

/// Per-serving nutrition facts for a recipe
///
/// Protein, fibre, and energy are always present; the remaining rows appear
/// only when the recipe carries extended nutrition.
#[must_use]
pub fn nutrition_facts(recipe: &Recipe) -> Vec<NutrientFact> {
    let core = &recipe.nutrients;
    let mut facts = vec![NutrientFact::new(
        "Protein",
        core.protein_g,
        "g",
        DAILY_PROTEIN_G,
    )];

    if let Some(detail) = &recipe.nutrition {
        facts.push(NutrientFact::new("Carbohydrates", detail.carbs_g, "g", DAILY_CARBS_G));
        facts.push(NutrientFact::new("Sugar", detail.sugar_g, "g", DAILY_SUGAR_G).indented());
        facts.push(NutrientFact::new("Fat", detail.fat_g, "g", DAILY_FAT_G));
        facts.push(
            NutrientFact::new("Saturated Fat", detail.saturated_fat_g, "g", DAILY_SATURATED_FAT_G)
                .indented(),
        );
    }

    facts.push(NutrientFact::new("Fibre", core.fibre_g, "g", DAILY_FIBRE_G));

    if let Some(detail) = &recipe.nutrition {
        facts.push(NutrientFact::new("Sodium", detail.sodium_mg, "mg", DAILY_SODIUM_MG));
    }

    facts
}

#[cfg(test)]
mod tests {
    use companion_core::models::{CoreNutrients, NutritionDetail};

    use super::*;

    #[test]
    fn test_percent_is_capped() {
        assert!((daily_value_percent(25.0, 50.0) - 50.0).abs() < f64::EPSILON);
        assert!((daily_value_percent(120.0, 50.0) - 100.0).abs() < f64::EPSILON);
        assert!(daily_value_percent(10.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rows_depend_on_extended_nutrition() {
        let plain = Recipe::new(1, "Parfait", CoreNutrients::new(22.0, 6.0, 280.0));
        assert_eq!(nutrition_facts(&plain).len(), 2);

        let detailed = plain.with_nutrition(NutritionDetail {
            carbs_g: 30.0,
            sugar_g: 16.0,
            fat_g: 5.0,
            saturated_fat_g: 1.0,
            sodium_mg: 90.0,
        });
        let facts = nutrition_facts(&detailed);
        assert_eq!(facts.len(), 7);
        assert!(facts.iter().any(|f| f.name == "Sugar" && f.indented));
    }
}
