// ABOUTME: Daily reference values used to express nutrients as a share of a day
// ABOUTME: Based on a 2000 kcal reference diet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Protein daily value (g)
pub const DAILY_PROTEIN_G: f64 = 50.0;

/// Carbohydrate daily value (g)
pub const DAILY_CARBS_G: f64 = 275.0;

/// Total fat daily value (g)
pub const DAILY_FAT_G: f64 = 78.0;

/// Saturated fat daily value (g)
pub const DAILY_SATURATED_FAT_G: f64 = 20.0;

/// Fibre daily value (g)
pub const DAILY_FIBRE_G: f64 = 28.0;

/// Sugar daily value (g)
pub const DAILY_SUGAR_G: f64 = 50.0;

/// Sodium daily value (mg)
pub const DAILY_SODIUM_MG: f64 = 2300.0;

/// Percentages are clamped to this ceiling
pub const MAX_DAILY_PERCENT: f64 = 100.0;
