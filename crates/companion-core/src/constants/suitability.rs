// ABOUTME: Thresholds for the GLP-1 suitability classifier and related badges
// ABOUTME: Inclusive bounds checked in strict priority order (High, then Moderate)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Minimum protein (g) for the High tier
pub const HIGH_MIN_PROTEIN_G: f64 = 25.0;

/// Minimum fibre (g) for the High tier
pub const HIGH_MIN_FIBRE_G: f64 = 6.0;

/// Maximum calories (kcal) for the High tier
pub const HIGH_MAX_CALORIES: f64 = 500.0;

/// Minimum protein (g) for the Moderate tier
pub const MODERATE_MIN_PROTEIN_G: f64 = 15.0;

/// Maximum calories (kcal) for the Moderate tier
pub const MODERATE_MAX_CALORIES: f64 = 600.0;

/// Protein (g) at which a recipe card shows the "High Protein" chip
pub const HIGH_PROTEIN_CHIP_MIN_G: f64 = 30.0;
