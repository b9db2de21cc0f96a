// ABOUTME: Recipe catalog constants: filter chips and image placeholder
// ABOUTME: Chip labels are matched verbatim against recipe tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Filter chips offered above the recipe grid, in display order
pub const FILTER_CHIPS: &[&str] = &[
    "GLP-1 Friendly",
    "High Protein",
    "High Fibre",
    "Quick",
    "Low Calorie",
    "Breakfast",
    "Lunch",
    "Dinner",
    "Snack",
];

/// Placeholder shown when a recipe image cannot be resolved
pub const DEFAULT_IMAGE_PLACEHOLDER: &str = "/assets/recipe-placeholder.svg";
