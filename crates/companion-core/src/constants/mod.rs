// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for suitability, nutrition, profile options, and chat copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Suitability classifier thresholds and badge thresholds
pub mod suitability;

/// Daily reference values for nutrient percentages
pub mod nutrition;

/// Scripted assistant copy (greeting, canned replies, keywords)
pub mod chat;

/// Recipe filter chips and catalog defaults
pub mod catalog;

/// Hydration tracking defaults
pub mod hydration;

/// Service identification
pub mod service_names {
    /// Service name used in logs and health responses
    pub const GLP1_COMPANION: &str = "glp1-companion";
}
