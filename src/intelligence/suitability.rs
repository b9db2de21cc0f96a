// ABOUTME: Suitability badge presentation and threshold analysis for the GLP-1 classifier
// ABOUTME: Maps tiers to labels, star scores, colours, benefits, and explains which thresholds a meal meets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Suitability Presentation
//!
//! The classifier itself lives in `companion-core`
//! ([`SuitabilityTier::classify`]). This module adds what the UI needs on top
//! of the bare tier:
//!
//! - [`SuitabilityBadge`]: the static per-tier badge configuration
//! - [`BadgeView`]: a badge rendered for one of the three [`BadgeVariant`]s
//! - [`ThresholdAnalysis`]: which thresholds a nutrient triple meets, and what
//!   it lacks to reach the next tier

use companion_core::models::{CoreNutrients, SuitabilityTier};
use serde::{Deserialize, Serialize};

use crate::constants::suitability::{
    HIGH_MAX_CALORIES, HIGH_MIN_FIBRE_G, HIGH_MIN_PROTEIN_G, MODERATE_MAX_CALORIES,
    MODERATE_MIN_PROTEIN_G,
};

/// Static badge configuration for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuitabilityBadge {
    /// Tier this badge describes
    pub tier: SuitabilityTier,
    /// Full label, e.g. "High GLP-1 Suitability"
    pub label: &'static str,
    /// Short label used on compact badges
    pub short_label: &'static str,
    /// Star score, one star per level
    pub score: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Foreground colour
    pub color: &'static str,
    /// Background colour
    pub bg_color: &'static str,
    /// Accent colour
    pub accent_color: &'static str,
    /// Three short benefit lines
    pub benefits: [&'static str; 3],
    /// One-sentence description
    pub description: &'static str,
}

const HIGH_BADGE: SuitabilityBadge = SuitabilityBadge {
    tier: SuitabilityTier::High,
    label: "High GLP-1 Suitability",
    short_label: "High",
    score: "★★★",
    icon: "award",
    color: "#2E7D32",
    bg_color: "#E8F5E9",
    accent_color: "#4CAF50",
    benefits: ["High protein 25g+", "Perfect portions", "Gentle on digestion"],
    description: "Expertly crafted for GLP-1 users with optimal protein, portion control, and digestive comfort.",
};

const MODERATE_BADGE: SuitabilityBadge = SuitabilityBadge {
    tier: SuitabilityTier::Moderate,
    label: "Moderate GLP-1 Suitability",
    short_label: "Moderate",
    score: "★★",
    icon: "trending-up",
    color: "#558B2F",
    bg_color: "#F1F8E9",
    accent_color: "#8BC34A",
    benefits: ["Good protein 15-25g", "Balanced portions", "Minor adjustments"],
    description: "Well-suited for GLP-1 users with good protein content and balanced portions.",
};

const BASIC_BADGE: SuitabilityBadge = SuitabilityBadge {
    tier: SuitabilityTier::Basic,
    label: "Basic GLP-1 Suitability",
    short_label: "Basic",
    score: "★",
    icon: "info",
    color: "#9E9D24",
    bg_color: "#F9FBE7",
    accent_color: "#CDDC39",
    benefits: ["Moderate protein", "Adjust portions", "Customisable"],
    description: "Can be adapted for GLP-1 users with minor modifications to portion size or protein content.",
};

impl SuitabilityBadge {
    /// Badge for a tier
    #[must_use]
    pub const fn for_tier(tier: SuitabilityTier) -> &'static Self {
        match tier {
            SuitabilityTier::High => &HIGH_BADGE,
            SuitabilityTier::Moderate => &MODERATE_BADGE,
            SuitabilityTier::Basic => &BASIC_BADGE,
        }
    }

    /// Every badge, highest tier first
    #[must_use]
    pub const fn all() -> [&'static Self; 3] {
        [&HIGH_BADGE, &MODERATE_BADGE, &BASIC_BADGE]
    }

    /// Render this badge in a variant
    ///
    /// Benefits are always listed in the ribbon tooltip; the full variant lists
    /// them inline only when `show_details` is set.
    #[must_use]
    pub fn render(&self, variant: BadgeVariant, show_details: bool) -> BadgeView {
        let (heading, inline_benefits, tooltip_benefits) = match variant {
            BadgeVariant::Compact => (self.short_label, false, false),
            BadgeVariant::Ribbon => (self.label, false, true),
            BadgeVariant::Full => (self.label, show_details, false),
        };

        BadgeView {
            tier: self.tier,
            variant,
            heading,
            score: self.score,
            icon: self.icon,
            color: self.color,
            bg_color: self.bg_color,
            accent_color: self.accent_color,
            benefits: if inline_benefits {
                self.benefits.to_vec()
            } else {
                Vec::new()
            },
            tooltip: BadgeTooltip {
                title: self.label,
                description: self.description,
                benefits: if tooltip_benefits {
                    self.benefits.to_vec()
                } else {
                    Vec::new()
                },
            },
        }
    }
}

/// Where a badge is placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Image overlay: short label and stars
    Compact,
    /// Card content: full label, optional benefits
    #[default]
    Full,
    /// Featured placement: full label, benefits in the tooltip
    Ribbon,
}

/// Hover text attached to a badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeTooltip {
    /// Tooltip heading
    pub title: &'static str,
    /// Tooltip body
    pub description: &'static str,
    /// Benefit lines shown in the tooltip, possibly empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<&'static str>,
}

/// A badge rendered for one placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    /// Tier shown
    pub tier: SuitabilityTier,
    /// Placement
    pub variant: BadgeVariant,
    /// Visible text
    pub heading: &'static str,
    /// Star score
    pub score: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Foreground colour
    pub color: &'static str,
    /// Background colour
    pub bg_color: &'static str,
    /// Accent colour
    pub accent_color: &'static str,
    /// Benefit lines shown inline, possibly empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<&'static str>,
    /// Hover text
    pub tooltip: BadgeTooltip,
}

/// A nutrient the classifier reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    /// Protein (g)
    Protein,
    /// Fibre (g)
    Fibre,
    /// Energy (kcal)
    Calories,
}

/// A threshold a meal misses for the next tier up
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shortfall {
    /// Nutrient out of bounds
    pub nutrient: Nutrient,
    /// Bound the nutrient must reach (minimum for protein/fibre, maximum for calories)
    pub required: f64,
    /// Value the meal has
    pub actual: f64,
}

/// Which classifier thresholds a meal meets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdAnalysis {
    /// Resulting tier
    pub tier: SuitabilityTier,
    /// Protein at or above the High minimum
    pub high_protein_met: bool,
    /// Fibre at or above the High minimum
    pub high_fibre_met: bool,
    /// Calories at or below the High maximum
    pub high_calories_met: bool,
    /// Protein at or above the Moderate minimum
    pub moderate_protein_met: bool,
    /// Calories at or below the Moderate maximum
    pub moderate_calories_met: bool,
    /// Tier one step up, if any
    pub next_tier: Option<SuitabilityTier>,
    /// Thresholds missed for `next_tier`
    pub shortfalls: Vec<Shortfall>,
}

impl ThresholdAnalysis {
    /// Analyse a nutrient triple
    #[must_use]
    pub fn analyse(nutrients: &CoreNutrients) -> Self {
        let CoreNutrients {
            protein_g,
            fibre_g,
            calories,
        } = *nutrients;
        let tier = nutrients.suitability();

        let high_protein_met = protein_g >= HIGH_MIN_PROTEIN_G;
        let high_fibre_met = fibre_g >= HIGH_MIN_FIBRE_G;
        let high_calories_met = calories <= HIGH_MAX_CALORIES;
        let moderate_protein_met = protein_g >= MODERATE_MIN_PROTEIN_G;
        let moderate_calories_met = calories <= MODERATE_MAX_CALORIES;

        let (next_tier, shortfalls) = match tier {
            SuitabilityTier::High => (None, Vec::new()),
            SuitabilityTier::Moderate => (
                Some(SuitabilityTier::High),
                [
                    (!high_protein_met).then_some(Shortfall {
                        nutrient: Nutrient::Protein,
                        required: HIGH_MIN_PROTEIN_G,
                        actual: protein_g,
                    }),
                    (!high_fibre_met).then_some(Shortfall {
                        nutrient: Nutrient::Fibre,
                        required: HIGH_MIN_FIBRE_G,
                        actual: fibre_g,
                    }),
                    (!high_calories_met).then_some(Shortfall {
                        nutrient: Nutrient::Calories,
                        required: HIGH_MAX_CALORIES,
                        actual: calories,
                    }),
                ]
                .into_iter()
                .flatten()
                .collect(),
            ),
            SuitabilityTier::Basic => (
                Some(SuitabilityTier::Moderate),
                [
                    (!moderate_protein_met).then_some(Shortfall {
                        nutrient: Nutrient::Protein,
                        required: MODERATE_MIN_PROTEIN_G,
                        actual: protein_g,
                    }),
                    (!moderate_calories_met).then_some(Shortfall {
                        nutrient: Nutrient::Calories,
                        required: MODERATE_MAX_CALORIES,
                        actual: calories,
                    }),
                ]
                .into_iter()
                .flatten()
                .collect(),
            ),
        };

        Self {
            tier,
            high_protein_met,
            high_fibre_met,
            high_calories_met,
            moderate_protein_met,
            moderate_calories_met,
            next_tier,
            shortfalls,
        }
    }
}
