// ABOUTME: GLP-1 suitability tier and the pure classifier that derives it
// ABOUTME: Maps (protein, fibre, calories) to Basic, Moderate, or High in strict priority order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::suitability::{
    HIGH_MAX_CALORIES, HIGH_MIN_FIBRE_G, HIGH_MIN_PROTEIN_G, MODERATE_MAX_CALORIES,
    MODERATE_MIN_PROTEIN_G,
};
use crate::errors::AppError;

/// How well a meal fits GLP-1 dietary guidance
///
/// Serialized as its numeric level (1, 2, 3). A tier is never stored on its
/// own: it is always recomputed from the nutrients it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SuitabilityTier {
    /// Usable with adjustments to portion size or protein content
    Basic = 1,
    /// Good protein content and balanced portions
    Moderate = 2,
    /// High protein, high fibre, controlled calories
    High = 3,
}

impl SuitabilityTier {
    /// Every tier, lowest first
    pub const ALL: [Self; 3] = [Self::Basic, Self::Moderate, Self::High];

    /// Classify a meal from its per-serving protein (g), fibre (g), and calories (kcal)
    ///
    /// Thresholds are inclusive and checked in priority order: High before
    /// Moderate before Basic. The function is total over non-negative inputs;
    /// negative or non-finite values are not validated here.
    #[must_use]
    pub fn classify(protein_g: f64, fibre_g: f64, calories: f64) -> Self {
        if protein_g >= HIGH_MIN_PROTEIN_G
            && fibre_g >= HIGH_MIN_FIBRE_G
            && calories <= HIGH_MAX_CALORIES
        {
            return Self::High;
        }

        if protein_g >= MODERATE_MIN_PROTEIN_G && calories <= MODERATE_MAX_CALORIES {
            return Self::Moderate;
        }

        Self::Basic
    }

    /// Numeric level (1-3)
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Tier for a numeric level
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Basic),
            2 => Some(Self::Moderate),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Short name used on compact badges
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Classify a meal; see [`SuitabilityTier::classify`]
#[must_use]
pub fn classify(protein_g: f64, fibre_g: f64, calories: f64) -> SuitabilityTier {
    SuitabilityTier::classify(protein_g, fibre_g, calories)
}

impl From<SuitabilityTier> for u8 {
    fn from(tier: SuitabilityTier) -> Self {
        tier.level()
    }
}

impl TryFrom<u8> for SuitabilityTier {
    type Error = AppError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| {
            AppError::out_of_range("tier", format!("suitability tier {level} is not in 1..=3"))
        })
    }
}

impl fmt::Display for SuitabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.short_name(), self.level())
    }
}
