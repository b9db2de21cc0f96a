// ABOUTME: Daily hydration tracker: a fixed row of glasses the user ticks off
// ABOUTME: Toggling an out-of-range glass is rejected with VALUE_OUT_OF_RANGE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::constants::hydration::{DAILY_GLASSES, DAILY_TARGET_MAX_LITRES, DAILY_TARGET_MIN_LITRES};
use crate::errors::{AppError, AppResult};

/// Glasses drunk today
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HydrationTracker {
    glasses: [bool; DAILY_GLASSES],
}

impl Default for HydrationTracker {
    fn default() -> Self {
        Self {
            glasses: [false; DAILY_GLASSES],
        }
    }
}

impl HydrationTracker {
    /// Tracker with no glasses ticked
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one glass; returns whether it is ticked afterwards
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if `index` is not a glass
    pub fn toggle(&mut self, index: usize) -> AppResult<bool> {
        let glass = self.glasses.get_mut(index).ok_or_else(|| {
            AppError::out_of_range(
                "glass",
                format!("glass {index} is not in 0..{DAILY_GLASSES}"),
            )
        })?;
        *glass = !*glass;
        Ok(*glass)
    }

    /// Tick state of every glass
    #[must_use]
    pub const fn glasses(&self) -> &[bool; DAILY_GLASSES] {
        &self.glasses
    }

    /// Number of glasses ticked
    #[must_use]
    pub fn filled(&self) -> usize {
        self.glasses.iter().filter(|g| **g).count()
    }

    /// Summary for display
    #[must_use]
    pub fn summary(&self) -> HydrationSummary {
        HydrationSummary {
            glasses: self.glasses.to_vec(),
            filled: self.filled(),
            total: DAILY_GLASSES,
            target_min_litres: DAILY_TARGET_MIN_LITRES,
            target_max_litres: DAILY_TARGET_MAX_LITRES,
        }
    }
}

/// Hydration progress as shown by the tracker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrationSummary {
    /// Tick state of every glass
    pub glasses: Vec<bool>,
    /// Glasses ticked
    pub filled: usize,
    /// Glasses in the daily target
    pub total: usize,
    /// Lower bound of the daily fluid target (litres)
    pub target_min_litres: f64,
    /// Upper bound of the daily fluid target (litres)
    pub target_max_litres: f64,
}

#[cfg(test)]
mod tests {
    use companion_core::errors::ErrorCode;

    use super::*;

    #[test]
    fn test_toggle_flips_one_glass() {
        let mut tracker = HydrationTracker::new();

        assert!(tracker.toggle(3).unwrap());
        assert_eq!(tracker.filled(), 1);
        assert!(!tracker.toggle(3).unwrap());
        assert_eq!(tracker.filled(), 0);
    }

    #[test]
    fn test_out_of_range_glass_is_rejected() {
        let mut tracker = HydrationTracker::new();
        let err = tracker.toggle(DAILY_GLASSES).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
