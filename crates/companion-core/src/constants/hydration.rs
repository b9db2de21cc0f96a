// ABOUTME: Hydration tracker defaults
// ABOUTME: Daily target expressed both in glasses and litres
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Number of glasses shown in the daily tracker
pub const DAILY_GLASSES: usize = 10;

/// Lower bound of the recommended daily fluid intake (litres)
pub const DAILY_TARGET_MIN_LITRES: f64 = 2.0;

/// Upper bound of the recommended daily fluid intake (litres)
pub const DAILY_TARGET_MAX_LITRES: f64 = 3.0;
