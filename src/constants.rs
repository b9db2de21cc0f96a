// ABOUTME: System-wide constants for the companion service
// ABOUTME: Re-exports the domain-separated constants defined in companion-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Thresholds, daily reference values, chat copy, and catalog defaults.
//! Defined once in `companion-core` and re-exported here.

pub use companion_core::constants::{catalog, chat, hydration, nutrition, service_names, suitability};
