// ABOUTME: Core types and constants for the GLP-1 nutrition companion
// ABOUTME: Foundation crate with error handling, constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Companion Core
//!
//! Foundation crate providing shared types and constants for the GLP-1
//! companion. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Suitability thresholds, profile option lists, chat copy, daily values
//! - **models**: `Recipe`, `SuitabilityTier`, `ProfileData`, `ChatMessage`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (recipes, suitability tiers, dietary profile, chat)
pub mod models;
