// ABOUTME: Main library entry point for the GLP-1 nutrition companion
// ABOUTME: Owns recipe suitability, filtering, profile editing, chat, education, and meal planning state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy.
#![deny(unsafe_code)]

//! # GLP-1 Companion
//!
//! A nutrition and meal-planning companion for people taking GLP-1
//! medication. The library holds every piece of state and logic a client
//! needs; the `companion-server` binary exposes it as a JSON API and
//! `companion-cli` drives it from a terminal.
//!
//! ## Features
//!
//! - **Suitability classifier**: rates a meal 1-3 from protein, fibre, and calories
//! - **Recipe catalog**: seed recipes with tag filters and title search
//! - **Profile editor**: dietary profile drafts that are saved or discarded as a whole
//! - **Assistant chat**: keyword-scripted guidance with a delayed reply
//! - **Education**: side-effect topics and a daily hydration tracker
//! - **Meal plan**: a weekly grid of planned recipes
//!
//! ## Architecture
//!
//! - **Core** (`companion-core`): errors, constants, and data models
//! - **Domain**: `catalog`, `intelligence`, `profile`, `chat`, `education`,
//!   `meal_plan`, `favorites`, `app`
//! - **Collaborators**: `RecipeSource`, `ImageResolver`, `ProfileStore`,
//!   `ChatResponder` traits
//! - **HTTP**: `routes` over shared `resources`, with `middleware` layers
//!
//! ## Example Usage
//!
//! ```rust
//! use glp1_companion::catalog::{RecipeQuery, RecipeSource, StaticCatalog, TagFilter};
//!
//! let catalog = StaticCatalog::seeded();
//! let filter = TagFilter::from_tags(["Breakfast"]);
//! let breakfasts = catalog.search(&RecipeQuery::new(&filter));
//! assert!(!breakfasts.is_empty());
//! ```

/// View router: current view, tabs, and modal dialogs
pub mod app;

/// Image reference resolution with placeholder fallback
pub mod assets;

/// Recipe catalog, tag filters, and recipe views
pub mod catalog;

/// Scripted assistant chat
pub mod chat;

/// Environment-based server configuration
pub mod config;

/// Application constants re-exported from `companion-core`
pub mod constants;

/// Education topics and hydration tracking
pub mod education;

/// Unified error handling re-exported from `companion-core`
pub mod errors;

/// Favourite and saved recipe toggles
pub mod favorites;

/// Suitability badges, threshold analysis, and nutrition facts
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Weekly meal plan
pub mod meal_plan;

/// HTTP middleware layers
pub mod middleware;

/// Dietary profile editing and persistence
pub mod profile;

/// Shared state for HTTP handlers
pub mod resources;

/// HTTP routes
pub mod routes;

pub use companion_core::models;
