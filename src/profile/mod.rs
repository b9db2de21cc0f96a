// ABOUTME: Dietary profile management: the editor state machine and its persistence target
// ABOUTME: Also exposes the closed option lists the editor offers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile
//!
//! - [`ProfileEditor`]: owned draft, consumed by save or cancel
//! - [`ProfileStore`]: where saved profiles go
//! - [`ProfileOptions`]: every selectable option with its label

/// Profile editor state machine
pub mod editor;
/// Persistence target for saved profiles
pub mod store;

use companion_core::models::{
    Allergen, CoreDietType, FaithPreference, HealthPreference, ProfileTag, Symptom,
};
use serde::Serialize;

pub use editor::{EditAction, ProfileEditor};
pub use store::{InMemoryProfileStore, ProfileStore};

/// A selectable option: serialized id plus label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry<T> {
    /// Value sent back in edit actions
    pub id: T,
    /// Display label
    pub label: &'static str,
    /// One-line description, where the option has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Every option the profile editor offers, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOptions {
    /// Core diets
    pub core_diets: Vec<OptionEntry<CoreDietType>>,
    /// Faith-based and ethical preferences
    pub faith: Vec<OptionEntry<FaithPreference>>,
    /// Health preferences
    pub health: Vec<OptionEntry<HealthPreference>>,
    /// Allergens
    pub allergens: Vec<OptionEntry<Allergen>>,
    /// Symptoms
    pub symptoms: Vec<OptionEntry<Symptom>>,
}

fn entries<T: ProfileTag>() -> Vec<OptionEntry<T>> {
    T::ALL
        .iter()
        .map(|&id| OptionEntry {
            id,
            label: id.label(),
            description: None,
        })
        .collect()
}

impl ProfileOptions {
    /// Build the option table
    #[must_use]
    pub fn new() -> Self {
        Self {
            core_diets: CoreDietType::ALL
                .iter()
                .map(|&id| OptionEntry {
                    id,
                    label: id.label(),
                    description: Some(id.description()),
                })
                .collect(),
            faith: entries(),
            health: entries(),
            allergens: entries(),
            symptoms: entries(),
        }
    }
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self::new()
    }
}
