// ABOUTME: Profile editor state machine: an owned draft that is either saved or discarded
// ABOUTME: Every edit is infallible; save and cancel consume the editor so no edit can follow them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Editor
//!
//! Lifecycle: unopened → open-editing → (closed-saved | closed-discarded).
//!
//! "Unopened" is the absence of a [`ProfileEditor`]. [`ProfileEditor::open`]
//! enters open-editing. [`ProfileEditor::save`] and
//! [`ProfileEditor::cancel`] take the editor by value, so the closed states
//! are enforced by ownership: there is no editor left to mutate.

use std::collections::BTreeSet;

use companion_core::models::{
    Allergen, CoreDietType, FaithPreference, HealthPreference, ProfileData, Symptom,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::store::ProfileStore;
use crate::errors::AppResult;

/// A single edit applied to the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditAction {
    /// Choose the core diet
    SelectCoreDiet {
        /// Diet to select
        diet: CoreDietType,
    },
    /// Unset the core diet
    ClearCoreDiet,
    /// Flip a faith-based tag
    ToggleFaith {
        /// Tag to flip
        tag: FaithPreference,
    },
    /// Flip a health-preference tag
    ToggleHealth {
        /// Tag to flip
        tag: HealthPreference,
    },
    /// Flip an allergen tag
    ToggleAllergen {
        /// Tag to flip
        tag: Allergen,
    },
    /// Flip a symptom tag
    ToggleSymptom {
        /// Tag to flip
        tag: Symptom,
    },
    /// Set whether the user is on GLP-1 medication
    SetOnGlp1 {
        /// New value
        value: bool,
    },
    /// Append a free-text allergen
    AddCustomAllergen {
        /// Entry text
        text: String,
    },
    /// Remove a free-text allergen
    RemoveCustomAllergen {
        /// Entry text
        text: String,
    },
    /// Append a free-text restriction
    AddCustomRestriction {
        /// Entry text
        text: String,
    },
    /// Remove a free-text restriction
    RemoveCustomRestriction {
        /// Entry text
        text: String,
    },
}

/// An open profile editor holding the draft being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    draft: ProfileData,
}

impl ProfileEditor {
    /// Open the editor, starting from `initial` or from an empty profile
    #[must_use]
    pub fn open(initial: Option<ProfileData>) -> Self {
        Self {
            draft: initial.unwrap_or_default(),
        }
    }

    /// The draft as currently edited
    #[must_use]
    pub const fn draft(&self) -> &ProfileData {
        &self.draft
    }

    /// Apply an edit
    pub fn apply(&mut self, action: EditAction) {
        debug!(?action, "profile edit");
        match action {
            EditAction::SelectCoreDiet { diet } => self.select_core_diet(diet),
            EditAction::ClearCoreDiet => self.clear_core_diet(),
            EditAction::ToggleFaith { tag } => self.toggle_faith(tag),
            EditAction::ToggleHealth { tag } => self.toggle_health(tag),
            EditAction::ToggleAllergen { tag } => self.toggle_allergen(tag),
            EditAction::ToggleSymptom { tag } => self.toggle_symptom(tag),
            EditAction::SetOnGlp1 { value } => self.set_on_glp1(value),
            EditAction::AddCustomAllergen { text } => {
                self.add_custom_allergen(&text);
            }
            EditAction::RemoveCustomAllergen { text } => {
                self.remove_custom_allergen(&text);
            }
            EditAction::AddCustomRestriction { text } => {
                self.add_custom_restriction(&text);
            }
            EditAction::RemoveCustomRestriction { text } => {
                self.remove_custom_restriction(&text);
            }
        }
    }

    /// Choose the core diet, replacing any previous choice
    pub fn select_core_diet(&mut self, diet: CoreDietType) {
        self.draft.core_diet = Some(diet);
    }

    /// Unset the core diet
    pub fn clear_core_diet(&mut self) {
        self.draft.core_diet = None;
    }

    /// Flip a faith-based tag
    pub fn toggle_faith(&mut self, tag: FaithPreference) {
        toggle(&mut self.draft.faith, tag);
    }

    /// Flip a health-preference tag
    pub fn toggle_health(&mut self, tag: HealthPreference) {
        toggle(&mut self.draft.health, tag);
    }

    /// Flip an allergen tag
    pub fn toggle_allergen(&mut self, tag: Allergen) {
        toggle(&mut self.draft.allergens, tag);
    }

    /// Flip a symptom tag
    pub fn toggle_symptom(&mut self, tag: Symptom) {
        toggle(&mut self.draft.symptoms, tag);
    }

    /// Set whether the user is on GLP-1 medication
    pub fn set_on_glp1(&mut self, value: bool) {
        self.draft.on_glp1 = value;
    }

    /// Append a free-text allergen; returns whether it was added
    pub fn add_custom_allergen(&mut self, text: &str) -> bool {
        add_custom(&mut self.draft.custom_allergens, text)
    }

    /// Remove a free-text allergen; returns whether one was removed
    pub fn remove_custom_allergen(&mut self, text: &str) -> bool {
        remove_custom(&mut self.draft.custom_allergens, text)
    }

    /// Append a free-text restriction; returns whether it was added
    pub fn add_custom_restriction(&mut self, text: &str) -> bool {
        add_custom(&mut self.draft.custom_restrictions, text)
    }

    /// Remove a free-text restriction; returns whether one was removed
    pub fn remove_custom_restriction(&mut self, text: &str) -> bool {
        remove_custom(&mut self.draft.custom_restrictions, text)
    }

    /// Close the editor, handing the draft to the store
    ///
    /// # Errors
    ///
    /// Returns the store's error if it fails to persist the profile
    pub async fn save(self, store: &dyn ProfileStore) -> AppResult<ProfileData> {
        store.save(self.draft.clone()).await?;
        info!(
            core_diet = ?self.draft.core_diet,
            on_glp1 = self.draft.on_glp1,
            "profile saved"
        );
        Ok(self.draft)
    }

    /// Close the editor, discarding every edit
    pub fn cancel(self) {
        debug!("profile edits discarded");
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, tag: T) {
    if !set.remove(&tag) {
        set.insert(tag);
    }
}

/// Unicode-aware case folding used to compare custom entries
fn same_entry(entry: &str, folded: &str) -> bool {
    entry.to_lowercase() == folded
}

/// Trimmed entries; blank input and case-insensitive duplicates are ignored
fn add_custom(entries: &mut Vec<String>, text: &str) -> bool {
    let text = text.trim();
    let folded = text.to_lowercase();
    if text.is_empty() || entries.iter().any(|e| same_entry(e, &folded)) {
        return false;
    }
    entries.push(text.to_owned());
    true
}

fn remove_custom(entries: &mut Vec<String>, text: &str) -> bool {
    let folded = text.trim().to_lowercase();
    let before = entries.len();
    entries.retain(|e| !same_entry(e, &folded));
    entries.len() != before
}
