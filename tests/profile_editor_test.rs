// ABOUTME: Integration tests for the profile editor lifecycle against the in-memory store
// ABOUTME: Covers cancel discarding edits, save persisting them, and custom entry rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use glp1_companion::models::{
    Allergen, CoreDietType, FaithPreference, ProfileData, ProfileTag, Symptom,
};
use glp1_companion::profile::{
    EditAction, InMemoryProfileStore, ProfileEditor, ProfileOptions, ProfileStore,
};

#[tokio::test]
async fn test_cancel_leaves_store_untouched() {
    let stored = ProfileData {
        core_diet: Some(CoreDietType::Vegan),
        ..ProfileData::default()
    };
    let store = InMemoryProfileStore::with_profile(stored.clone());

    let mut editor = ProfileEditor::open(store.load().await.unwrap());
    editor.select_core_diet(CoreDietType::Omnivore);
    editor.toggle_allergen(Allergen::PeanutsFree);
    editor.cancel();

    assert_eq!(store.load().await.unwrap(), Some(stored));
}

#[tokio::test]
async fn test_save_persists_every_edit() {
    let store = InMemoryProfileStore::new();
    assert_eq!(store.load().await.unwrap(), None);

    let mut editor = ProfileEditor::open(None);
    editor.apply(EditAction::SelectCoreDiet {
        diet: CoreDietType::Pescetarian,
    });
    editor.apply(EditAction::ToggleFaith {
        tag: FaithPreference::Halal,
    });
    editor.apply(EditAction::ToggleSymptom {
        tag: Symptom::Nausea,
    });
    editor.apply(EditAction::SetOnGlp1 { value: true });
    editor.apply(EditAction::AddCustomRestriction {
        text: "No spicy food".to_owned(),
    });

    let saved = editor.save(&store).await.unwrap();
    let loaded = store.load().await.unwrap().unwrap();

    assert_eq!(saved, loaded);
    assert_eq!(loaded.core_diet, Some(CoreDietType::Pescetarian));
    assert!(loaded.faith.contains(&FaithPreference::Halal));
    assert!(loaded.symptoms.contains(&Symptom::Nausea));
    assert!(loaded.on_glp1);
    assert_eq!(loaded.custom_restrictions, vec!["No spicy food"]);
}

#[test]
fn test_open_without_profile_starts_empty() {
    let editor = ProfileEditor::open(None);
    assert!(editor.draft().is_empty());
}

#[test]
fn test_clear_core_diet() {
    let mut editor = ProfileEditor::open(None);
    editor.select_core_diet(CoreDietType::Vegetarian);
    editor.clear_core_diet();
    assert_eq!(editor.draft().core_diet, None);
}

#[test]
fn test_toggle_twice_restores_tags() {
    let mut editor = ProfileEditor::open(None);
    editor.toggle_allergen(Allergen::GlutenFree);
    editor.toggle_allergen(Allergen::GlutenFree);
    assert!(editor.draft().allergens.is_empty());
}

#[test]
fn test_adding_sesame_twice_keeps_one_entry() {
    let mut editor = ProfileEditor::open(None);

    assert!(editor.add_custom_allergen("Sesame"));
    assert!(!editor.add_custom_allergen("Sesame"));
    assert!(!editor.add_custom_allergen("  sesame "));

    assert_eq!(editor.draft().custom_allergens, vec!["Sesame"]);
}

#[test]
fn test_accented_duplicates_are_ignored() {
    let mut editor = ProfileEditor::open(None);

    assert!(editor.add_custom_allergen("Éclair"));
    assert!(!editor.add_custom_allergen("éclair"));
    assert!(!editor.add_custom_allergen(" ÉCLAIR "));
    assert_eq!(editor.draft().custom_allergens, vec!["Éclair"]);

    assert!(editor.add_custom_restriction("Żurek"));
    assert!(editor.remove_custom_restriction("żUREK"));
    assert!(editor.draft().custom_restrictions.is_empty());
}

#[test]
fn test_blank_custom_entries_are_ignored() {
    let mut editor = ProfileEditor::open(None);
    assert!(!editor.add_custom_allergen("   "));
    assert!(!editor.add_custom_restriction(""));
    assert!(editor.draft().is_empty());
}

#[test]
fn test_remove_custom_entry_is_case_insensitive() {
    let mut editor = ProfileEditor::open(None);
    editor.add_custom_allergen("Mustard");

    assert!(editor.remove_custom_allergen("MUSTARD"));
    assert!(!editor.remove_custom_allergen("Mustard"));
    assert!(editor.draft().custom_allergens.is_empty());
}

#[test]
fn test_actions_deserialize_from_json() {
    let action: EditAction =
        serde_json::from_str(r#"{"action":"toggle_allergen","tag":"sesame-free"}"#).unwrap();
    assert_eq!(
        action,
        EditAction::ToggleAllergen {
            tag: Allergen::SesameFree
        }
    );
}

#[test]
fn test_options_cover_every_tag() {
    let options = ProfileOptions::new();

    assert_eq!(options.core_diets.len(), CoreDietType::ALL.len());
    assert_eq!(options.allergens.len(), 11);
    assert!(options.core_diets.iter().all(|o| o.description.is_some()));
    assert_eq!(
        Allergen::from_label(Allergen::TreeNuts.label()),
        Some(Allergen::TreeNuts)
    );
}
