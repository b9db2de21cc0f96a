// ABOUTME: Integration tests for tag filtering and recipe listing queries
// ABOUTME: Covers toggle semantics, Any/All matching, title search, and favourites-only listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use glp1_companion::catalog::{FilterMode, RecipeQuery, RecipeSource, StaticCatalog, TagFilter};
use glp1_companion::models::RecipeId;

fn ids(catalog: &StaticCatalog, query: &RecipeQuery<'_>) -> Vec<RecipeId> {
    catalog.search(query).iter().map(|recipe| recipe.id).collect()
}

#[test]
fn test_toggle_twice_restores_original_set() {
    let mut filter = TagFilter::from_tags(["Quick"]);
    let before = filter.clone();

    assert!(filter.toggle("Breakfast"));
    assert!(filter.is_active("Breakfast"));
    assert!(!filter.toggle("Breakfast"));

    assert_eq!(filter, before);
}

#[test]
fn test_toggle_never_duplicates() {
    let mut filter = TagFilter::new();
    filter.toggle("Lunch");
    filter.toggle("Dinner");
    filter.toggle("Lunch");
    filter.toggle("Lunch");

    let active: Vec<&str> = filter.active().collect();
    assert_eq!(active, vec!["Dinner", "Lunch"]);
}

#[test]
fn test_empty_filter_lists_everything() {
    let catalog = StaticCatalog::seeded();
    let filter = TagFilter::new();

    assert_eq!(ids(&catalog, &RecipeQuery::new(&filter)).len(), catalog.len());
}

#[test]
fn test_any_mode_matches_intersection() {
    let catalog = StaticCatalog::seeded();
    let filter = TagFilter::from_tags(["Breakfast", "Dinner"]);

    let matched = ids(&catalog, &RecipeQuery::new(&filter));

    assert!(matched.contains(&3));
    assert!(matched.contains(&4));
    assert!(!matched.contains(&2));
}

#[test]
fn test_all_mode_requires_every_tag() {
    let catalog = StaticCatalog::seeded();
    let filter = TagFilter::from_tags(["High Protein", "Quick"]);

    let any = ids(&catalog, &RecipeQuery::new(&filter));
    let all = ids(
        &catalog,
        &RecipeQuery::new(&filter).with_mode(FilterMode::All),
    );

    assert!(all.len() < any.len());
    for id in all {
        let recipe = catalog.get(id).unwrap();
        assert!(recipe.has_tag("High Protein") && recipe.has_tag("Quick"));
    }
}

#[test]
fn test_title_search_is_case_insensitive() {
    let catalog = StaticCatalog::seeded();
    let filter = TagFilter::new();

    let matched = ids(&catalog, &RecipeQuery::new(&filter).with_search("  SALMON "));
    assert_eq!(matched, vec![3]);

    let blank = ids(&catalog, &RecipeQuery::new(&filter).with_search("   "));
    assert_eq!(blank.len(), catalog.len());
}

#[test]
fn test_favorites_only_restricts_listing() {
    let catalog = StaticCatalog::seeded();
    let filter = TagFilter::new();
    let favorites: HashSet<RecipeId> = [2, 5].into_iter().collect();

    let matched = ids(&catalog, &RecipeQuery::new(&filter).with_only(&favorites));
    assert_eq!(matched, vec![2, 5]);
}

#[test]
fn test_each_meal_chip_matches_seed_recipes() {
    let catalog = StaticCatalog::seeded();
    let by_meal = |meal: &str| ids(&catalog, &RecipeQuery::new(&TagFilter::from_tags([meal])));

    let breakfast = by_meal("Breakfast");
    let lunch = by_meal("Lunch");
    let dinner = by_meal("Dinner");

    assert!(breakfast.contains(&4) && breakfast.contains(&5));
    assert!(lunch.contains(&1) && lunch.contains(&2));
    assert!(dinner.contains(&3) && dinner.contains(&6));
}
