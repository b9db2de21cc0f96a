// ABOUTME: Tag filter with toggle semantics and the recipe listing query built on it
// ABOUTME: Any-mode matches intersecting tags, All-mode requires every active tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeSet, HashSet};

use companion_core::models::{Recipe, RecipeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How active filters combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// A recipe matches if it carries at least one active tag
    #[default]
    Any,
    /// A recipe matches only if it carries every active tag
    All,
}

/// The set of active filter tags
///
/// Toggling a tag twice restores the original set; a tag is never held twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    active: BTreeSet<String>,
}

impl TagFilter {
    /// Filter with no active tags
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with the given tags active (duplicates collapse)
    #[must_use]
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Flip a tag; returns whether it is active afterwards
    pub fn toggle(&mut self, tag: &str) -> bool {
        let active = if self.active.remove(tag) {
            false
        } else {
            self.active.insert(tag.to_owned());
            true
        };
        debug!(tag, active, "filter toggled");
        active
    }

    /// Deactivate every tag
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Whether a tag is active
    #[must_use]
    pub fn is_active(&self, tag: &str) -> bool {
        self.active.contains(tag)
    }

    /// Whether no tags are active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active tags in sorted order
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    /// Whether a recipe passes the filter
    ///
    /// With no active tags every recipe matches.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe, mode: FilterMode) -> bool {
        if self.active.is_empty() {
            return true;
        }
        match mode {
            FilterMode::Any => recipe.tags.iter().any(|tag| self.active.contains(tag)),
            FilterMode::All => self.active.iter().all(|tag| recipe.has_tag(tag)),
        }
    }
}

/// A recipe listing query
#[derive(Debug, Clone, Copy)]
pub struct RecipeQuery<'a> {
    /// Active tag filter
    pub filter: &'a TagFilter,
    /// How the filter's tags combine
    pub mode: FilterMode,
    /// Case-insensitive title substring
    pub search: Option<&'a str>,
    /// When set, only these recipes are listed
    pub only: Option<&'a HashSet<RecipeId>>,
}

impl<'a> RecipeQuery<'a> {
    /// Query applying only a tag filter in Any mode
    #[must_use]
    pub const fn new(filter: &'a TagFilter) -> Self {
        Self {
            filter,
            mode: FilterMode::Any,
            search: None,
            only: None,
        }
    }

    /// Set the filter mode
    #[must_use]
    pub const fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    /// Restrict to titles containing `text`; blank text is ignored
    #[must_use]
    pub fn with_search(mut self, text: &'a str) -> Self {
        let text = text.trim();
        self.search = (!text.is_empty()).then_some(text);
        self
    }

    /// Restrict to the given recipe ids
    #[must_use]
    pub const fn with_only(mut self, ids: &'a HashSet<RecipeId>) -> Self {
        self.only = Some(ids);
        self
    }

    /// Whether a recipe satisfies every part of the query
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(ids) = self.only {
            if !ids.contains(&recipe.id) {
                return false;
            }
        }
        if let Some(text) = self.search {
            if !recipe
                .title
                .to_lowercase()
                .contains(&text.to_lowercase())
            {
                return false;
            }
        }
        self.filter.matches(recipe, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use companion_core::models::CoreNutrients;

    use super::*;

    fn recipe(tags: &[&str]) -> Recipe {
        Recipe::new(1, "Lean Turkey Bowl", CoreNutrients::new(40.0, 9.0, 465.0))
            .with_tags(tags.iter().copied())
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut filter = TagFilter::from_tags(["Quick"]);
        let original = filter.clone();

        assert!(filter.toggle("Snack"));
        assert!(!filter.toggle("Snack"));
        assert_eq!(filter, original);
    }

    #[test]
    fn test_any_and_all_modes() {
        let filter = TagFilter::from_tags(["Quick", "High Protein"]);
        let bowl = recipe(&["High Protein", "Dinner"]);

        assert!(filter.matches(&bowl, FilterMode::Any));
        assert!(!filter.matches(&bowl, FilterMode::All));
        assert!(TagFilter::new().matches(&bowl, FilterMode::All));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = TagFilter::new();
        let bowl = recipe(&[]);

        assert!(RecipeQuery::new(&filter).with_search("turkey").matches(&bowl));
        assert!(RecipeQuery::new(&filter).with_search("   ").matches(&bowl));
        assert!(!RecipeQuery::new(&filter).with_search("salmon").matches(&bowl));
    }
}
