// ABOUTME: Top-level view router: current view, discover tab, profile section, and modal flags
// ABOUTME: Tab and section reset when their view is left, matching component-local UI state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # App State
//!
//! Which screen is showing. Navigation never fails: every view can be
//! entered, though `Scan` and the `Products` tab only show a placeholder.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Text shown by views that are not built yet
pub const COMING_SOON: &str = "Coming soon";

/// Bottom-navigation destinations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Recipe and product discovery
    #[default]
    Discover,
    /// Weekly meal plan
    MealPlan,
    /// Barcode scanning (placeholder)
    Scan,
    /// Favourited recipes
    Favorites,
    /// Profile, goals, and education
    Profile,
}

impl View {
    /// Whether the view only shows a placeholder
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Scan)
    }
}

/// Tabs of the discover view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoverTab {
    /// Recipe grid
    #[default]
    Recipes,
    /// Product discovery (placeholder)
    Products,
}

/// Sections of the profile view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileSection {
    /// Summary of the saved profile
    #[default]
    Overview,
    /// Goal tracking
    Goals,
    /// Education topics
    Education,
}

/// Modal dialogs layered over the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modal {
    /// Assistant chat
    Chat,
    /// Profile management dialog
    ProfileManagement,
}

/// A navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "to", rename_all = "snake_case")]
pub enum Navigation {
    /// Switch the main view
    View {
        /// Destination
        view: View,
    },
    /// Switch the discover tab (enters the discover view)
    DiscoverTab {
        /// Destination tab
        tab: DiscoverTab,
    },
    /// Switch the profile section (enters the profile view)
    ProfileSection {
        /// Destination section
        section: ProfileSection,
    },
}

/// Navigation state of the app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Main view
    pub view: View,
    /// Discover tab
    pub discover_tab: DiscoverTab,
    /// Profile section
    pub profile_section: ProfileSection,
    /// Chat dialog open
    pub chat_open: bool,
    /// Profile management dialog open
    pub profile_management_open: bool,
}

impl AppState {
    /// Initial state: discover view, recipes tab, no dialogs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the main view
    ///
    /// Leaving a view resets its tab or section; re-entering the current view
    /// keeps them.
    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            self.discover_tab = DiscoverTab::default();
            self.profile_section = ProfileSection::default();
            debug!(from = ?self.view, to = ?view, "view changed");
        }
        self.view = view;
    }

    /// Apply a navigation request
    pub fn apply(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::View { view } => self.navigate(view),
            Navigation::DiscoverTab { tab } => {
                self.navigate(View::Discover);
                self.discover_tab = tab;
            }
            Navigation::ProfileSection { section } => {
                self.navigate(View::Profile);
                self.profile_section = section;
            }
        }
    }

    /// Open a dialog
    pub fn open(&mut self, modal: Modal) {
        self.set_modal(modal, true);
    }

    /// Close a dialog
    pub fn close(&mut self, modal: Modal) {
        self.set_modal(modal, false);
    }

    fn set_modal(&mut self, modal: Modal, open: bool) {
        match modal {
            Modal::Chat => self.chat_open = open,
            Modal::ProfileManagement => self.profile_management_open = open,
        }
    }

    /// Placeholder text for what is on screen, if it is not built yet
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        let products = self.view == View::Discover && self.discover_tab == DiscoverTab::Products;
        (self.view.is_placeholder() || products).then_some(COMING_SOON)
    }
}
