// ABOUTME: Dietary profile model and the closed option lists offered by the profile editor
// ABOUTME: Tag sets are typed enumerations held in ordered sets, custom entries are free text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A selectable profile option with a human-readable label
pub trait ProfileTag: Copy + Ord + Sized + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Label shown in the editor
    fn label(self) -> &'static str;

    /// Option whose label matches `label` exactly
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.label() == label)
    }
}

/// Declares a closed tag enum together with its labels
macro_rules! profile_tag {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl ProfileTag for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

profile_tag! {
    /// A user's primary eating pattern (single-select)
    CoreDietType {
        /// Eats all types of food
        Omnivore => "Omnivore",
        /// No meat or fish
        Vegetarian => "Vegetarian",
        /// No animal products
        Vegan => "Vegan",
        /// No meat, includes fish
        Pescetarian => "Pescetarian",
        /// No meat, fish, or eggs
        LactoVegetarian => "Lacto-vegetarian",
        /// No meat, fish, or dairy
        OvoVegetarian => "Ovo-vegetarian",
    }
}

impl CoreDietType {
    /// One-line description shown under the diet label
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Omnivore => "Eats all types of food including meat, fish, and plants",
            Self::Vegetarian => "No meat or fish, includes dairy and eggs",
            Self::Vegan => "No animal products including dairy and eggs",
            Self::Pescetarian => "No meat, includes fish, dairy, and eggs",
            Self::LactoVegetarian => "No meat, fish, or eggs, includes dairy",
            Self::OvoVegetarian => "No meat, fish, or dairy, includes eggs",
        }
    }
}

profile_tag! {
    /// Faith-based and ethical preferences
    FaithPreference {
        /// Halal
        Halal => "Halal",
        /// Kosher
        Kosher => "Kosher",
        /// Organic
        Organic => "Organic",
    }
}

profile_tag! {
    /// Health preferences
    HealthPreference {
        /// Low salt
        LowSalt => "Low Salt",
        /// Low fat
        LowFat => "Low Fat",
        /// Low sugar
        LowSugar => "Low Sugar",
        /// Low saturated fat
        LowSaturatedFat => "Low Saturated Fat",
        /// High fibre
        HighFibre => "High Fibre",
        /// Source of fibre
        SourceOfFibre => "Source of Fibre",
    }
}

profile_tag! {
    /// Allergen exclusions
    Allergen {
        /// Milk-free
        MilkFree => "Milk-free",
        /// Lactose-free
        LactoseFree => "Lactose-free",
        /// Egg-free
        EggFree => "Egg-free",
        /// Soya-free
        SoyaFree => "Soya-free",
        /// Tree nuts
        TreeNuts => "Tree Nuts",
        /// Peanuts-free
        PeanutsFree => "Peanuts-free",
        /// Gluten-free
        GlutenFree => "Gluten-free",
        /// Wheat-free
        WheatFree => "Wheat-free",
        /// Shellfish-free
        ShellfishFree => "Shellfish-free",
        /// Sesame-free
        SesameFree => "Sesame-free",
        /// Fish-free
        FishFree => "Fish-free",
    }
}

profile_tag! {
    /// Symptoms the user is experiencing on GLP-1 medication
    Symptom {
        /// Nausea and/or vomiting
        Nausea => "Nausea and/or Vomiting",
        /// Diarrhoea
        Diarrhoea => "Diarrhoea",
        /// Constipation
        Constipation => "Constipation",
        /// Indigestion, heartburn, or reflux
        Reflux => "Indigestion / Heartburn / Reflux",
        /// Reduced appetite
        ReducedAppetite => "Reduced Appetite",
        /// Gas or bloating
        Bloating => "Gas or Bloating",
        /// Fatigue
        Fatigue => "Fatigue",
    }
}

/// The dietary profile edited in the profile dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    /// Primary eating pattern, unset until chosen
    pub core_diet: Option<CoreDietType>,
    /// Faith-based and ethical tags
    pub faith: BTreeSet<FaithPreference>,
    /// Health-preference tags
    pub health: BTreeSet<HealthPreference>,
    /// Allergen tags
    pub allergens: BTreeSet<Allergen>,
    /// Free-text allergens, in insertion order
    pub custom_allergens: Vec<String>,
    /// Whether the user currently takes GLP-1 medication
    pub on_glp1: bool,
    /// Symptom tags
    pub symptoms: BTreeSet<Symptom>,
    /// Free-text dietary restrictions, in insertion order
    pub custom_restrictions: Vec<String>,
}

impl ProfileData {
    /// Whether nothing has been selected yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_resolve_back_to_tags() {
        for allergen in Allergen::ALL {
            assert_eq!(Allergen::from_label(allergen.label()), Some(*allergen));
        }
        assert_eq!(Symptom::from_label("Fatigue"), Some(Symptom::Fatigue));
        assert_eq!(Symptom::from_label("fatigue"), None);
    }

    #[test]
    fn test_option_list_sizes() {
        assert_eq!(CoreDietType::ALL.len(), 6);
        assert_eq!(FaithPreference::ALL.len(), 3);
        assert_eq!(HealthPreference::ALL.len(), 6);
        assert_eq!(Allergen::ALL.len(), 11);
        assert_eq!(Symptom::ALL.len(), 7);
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let profile: ProfileData =
            serde_json::from_str(r#"{"core_diet":"lacto-vegetarian","on_glp1":true}"#).unwrap();

        assert_eq!(profile.core_diet, Some(CoreDietType::LactoVegetarian));
        assert!(profile.on_glp1);
        assert!(profile.allergens.is_empty());
        assert!(!profile.is_empty());
        assert!(ProfileData::default().is_empty());
    }
}
