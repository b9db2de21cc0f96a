// ABOUTME: Education content for managing GLP-1 treatment side effects and setting goals
// ABOUTME: A fixed topic catalog plus the daily hydration tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Education
//!
//! Seven topics, each with a summary and practical tips. The hydration topic
//! also drives the [`HydrationTracker`].

/// Daily glass tracker
pub mod hydration;

use serde::{Deserialize, Serialize};

pub use hydration::HydrationTracker;

/// Education topic identifiers, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicId {
    /// Fluids and the hydration tracker
    Hydration,
    /// Nausea and vomiting
    Nausea,
    /// Diarrhoea
    Diarrhoea,
    /// Constipation
    Constipation,
    /// Reflux, heartburn, and indigestion
    Reflux,
    /// Where to find support
    HealthSupport,
    /// SMART goal setting
    GoalSetting,
}

impl TopicId {
    /// Every topic, in menu order
    pub const ALL: [Self; 7] = [
        Self::Hydration,
        Self::Nausea,
        Self::Diarrhoea,
        Self::Constipation,
        Self::Reflux,
        Self::HealthSupport,
        Self::GoalSetting,
    ];

    /// Identifier as used in URLs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hydration => "hydration",
            Self::Nausea => "nausea",
            Self::Diarrhoea => "diarrhoea",
            Self::Constipation => "constipation",
            Self::Reflux => "reflux",
            Self::HealthSupport => "health-support",
            Self::GoalSetting => "goal-setting",
        }
    }

    /// Topic for a URL identifier
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.as_str() == id)
    }
}

/// One education topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Identifier
    pub id: TopicId,
    /// Menu label
    pub title: &'static str,
    /// Opening paragraph
    pub summary: &'static str,
    /// Practical tips
    pub tips: &'static [&'static str],
}

const SIDE_EFFECT_INTRO: &str = "Side effects are a common and normal response to GLP-1 treatment and may change over time. If they persist, or you notice signs of dehydration, speak to your healthcare professional.";

static TOPICS: [Topic; 7] = [
    Topic {
        id: TopicId::Hydration,
        title: "Hydration",
        summary: "Aim for about 2-3 litres of fluids a day, roughly 10 average glasses. Spreading it out over the day makes it manageable.",
        tips: &[
            "Plain water, unsweetened tea, and unsweetened coffee are the best choices",
            "Low-fat milk or soy milk hydrate and add nourishment",
            "Go easy on sugary drinks, alcohol, and too much caffeine",
            "Peppermint or ginger tea can be soothing",
        ],
    },
    Topic {
        id: TopicId::Nausea,
        title: "Nausea & Vomiting",
        summary: SIDE_EFFECT_INTRO,
        tips: &[
            "Eat smaller meals more often and stop when you feel full",
            "Choose bland, dry foods such as crackers or toast",
            "Avoid strong-smelling, greasy, or very spicy foods",
            "Sip fluids between meals rather than with them",
        ],
    },
    Topic {
        id: TopicId::Diarrhoea,
        title: "Diarrhoea",
        summary: SIDE_EFFECT_INTRO,
        tips: &[
            "Replace lost fluids with small, frequent sips",
            "Limit greasy, fried, and very sugary foods",
            "Try plain foods such as rice, bananas, and toast",
            "Cut back on caffeine and alcohol until it settles",
        ],
    },
    Topic {
        id: TopicId::Constipation,
        title: "Constipation",
        summary: SIDE_EFFECT_INTRO,
        tips: &[
            "Increase fibre gradually with wholegrains, fruit, vegetables, and pulses",
            "Drink 6 to 8 glasses of fluid a day alongside extra fibre",
            "Gentle daily movement such as walking helps",
        ],
    },
    Topic {
        id: TopicId::Reflux,
        title: "Reflux, Heartburn & Indigestion",
        summary: SIDE_EFFECT_INTRO,
        tips: &[
            "Eat smaller portions and eat slowly",
            "Avoid lying down for 2-3 hours after eating",
            "Limit fatty foods, chocolate, citrus, and fizzy drinks",
        ],
    },
    Topic {
        id: TopicId::HealthSupport,
        title: "Health Support",
        summary: "Your healthcare team is there to help with side effects, medication questions, and nutrition.",
        tips: &[
            "Keep a note of symptoms to share at appointments",
            "Ask about a dietitian referral for personalised advice",
            "Seek urgent care for severe abdominal pain or persistent vomiting",
        ],
    },
    Topic {
        id: TopicId::GoalSetting,
        title: "Goal Setting",
        summary: "SMART goals are specific, measurable, achievable, relevant, and time-bound.",
        tips: &[
            "I will include a protein source at every meal this week",
            "I will try a 10-minute strength session once a week for 3 weeks",
            "I will drink 8 glasses of water today",
        ],
    },
];

/// Every topic, in menu order
#[must_use]
pub fn topics() -> &'static [Topic] {
    &TOPICS
}

/// The topic with `id`
#[must_use]
pub fn topic(id: TopicId) -> &'static Topic {
    // TOPICS is declared in TopicId discriminant order
    &TOPICS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_follow_menu_order() {
        for (topic, id) in topics().iter().zip(TopicId::ALL) {
            assert_eq!(topic.id, id);
        }
    }

    #[test]
    fn test_ids_round_trip_through_urls() {
        for id in TopicId::ALL {
            assert_eq!(TopicId::parse(id.as_str()), Some(id));
            assert_eq!(topic(id).id, id);
        }
        assert_eq!(TopicId::parse("sleep"), None);
    }
}
