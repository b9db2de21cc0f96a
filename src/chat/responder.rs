// ABOUTME: Scripted chat responder driven by an ordered keyword rule table
// ABOUTME: Lower-cases the input and returns the reply of the first rule with a matching keyword
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::chat::{
    FALLBACK_REPLY, HYDRATION_KEYWORDS, HYDRATION_REPLY, NAUSEA_KEYWORDS, NAUSEA_REPLY,
    PROTEIN_KEYWORDS, PROTEIN_REPLY, RECIPE_KEYWORDS, RECIPE_REPLY, SIDE_EFFECT_KEYWORDS,
    SIDE_EFFECT_REPLY,
};

/// Produces the assistant's reply to a user message
pub trait ChatResponder: Send + Sync {
    /// Reply text for `input`
    fn reply(&self, input: &str) -> String;
}

/// What a reply is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTopic {
    /// Protein guidance
    Protein,
    /// Nausea guidance
    Nausea,
    /// Recipe guidance
    Recipe,
    /// Hydration guidance
    Hydration,
    /// Side-effect guidance
    SideEffect,
    /// Nothing matched
    General,
}

/// One row of the rule table
#[derive(Debug, Clone, Copy)]
pub struct ChatRule {
    /// Topic the rule answers
    pub topic: ReplyTopic,
    /// Lower-case substrings, any of which triggers the rule
    pub keywords: &'static [&'static str],
    /// Canned reply
    pub reply: &'static str,
}

impl ChatRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in priority order; the first match wins
pub const RULES: &[ChatRule] = &[
    ChatRule {
        topic: ReplyTopic::Protein,
        keywords: PROTEIN_KEYWORDS,
        reply: PROTEIN_REPLY,
    },
    ChatRule {
        topic: ReplyTopic::Nausea,
        keywords: NAUSEA_KEYWORDS,
        reply: NAUSEA_REPLY,
    },
    ChatRule {
        topic: ReplyTopic::Recipe,
        keywords: RECIPE_KEYWORDS,
        reply: RECIPE_REPLY,
    },
    ChatRule {
        topic: ReplyTopic::Hydration,
        keywords: HYDRATION_KEYWORDS,
        reply: HYDRATION_REPLY,
    },
    ChatRule {
        topic: ReplyTopic::SideEffect,
        keywords: SIDE_EFFECT_KEYWORDS,
        reply: SIDE_EFFECT_REPLY,
    },
];

/// Responder backed by [`RULES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedResponder;

impl ScriptedResponder {
    /// Topic and reply for `input`
    #[must_use]
    pub fn respond(input: &str) -> (ReplyTopic, &'static str) {
        let lowered = input.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or((ReplyTopic::General, FALLBACK_REPLY), |rule| {
                (rule.topic, rule.reply)
            })
    }
}

impl ChatResponder for ScriptedResponder {
    fn reply(&self, input: &str) -> String {
        Self::respond(input).1.to_owned()
    }
}
