// ABOUTME: Copy for the scripted nutrition assistant
// ABOUTME: Greeting, keyword groups, canned replies, and default reply delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// First message of every chat session
pub const GREETING: &str =
    "Hello! I'm your GLP-1 nutrition assistant. How can I help you today?";

/// Keywords that select the protein reply
pub const PROTEIN_KEYWORDS: &[&str] = &["protein"];

/// Keywords that select the nausea reply
pub const NAUSEA_KEYWORDS: &[&str] = &["nausea", "sick"];

/// Keywords that select the recipe reply
pub const RECIPE_KEYWORDS: &[&str] = &["recipe"];

/// Keywords that select the hydration reply
pub const HYDRATION_KEYWORDS: &[&str] = &["water", "hydration"];

/// Keywords that select the side effect reply
pub const SIDE_EFFECT_KEYWORDS: &[&str] = &["side effect"];

/// Reply for protein questions
pub const PROTEIN_REPLY: &str = "Great question about protein! For GLP-1 users, aim for 20-30g of protein per meal to support muscle maintenance and satiety. Good sources include lean meats, fish, eggs, tofu, and Greek yoghurt.";

/// Reply for nausea questions
pub const NAUSEA_REPLY: &str = "I understand nausea can be challenging. Try eating smaller, more frequent meals, avoid strong-smelling foods, and choose bland options like crackers or toast. Check our Education section for more tips!";

/// Reply for recipe questions
pub const RECIPE_REPLY: &str = "I can help you find recipes! What type of meal are you looking for? You can browse our Recipes section for GLP-1-friendly options with proper portion sizes and protein content.";

/// Reply for hydration questions
pub const HYDRATION_REPLY: &str = "Staying hydrated is crucial! Aim for 6-8 glasses of water daily. Our Hydration tracker in the Education section can help you monitor your intake.";

/// Reply for side effect questions
pub const SIDE_EFFECT_REPLY: &str = "Side effects are common with GLP-1 treatment. Visit our Education section for detailed guidance on managing nausea, constipation, diarrhoea, and more. If symptoms persist, please consult your healthcare provider.";

/// Reply when no keyword group matches
pub const FALLBACK_REPLY: &str = "I'm here to help with GLP-1 nutrition guidance, recipe suggestions, meal planning, and managing side effects. What would you like to know more about?";

/// Default delay before the assistant reply is appended (milliseconds)
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Default number of chat sessions kept at once; opening one more evicts the oldest
pub const DEFAULT_MAX_CHAT_SESSIONS: usize = 64;
