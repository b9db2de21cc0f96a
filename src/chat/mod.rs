// ABOUTME: Scripted GLP-1 assistant: keyword rule responder and per-session transcripts
// ABOUTME: No model inference; replies come from a fixed, ordered rule table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chat
//!
//! [`ScriptedResponder`] picks a canned reply by keyword. [`ChatSession`]
//! keeps the transcript and appends the reply after a short delay.

/// Keyword rule table and responder
pub mod responder;
/// Transcript and delayed reply
pub mod session;

pub use responder::{ChatResponder, ChatRule, ReplyTopic, ScriptedResponder, RULES};
pub use session::ChatSession;
