// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Education topic command for companion-cli
// ABOUTME: Lists topic ids or prints one topic's summary and tips

use anyhow::Result;
use glp1_companion::education::{self, TopicId};
use glp1_companion::errors::AppError;

use crate::helpers::display;

/// List every topic, or show the one named by `id`
pub fn show(id: Option<&str>, as_json: bool) -> Result<()> {
    let Some(id) = id else {
        if as_json {
            return display::print_json(&education::topics());
        }
        for topic in education::topics() {
            println!("{:<16} {}", topic.id.as_str(), topic.title);
        }
        return Ok(());
    };

    let topic_id = TopicId::parse(id)
        .ok_or_else(|| AppError::not_found("Education topic").with_resource_id(id))?;
    let topic = education::topic(topic_id);

    if as_json {
        return display::print_json(topic);
    }
    display::display_topic(topic);
    Ok(())
}
