// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for companion-cli
// ABOUTME: Renders recipe cards, recipe details, badges, and topics as plain text

use anyhow::Result;
use glp1_companion::catalog::{RecipeCard, RecipeDetail};
use glp1_companion::education::Topic;
use glp1_companion::intelligence::{BadgeView, Nutrient, ThresholdAnalysis};
use serde::Serialize;

/// Print any response as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a badge on one line
pub fn display_badge(badge: &BadgeView) {
    println!("{} {} ({})", badge.score, badge.heading, badge.tier.level());
    for benefit in &badge.benefits {
        println!("   - {benefit}");
    }
}

/// Display what a meal lacks for the next tier
pub fn display_analysis(analysis: &ThresholdAnalysis) {
    let Some(next) = analysis.next_tier else {
        println!("Meets every threshold.");
        return;
    };
    println!("To reach {}:", next.short_name());
    for shortfall in &analysis.shortfalls {
        let (name, verb, unit) = match shortfall.nutrient {
            Nutrient::Protein => ("protein", "at least", "g"),
            Nutrient::Fibre => ("fibre", "at least", "g"),
            Nutrient::Calories => ("calories", "at most", " kcal"),
        };
        println!(
            "   - {name} {verb} {}{unit} (has {}{unit})",
            shortfall.required, shortfall.actual
        );
    }
}

/// Display recipe cards as a table
pub fn display_cards(cards: &[RecipeCard]) {
    if cards.is_empty() {
        println!("No recipes match.");
        return;
    }
    println!(
        "{:>3}  {:<40} {:>7} {:>6} {:>6}  {}",
        "ID", "TITLE", "PROTEIN", "FIBRE", "KCAL", "SUITABILITY"
    );
    println!("{}", "=".repeat(80));
    for card in cards {
        println!(
            "{:>3}  {:<40} {:>6}g {:>5}g {:>6}  {} {}",
            card.id,
            card.title,
            card.protein_g,
            card.fibre_g,
            card.calories,
            card.badge.score,
            card.badge.heading
        );
    }
}

/// Display a recipe with nutrition facts, ingredients, and method
pub fn display_detail(detail: &RecipeDetail) {
    let card = &detail.card;
    println!("\n{}", card.title);
    println!("{}", "=".repeat(card.title.len().max(20)));
    println!(
        "{} min | {} | {} likes",
        card.prep_time_mins, card.servings, card.likes
    );
    if !card.tags.is_empty() {
        println!("Tags: {}", card.tags.join(", "));
    }
    println!();
    display_badge(&detail.full_badge);
    if card.high_protein {
        println!("High Protein");
    }

    println!("\nNutrition Facts (per serving)");
    println!("{}", "-".repeat(40));
    for fact in &detail.nutrition_facts {
        let indent = if fact.indented { "  " } else { "" };
        println!(
            "{indent}{:<22} {:>6}{:<3} {:>4.0}%",
            fact.name, fact.amount, fact.unit, fact.daily_percent
        );
    }

    if !detail.ingredients.is_empty() {
        println!("\nIngredients");
        for ingredient in &detail.ingredients {
            println!("   - {ingredient}");
        }
    }
    if !detail.instructions.is_empty() {
        println!("\nMethod");
        for (step, instruction) in detail.instructions.iter().enumerate() {
            println!("   {}. {instruction}", step + 1);
        }
    }
}

/// Display one education topic
pub fn display_topic(topic: &Topic) {
    println!("\n{}", topic.title);
    println!("{}", "=".repeat(topic.title.len()));
    println!("{}\n", topic.summary);
    for tip in topic.tips {
        println!("   - {tip}");
    }
}
