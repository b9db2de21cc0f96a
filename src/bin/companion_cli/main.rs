// ABOUTME: Companion CLI - terminal front end for the GLP-1 companion library
// ABOUTME: Classifies meals, browses recipes and education topics, and chats with the assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Rate a meal
//! companion-cli classify --protein 28 --fibre 5 --calories 320
//!
//! # List breakfast recipes that are also quick
//! companion-cli recipes --filter Breakfast --filter Quick --match all
//!
//! # Show one recipe with its nutrition facts
//! companion-cli recipe 1
//!
//! # Ask the assistant a single question, or start an interactive chat
//! companion-cli chat "how much water should I drink"
//! companion-cli chat
//!
//! # Read an education topic
//! companion-cli topics nausea
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use glp1_companion::catalog::FilterMode;
use glp1_companion::logging::{LogFormat, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "companion-cli",
    about = "GLP-1 Companion CLI",
    long_about = "Terminal front end for rating meals, browsing recipes, and reading GLP-1 guidance."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rate a meal's GLP-1 suitability
    Classify {
        /// Protein per serving (g)
        #[arg(long)]
        protein: f64,

        /// Fibre per serving (g)
        #[arg(long)]
        fibre: f64,

        /// Energy per serving (kcal)
        #[arg(long)]
        calories: f64,
    },

    /// List recipes
    Recipes {
        /// Active filter tag (repeatable)
        #[arg(long = "filter", short = 'f')]
        filters: Vec<String>,

        /// How filters combine
        #[arg(long = "match", value_enum, default_value = "any")]
        mode: MatchArg,

        /// Title search text
        #[arg(long, short = 'q')]
        search: Option<String>,
    },

    /// Show one recipe
    Recipe {
        /// Recipe id
        id: u32,
    },

    /// Ask the assistant; with no message, start an interactive session
    Chat {
        /// Message to send
        message: Vec<String>,
    },

    /// List education topics, or show one
    Topics {
        /// Topic id, e.g. "nausea" or "goal-setting"
        id: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum MatchArg {
    Any,
    All,
}

impl From<MatchArg> for FilterMode {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Any => Self::Any,
            MatchArg::All => Self::All,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig {
        level: level.to_owned(),
        ..LoggingConfig::from_env()
    }
    .with_format(LogFormat::Compact)
    .init()?;

    match cli.command {
        Command::Classify {
            protein,
            fibre,
            calories,
        } => commands::recipes::classify(protein, fibre, calories, cli.json)?,
        Command::Recipes {
            filters,
            mode,
            search,
        } => commands::recipes::list(&filters, mode.into(), search.as_deref(), cli.json)?,
        Command::Recipe { id } => commands::recipes::show(id, cli.json)?,
        Command::Chat { message } => commands::chat::run(&message.join(" "), cli.json).await?,
        Command::Topics { id } => commands::topics::show(id.as_deref(), cli.json)?,
    }

    Ok(())
}
