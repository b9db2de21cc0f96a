// ABOUTME: HTTP server binary exposing the GLP-1 companion as a JSON API
// ABOUTME: Loads configuration from the environment, initializes logging, and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # GLP-1 Companion Server Binary
//!
//! Starts the JSON API on `HTTP_HOST:HTTP_PORT`.

use anyhow::{Context, Result};
use clap::Parser;
use glp1_companion::{
    catalog::RecipeSource, config::ServerConfig, logging, resources::ServerResources,
    routes::build_router,
};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

/// Command-line overrides applied on top of the environment
#[derive(Parser)]
#[command(name = "companion-server")]
#[command(about = "GLP-1 Companion - nutrition and meal planning API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the chat reply delay in milliseconds
    #[arg(long)]
    chat_reply_delay_ms: Option<u64>,
}

/// Environment configuration with the command-line overrides applied
fn load_config(args: &Args) -> Result<ServerConfig> {
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config = config.with_port(http_port);
    }
    if let Some(delay_ms) = args.chat_reply_delay_ms {
        config = config.with_chat_reply_delay_ms(delay_ms);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first so configuration loading is recorded
    logging::init_from_env()?;
    let config = load_config(&args)?;
    info!("{}", config.summary());

    let bind_addr = config.bind_addr();
    let resources = ServerResources::builder().with_config(config).build_arc();
    info!(recipes = resources.catalog.recipes().len(), "catalog loaded");

    let router = build_router(resources);
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
    }
    info!("shutdown signal received");
}
