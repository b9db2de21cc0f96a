// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request helper and a router factory with a short chat delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

use std::sync::Arc;

use axum::Router;
use glp1_companion::config::ServerConfig;
use glp1_companion::resources::ServerResources;
use glp1_companion::routes::build_router;

/// Chat reply delay used by route tests
#[allow(dead_code)]
pub const TEST_REPLY_DELAY_MS: u64 = 20;

#[allow(dead_code)]
/// Resources with default collaborators and a short chat delay
pub fn test_resources() -> Arc<ServerResources> {
    let config = ServerConfig::default().with_chat_reply_delay_ms(TEST_REPLY_DELAY_MS);
    ServerResources::builder().with_config(config).build_arc()
}

#[allow(dead_code)]
/// Router over `resources`; clone the `Arc` to send several requests to one state
pub fn test_router(resources: &Arc<ServerResources>) -> Router {
    build_router(Arc::clone(resources))
}
