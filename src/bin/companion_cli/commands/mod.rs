// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for companion-cli
// ABOUTME: Provides recipe, chat, and education topic commands

pub mod chat;
pub mod recipes;
pub mod topics;
