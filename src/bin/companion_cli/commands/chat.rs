// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Chat command for companion-cli
// ABOUTME: Answers one question, or runs an interactive session over stdin

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use glp1_companion::chat::{ChatSession, ScriptedResponder};
use glp1_companion::config::ServerConfig;
use glp1_companion::models::{ChatMessage, Sender};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::time;

use crate::helpers::display;

/// Extra wait after the reply delay before the transcript is read
const REPLY_GRACE: Duration = Duration::from_millis(50);

/// Send `message`, or chat interactively when it is empty
pub async fn run(message: &str, as_json: bool) -> Result<()> {
    let config = ServerConfig::from_env()?;
    let delay = config.chat_reply_delay();
    let session = ChatSession::new(Arc::new(ScriptedResponder), delay);

    if !message.trim().is_empty() {
        session.submit(message).await;
        time::sleep(delay + REPLY_GRACE).await;
        let transcript = session.messages().await;
        if as_json {
            return display::print_json(&transcript);
        }
        if let Some(reply) = transcript.iter().rev().find(|m| m.sender == Sender::Bot) {
            println!("{}", reply.text);
        }
        return Ok(());
    }

    let mut shown = print_new(&session.messages().await, 0);
    println!("(type a question, or an empty line to quit)");
    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if session.submit(&line).await.is_none() {
            break;
        }
        time::sleep(delay + REPLY_GRACE).await;
        // The user's own line is already on screen
        shown += 1;
        shown = print_new(&session.messages().await, shown);
    }
    Ok(())
}

fn print_new(transcript: &[ChatMessage], shown: usize) -> usize {
    for message in transcript.iter().skip(shown) {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Bot => "assistant",
        };
        println!("{who}: {}", message.text);
    }
    transcript.len()
}
