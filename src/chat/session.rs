// ABOUTME: Chat session transcript with the delayed assistant reply
// ABOUTME: User messages append immediately; the reply is appended by a spawned timer task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use companion_core::models::ChatMessage;
use tokio::sync::RwLock;
use tokio::time;
use tracing::debug;
use uuid::Uuid;

use super::responder::ChatResponder;
use crate::constants::chat::GREETING;

/// Open order across every session in the process
static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// One conversation with the scripted assistant
///
/// The transcript is append-only and starts with the greeting. Cloning a
/// session shares its transcript.
#[derive(Clone)]
pub struct ChatSession {
    id: Uuid,
    sequence: u64,
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    responder: Arc<dyn ChatResponder>,
    reply_delay: Duration,
}

impl ChatSession {
    /// New session whose transcript holds the greeting
    #[must_use]
    pub fn new(responder: Arc<dyn ChatResponder>, reply_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence: NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed),
            transcript: Arc::new(RwLock::new(vec![ChatMessage::bot(GREETING)])),
            responder,
            reply_delay,
        }
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Position in open order; later sessions have larger values
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Snapshot of the transcript, oldest first
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// Submit user text
    ///
    /// Whitespace-only text is ignored and yields `None`. Otherwise the
    /// trimmed message is appended at once and the reply is scheduled on a
    /// detached task after the session's delay. Replies to concurrent
    /// submissions may land in either order, but each lands after its own
    /// user message.
    pub async fn submit(&self, text: &str) -> Option<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let message = ChatMessage::user(text);
        self.transcript.write().await.push(message.clone());

        let reply = self.responder.reply(text);
        let transcript = Arc::clone(&self.transcript);
        let delay = self.reply_delay;
        debug!(session_id = %self.id, delay_ms = delay.as_millis(), "chat reply scheduled");

        tokio::spawn(async move {
            time::sleep(delay).await;
            transcript.write().await.push(ChatMessage::bot(reply));
        });

        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use companion_core::models::Sender;

    use super::*;
    use crate::chat::responder::ScriptedResponder;
    use crate::constants::chat::PROTEIN_REPLY;

    fn session(delay_ms: u64) -> ChatSession {
        ChatSession::new(Arc::new(ScriptedResponder), Duration::from_millis(delay_ms))
    }

    #[tokio::test]
    async fn test_new_session_starts_with_greeting() {
        let messages = session(0).messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].text, GREETING);
    }

    #[tokio::test]
    async fn test_whitespace_is_ignored() {
        let chat = session(0);
        assert!(chat.submit("   \n").await.is_none());
        assert_eq!(chat.messages().await.len(), 1);
    }

    #[tokio::test]
    async fn test_reply_follows_user_message_after_delay() {
        let chat = session(20);
        chat.submit("protein?").await.unwrap();

        let before = chat.messages().await;
        assert_eq!(before.len(), 2);
        assert_eq!(before[1].sender, Sender::User);

        time::sleep(Duration::from_millis(200)).await;
        let after = chat.messages().await;
        assert_eq!(after.len(), 3);
        assert_eq!(after[2].sender, Sender::Bot);
        assert_eq!(after[2].text, PROTEIN_REPLY);
    }
}
