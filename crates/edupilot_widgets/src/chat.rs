//! Floating chat panel
//!
//! The panel keeps its draft and transcript in memory for as long as the
//! owning view is mounted. There is no backend: sent messages are only
//! appended to the local transcript.

use edupilot_core::{CyclerError, Result};
use serde::Serialize;
use tracing::debug;

use crate::disclosure::Disclosure;

/// Panel title
pub const CHAT_TITLE: &str = "Chat Bot";

/// Input placeholder
pub const CHAT_PLACEHOLDER: &str = "Type message...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatAuthor {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

/// Chat widget state
#[derive(Clone, Debug, Default)]
pub struct ChatWidget {
    panel: Disclosure,
    draft: String,
    transcript: Vec<ChatMessage>,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.panel.open();
    }

    /// Close the panel; the draft and transcript are kept
    pub fn close(&mut self) {
        self.panel.close();
    }

    pub fn toggle(&mut self) -> bool {
        self.panel.toggle()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Append the draft to the transcript and clear it
    ///
    /// Rejected when the panel is closed or the trimmed draft is empty; the
    /// draft is left untouched in that case.
    pub fn send(&mut self) -> Result<&ChatMessage> {
        if !self.panel.is_open() {
            return Err(CyclerError::input("chat panel is closed"));
        }
        let text = self.draft.trim();
        if text.is_empty() {
            return Err(CyclerError::input("message is empty"));
        }

        let message = ChatMessage {
            author: ChatAuthor::User,
            text: text.to_string(),
        };
        self.draft.clear();
        self.transcript.push(message);
        debug!(messages = self.transcript.len(), "chat message sent");
        Ok(&self.transcript[self.transcript.len() - 1])
    }

    /// Append a bot-authored message
    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.transcript.push(ChatMessage {
            author: ChatAuthor::Bot,
            text: text.into(),
        });
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_requires_open_panel() {
        let mut chat = ChatWidget::new();
        chat.set_draft("hello");
        assert!(chat.send().is_err());
        assert_eq!(chat.draft(), "hello");
    }

    #[test]
    fn test_send_trims_and_clears() {
        let mut chat = ChatWidget::new();
        chat.open();
        chat.set_draft("  when is the next live class?  ");

        let sent = chat.send().unwrap().clone();
        assert_eq!(sent.text, "when is the next live class?");
        assert_eq!(sent.author, ChatAuthor::User);
        assert_eq!(chat.draft(), "");
        assert_eq!(chat.transcript().len(), 1);
    }

    #[test]
    fn test_empty_draft_rejected() {
        let mut chat = ChatWidget::new();
        chat.open();
        chat.set_draft("   ");
        assert!(matches!(chat.send(), Err(CyclerError::InvalidInput { .. })));
        assert!(chat.transcript().is_empty());
    }

    #[test]
    fn test_close_keeps_transcript() {
        let mut chat = ChatWidget::new();
        chat.open();
        chat.push_reply("Hi! How can I help?");
        chat.set_draft("thanks");
        chat.send().unwrap();
        chat.close();

        assert!(!chat.is_open());
        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(chat.transcript()[0].author, ChatAuthor::Bot);
    }
}
