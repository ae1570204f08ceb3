//! # Conversation Log
//!
//! File: cli/src/chat/conversation.rs
//!
//! ## Overview
//!
//! The message model and the append-only history a front end renders.
//! Insertion order is chronological order is display order. Entries are only
//! ever added by [`Chatbot::submit`](crate::chat::bot::Chatbot::submit), two at
//! a time (user, then bot); nothing is edited or removed afterwards.
//!
use std::fmt;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log entry: the verbatim (trimmed) user text, or the bot's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.role, self.text)
    }
}

/// Ordered, append-only history of a session.
///
/// Read access is public; appending is reserved to the crate so the
/// user/bot pairing cannot be broken from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one exchange and returns references to the stored entries.
    pub(crate) fn append_exchange(
        &mut self,
        user: Message,
        bot: Message,
    ) -> (&Message, &Message) {
        debug_assert_eq!(user.role, Role::User);
        debug_assert_eq!(bot.role, Role::Bot);
        self.messages.push(user);
        self.messages.push(bot);
        let n = self.messages.len();
        (&self.messages[n - 2], &self.messages[n - 1])
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Plain-text rendering: one entry per block, separated by blank lines.
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
