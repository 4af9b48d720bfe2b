//! Shared message log primitives.
use std::collections::VecDeque;

/// Severity level for messages produced by the interaction layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Snapshot revision the message was recorded against.
    pub revision: u64,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, revision: u64, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            revision,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn info(&mut self, message: impl Into<String>, revision: u64) {
        self.push(MessageEntry::new(message, revision, MessageLevel::Info));
    }

    pub fn warn(&mut self, message: impl Into<String>, revision: u64) {
        self.push(MessageEntry::new(message, revision, MessageLevel::Warning));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
