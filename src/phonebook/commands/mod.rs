//! # Command Layer
//!
//! One module per directory operation. Every command takes a [`DirectoryStore`] and plain
//! Rust arguments and returns a [`CmdResult`]: the messages to show, the entries affected,
//! and the listing (if any) that should fill the output area.
//!
//! Commands assume their inputs were already trimmed and checked for emptiness by the
//! caller (see `api.rs`). Absent names and empty searches are normal outcomes here, never
//! errors.
//!
//! [`DirectoryStore`]: crate::store::DirectoryStore

use crate::model::{Entry, Listing, UpsertKind};

pub mod add;
pub mod delete;
pub mod list;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub upsert: Option<UpsertKind>,
    pub listing: Option<Listing>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_upsert(mut self, kind: UpsertKind) -> Self {
        self.upsert = Some(kind);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// True when the command changed the directory.
    pub fn is_mutation(&self) -> bool {
        !self.affected_entries.is_empty()
    }
}
