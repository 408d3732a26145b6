//! # Storage Layer
//!
//! The [`DirectoryStore`] trait is the seam between the command layer and whatever holds the
//! name → number mapping. Commands are generic over it, so they never depend on a concrete
//! collection type.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Lives for the length of the session and is
//!   discarded on exit.
//!
//! ## Contract
//!
//! - Names are unique keys; `put` on an existing name replaces its number.
//! - `entries` yields entries in ascending name order (plain string comparison).
//! - Stores do not validate. Empty names and numbers are rejected before they get here.

use crate::model::{Entry, UpsertKind};

pub mod memory;

/// Abstract interface for the name → number mapping.
pub trait DirectoryStore {
    /// Stored number for `name`, if any
    fn get(&self, name: &str) -> Option<&str>;

    /// Insert or overwrite, reporting which one happened
    fn put(&mut self, entry: Entry) -> UpsertKind;

    /// Remove `name`, returning the entry that was stored
    fn remove(&mut self, name: &str) -> Option<Entry>;

    /// All entries, sorted by name
    fn entries(&self) -> Vec<Entry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
