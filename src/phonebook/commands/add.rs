//! Adding entries happens in two steps so the caller can ask before overwriting.
//!
//! [`run`] stores new names right away. When the name is already stored under a *different*
//! number it leaves the directory alone and hands back a [`Collision`]; the caller decides
//! and then calls [`upsert`] (confirmed) or [`cancel`] (declined). Re-adding the same number
//! needs no confirmation and is reported as an update.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Collision, Entry, Listing};
use crate::store::DirectoryStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddAttempt {
    Applied(CmdResult),
    NeedsConfirmation(Collision),
}

pub fn run<S: DirectoryStore>(store: &mut S, name: &str, number: &str) -> AddAttempt {
    match store.get(name) {
        Some(existing) if existing != number => AddAttempt::NeedsConfirmation(Collision {
            name: name.to_string(),
            existing: existing.to_string(),
            proposed: number.to_string(),
        }),
        _ => AddAttempt::Applied(upsert(store, name, number)),
    }
}

/// Unconditional insert-or-overwrite.
pub fn upsert<S: DirectoryStore>(store: &mut S, name: &str, number: &str) -> CmdResult {
    let entry = Entry::new(name, number);
    let kind = store.put(entry.clone());
    tracing::debug!(name, verb = kind.verb(), "upserted entry");

    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "'{}' was {}.\n(number: {})",
            name,
            kind.verb(),
            number
        )))
        .with_upsert(kind)
        .with_affected_entries(vec![entry])
        .with_listing(Listing::all(store.entries()))
}

/// Result for a declined overwrite. The directory is not touched.
pub fn cancel(collision: &Collision) -> CmdResult {
    tracing::info!(name = %collision.name, "overwrite declined");
    CmdResult::default().with_message(CmdMessage::info("Operation cancelled."))
}
