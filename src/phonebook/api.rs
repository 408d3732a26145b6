//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every directory operation, whatever front end drives it.
//!
//! The API:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (surrounding whitespace is trimmed)
//! - **Guards store invariants**: an empty name or number never reaches the store. Front
//!   ends are expected to check first and show a warning; the facade turns a missed check
//!   into [`PhonebookError::Api`] instead of storing garbage.
//!
//! It does no I/O and no formatting. Results are [`CmdResult`] values for the UI to render.
//!
//! `PhonebookApi<S: DirectoryStore>` is generic over the storage backend so tests can hand
//! it a pre-filled fixture store.

use crate::commands;
use crate::error::{PhonebookError, Result};
use crate::model::Collision;
use crate::store::DirectoryStore;

pub struct PhonebookApi<S: DirectoryStore> {
    store: S,
}

impl<S: DirectoryStore> PhonebookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// First half of an add. New names are stored; a name stored under a different number
    /// comes back as [`AddAttempt::NeedsConfirmation`] with the directory untouched.
    pub fn add_entry(&mut self, name: &str, number: &str) -> Result<AddAttempt> {
        let name = required("Name", name)?;
        let number = required("Number", number)?;
        Ok(commands::add::run(&mut self.store, name, number))
    }

    /// Insert-or-overwrite without asking. Call after the user confirmed a collision.
    pub fn upsert_entry(&mut self, name: &str, number: &str) -> Result<CmdResult> {
        let name = required("Name", name)?;
        let number = required("Number", number)?;
        Ok(commands::add::upsert(&mut self.store, name, number))
    }

    pub fn cancel_add(&self, collision: &Collision) -> CmdResult {
        commands::add::cancel(collision)
    }

    pub fn delete_entry(&mut self, name: &str) -> Result<CmdResult> {
        let name = required("Name", name)?;
        Ok(commands::delete::run(&mut self.store, name))
    }

    pub fn search_entries(&self, term: &str) -> Result<CmdResult> {
        let term = required("Search term", term)?;
        Ok(commands::search::run(&self.store, term))
    }

    pub fn list_entries(&self) -> Result<CmdResult> {
        Ok(commands::list::run(&self.store))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PhonebookError::Api(format!("{} cannot be empty", field)));
    }
    Ok(trimmed)
}

pub use commands::add::AddAttempt;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UpsertKind;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> PhonebookApi<InMemoryStore> {
        PhonebookApi::new(InMemoryStore::seeded())
    }

    #[test]
    fn add_trims_inputs() {
        let mut api = api();
        let attempt = api.add_entry("  Ann ", " 555-0001\t").unwrap();
        assert!(matches!(attempt, AddAttempt::Applied(_)));
        assert_eq!(api.store().get("Ann"), Some("555-0001"));
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut api = api();
        assert!(matches!(
            api.add_entry("   ", "555"),
            Err(PhonebookError::Api(msg)) if msg == "Name cannot be empty"
        ));
        assert!(matches!(
            api.add_entry("Ann", ""),
            Err(PhonebookError::Api(msg)) if msg == "Number cannot be empty"
        ));
        assert_eq!(api.store().len(), 4);
    }

    #[test]
    fn upsert_dispatches_unconditionally() {
        let mut api = PhonebookApi::new(StoreFixture::new().with_entry("Ann", "1").store);
        let result = api.upsert_entry("Ann", "2").unwrap();
        assert_eq!(result.upsert, Some(UpsertKind::Updated));
        assert_eq!(api.store().get("Ann"), Some("2"));
    }

    #[test]
    fn upsert_rejects_blank_fields() {
        let mut api = api();
        assert!(api.upsert_entry("", "2").is_err());
        assert!(api.upsert_entry("Ann", " ").is_err());
    }

    #[test]
    fn delete_and_search_require_a_name() {
        let mut api = api();
        assert!(api.delete_entry("").is_err());
        assert!(api.search_entries(" ").is_err());
        assert_eq!(api.store().len(), 4);
    }

    #[test]
    fn list_returns_all_entries() {
        let listing = api().list_entries().unwrap().listing.unwrap();
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn search_dispatches_with_trimmed_term() {
        let listing = api().search_entries(" 박 ").unwrap().listing.unwrap();
        assert_eq!(listing.search_term(), Some("박"));
        assert_eq!(listing.len(), 1);
    }

    #[test]
    fn cancel_add_reports_cancellation() {
        let api = api();
        let collision = Collision {
            name: "김동현".into(),
            existing: "010-1234-5678".into(),
            proposed: "010-0000-0000".into(),
        };
        let result = api.cancel_add(&collision);
        assert_eq!(result.messages, vec![CmdMessage::info("Operation cancelled.")]);
    }
}
