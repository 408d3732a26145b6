//! Session start-up: builds the one directory a session works on and wraps it in a [`Shell`].

use crate::api::PhonebookApi;
use crate::config::PhonebookConfig;
use crate::shell::Shell;
use crate::store::memory::InMemoryStore;
use crate::store::DirectoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Start from the built-in entries
    Builtin,
    Empty,
}

pub struct AppContext {
    pub shell: Shell<InMemoryStore>,
    pub config: PhonebookConfig,
}

pub fn initialize(config: PhonebookConfig, seed: Seed) -> AppContext {
    let store = match seed {
        Seed::Builtin => InMemoryStore::seeded(),
        Seed::Empty => InMemoryStore::new(),
    };
    tracing::info!(entries = store.len(), "directory initialized");

    AppContext {
        shell: Shell::new(PhonebookApi::new(store)),
        config,
    }
}
