use super::DirectoryStore;
use crate::model::{Entry, UpsertKind, SEED_ENTRIES};
use std::collections::BTreeMap;

/// BTreeMap-backed directory. Iteration order is name order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in seed entries.
    pub fn seeded() -> Self {
        Self::with_entries(
            SEED_ENTRIES
                .iter()
                .map(|(name, number)| Entry::new(*name, *number)),
        )
    }

    pub fn with_entries<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.put(entry);
        }
        store
    }
}

impl DirectoryStore for InMemoryStore {
    fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    fn put(&mut self, entry: Entry) -> UpsertKind {
        match self.entries.insert(entry.name, entry.number) {
            Some(_) => UpsertKind::Updated,
            None => UpsertKind::Inserted,
        }
    }

    fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries
            .remove_entry(name)
            .map(|(name, number)| Entry { name, number })
    }

    fn entries(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .map(|(name, number)| Entry::new(name.clone(), number.clone()))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::seeded(),
            }
        }

        pub fn with_entry(mut self, name: &str, number: &str) -> Self {
            self.store.put(Entry::new(name, number));
            self
        }

        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .put(Entry::new(format!("Contact {}", i + 1), format!("555-{:04}", i + 1)));
            }
            self
        }
    }
}
