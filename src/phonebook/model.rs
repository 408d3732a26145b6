use serde::Serialize;

/// Entries loaded into a fresh directory at start-up.
pub const SEED_ENTRIES: [(&str, &str); 4] = [
    ("김동현", "010-1234-5678"),
    ("박지수", "010-9876-5432"),
    ("이하늘", "010-5555-7777"),
    ("최민호", "010-2222-3333"),
];

/// A single name → number pair. The name is the directory key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub number: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Whether an upsert created a new entry or replaced an existing number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpsertKind {
    Inserted,
    Updated,
}

impl UpsertKind {
    pub fn verb(&self) -> &'static str {
        match self {
            UpsertKind::Inserted => "added",
            UpsertKind::Updated => "updated",
        }
    }
}

/// An add that would overwrite a different number already stored under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub name: String,
    pub existing: String,
    pub proposed: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingKind {
    All,
    Search { term: String },
}

/// A set of entries to show in the output area, in directory (name) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub kind: ListingKind,
    pub entries: Vec<Entry>,
}

impl Listing {
    pub fn all(entries: Vec<Entry>) -> Self {
        Self {
            kind: ListingKind::All,
            entries,
        }
    }

    pub fn search(term: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            kind: ListingKind::Search { term: term.into() },
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search_term(&self) -> Option<&str> {
        match &self.kind {
            ListingKind::All => None,
            ListingKind::Search { term } => Some(term),
        }
    }
}
