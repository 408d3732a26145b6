use crate::commands::CmdResult;
use crate::model::Listing;
use crate::store::DirectoryStore;

/// Entries whose name contains `term` verbatim. Matching is case-sensitive and may hit
/// anywhere in the name.
pub fn run<S: DirectoryStore>(store: &S, term: &str) -> CmdResult {
    let matches = store
        .entries()
        .into_iter()
        .filter(|entry| entry.name.contains(term))
        .collect();

    tracing::debug!(term, "searched directory");
    CmdResult::default().with_listing(Listing::search(term, matches))
}
