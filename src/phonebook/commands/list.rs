use crate::commands::CmdResult;
use crate::model::Listing;
use crate::store::DirectoryStore;

pub fn run<S: DirectoryStore>(store: &S) -> CmdResult {
    CmdResult::default().with_listing(Listing::all(store.entries()))
}
