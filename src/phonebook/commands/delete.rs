use crate::commands::{CmdMessage, CmdResult};
use crate::model::Listing;
use crate::store::DirectoryStore;

pub fn run<S: DirectoryStore>(store: &mut S, name: &str) -> CmdResult {
    match store.remove(name) {
        Some(entry) => {
            tracing::debug!(name, "deleted entry");
            CmdResult::default()
                .with_message(CmdMessage::success(format!("'{}' was deleted.", entry.name)))
                .with_affected_entries(vec![entry])
                .with_listing(Listing::all(store.entries()))
        }
        None => CmdResult::default().with_message(CmdMessage::info(format!(
            "'{}' is not in the directory, nothing was deleted.",
            name
        ))),
    }
}
