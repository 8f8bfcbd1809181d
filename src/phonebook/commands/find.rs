use crate::commands::{not_found_message, CmdMessage, CmdResult};
use crate::store::ContactStore;
use tracing::debug;

pub fn run<S: ContactStore>(store: &S, name: &str) -> CmdResult {
    match store.find_by_name(name) {
        Some(person) => {
            debug!(name, "lookup hit");
            CmdResult::default().with_listed_people(vec![person])
        }
        None => {
            debug!(name, "lookup missed");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(not_found_message(name)));
            result
        }
    }
}
