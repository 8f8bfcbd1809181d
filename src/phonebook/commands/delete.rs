use crate::commands::{not_found_message, CmdMessage, CmdResult};
use crate::store::ContactStore;
use tracing::debug;

pub fn run<S: ContactStore>(store: &mut S, name: &str) -> CmdResult {
    let mut result = CmdResult::default();

    match store.remove_by_name(name) {
        Some(person) => {
            debug!(name, remaining = store.len(), "person removed");
            result.add_message(CmdMessage::success(format!("{} removed.", name)));
            result.affected_people.push(person);
        }
        None => {
            debug!(name, "remove missed");
            result.add_message(CmdMessage::error(not_found_message(name)));
        }
    }

    result
}
