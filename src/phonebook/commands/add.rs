use crate::commands::{CmdMessage, CmdResult};
use crate::model::Person;
use crate::store::ContactStore;
use tracing::debug;

pub fn run<S: ContactStore>(store: &mut S, person: Person) -> CmdResult {
    store.add(person.clone());
    debug!(name = person.name(), total = store.len(), "person added");

    let mut result = CmdResult::default().with_affected_people(vec![person]);
    result.add_message(CmdMessage::success("New entry successfully added."));
    result
}
