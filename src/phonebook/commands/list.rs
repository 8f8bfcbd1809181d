use crate::commands::CmdResult;
use crate::store::ContactStore;
use tracing::debug;

pub fn run<S: ContactStore>(store: &S) -> CmdResult {
    let people = store.list_all();
    debug!(count = people.len(), "listing people");
    CmdResult::default().with_listed_people(people)
}
