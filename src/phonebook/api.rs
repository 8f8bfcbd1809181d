//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! every phonebook operation, whatever front end is driving it.
//!
//! The facade dispatches to `commands/*.rs` and hands back a [`CmdResult`].
//! It does no formatting and no I/O; the menu session decides how results
//! are shown.
//!
//! `PhonebookApi<S: ContactStore>` is generic over the storage backend, so the
//! same facade runs against `InMemoryStore` in the binary and in tests.

use crate::commands;
use crate::model::Person;
use crate::store::ContactStore;

pub struct PhonebookApi<S: ContactStore> {
    store: S,
}

impl<S: ContactStore> PhonebookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_person(&mut self, person: Person) -> CmdResult {
        commands::add::run(&mut self.store, person)
    }

    pub fn delete_person(&mut self, name: &str) -> CmdResult {
        commands::delete::run(&mut self.store, name)
    }

    pub fn find_person(&self, name: &str) -> CmdResult {
        commands::find::run(&self.store, name)
    }

    pub fn list_people(&self) -> CmdResult {
        commands::list::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
