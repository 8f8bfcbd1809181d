//! # Storage Layer
//!
//! The [`ContactStore`] trait is the contract between the command layer and
//! whatever holds the records.
//!
//! ## Ordering and duplicates
//!
//! Every implementation must keep records in insertion order and must accept
//! duplicate names. Lookups and removals act on the first match in that order,
//! so removing the same name repeatedly walks through the duplicates one at a
//! time, oldest first.
//!
//! ## Not found is not an error
//!
//! `find_by_name` and `remove_by_name` return `Option`. A missing name is an
//! ordinary outcome for the caller to report, not a failure.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec`-backed store with linear-scan lookup.
//!   Records live for the lifetime of the process.

use crate::model::Person;

pub mod memory;

/// Abstract interface for contact storage.
pub trait ContactStore {
    /// Append a person. Never fails.
    fn add(&mut self, person: Person);

    /// First person whose name equals `name` exactly.
    fn find_by_name(&self, name: &str) -> Option<Person>;

    /// Remove and return the first person whose name equals `name` exactly.
    fn remove_by_name(&mut self, name: &str) -> Option<Person>;

    /// All people, in insertion order.
    fn list_all(&self) -> Vec<Person>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
