use super::ContactStore;
use crate::model::Person;

/// In-memory contact storage.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    people: Vec<Person>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|p| p.has_name(name))
    }
}

impl ContactStore for InMemoryStore {
    fn add(&mut self, person: Person) {
        self.people.push(person);
    }

    fn find_by_name(&self, name: &str) -> Option<Person> {
        self.people.iter().find(|p| p.has_name(name)).cloned()
    }

    fn remove_by_name(&mut self, name: &str) -> Option<Person> {
        // Vec::remove keeps the remaining entries in order.
        self.position_of(name).map(|idx| self.people.remove(idx))
    }

    fn list_all(&self) -> Vec<Person> {
        self.people.clone()
    }

    fn len(&self) -> usize {
        self.people.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_people(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Person {}", i + 1);
                let phone = format!("555-{:04}", i + 1);
                self.store.add(Person::new(name, phone));
            }
            self
        }

        pub fn with_person(mut self, name: &str, phone: &str) -> Self {
            self.store.add(Person::new(name, phone));
            self
        }
    }
}
