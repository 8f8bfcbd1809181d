/// A single contact entry.
///
/// Entries are never edited in place; changing a number means deleting the
/// entry and adding a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    phone_number: String,
}

impl Person {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Exact, case-sensitive name comparison used by find and delete.
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}
