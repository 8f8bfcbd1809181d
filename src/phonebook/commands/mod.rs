use crate::model::Person;

pub mod add;
pub mod delete;
pub mod find;
pub mod list;

/// Shown by both delete and find when the name is absent.
pub fn not_found_message(name: &str) -> String {
    format!("No person named {} found.", name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_people: Vec<Person>,
    pub listed_people: Vec<Person>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_people(mut self, people: Vec<Person>) -> Self {
        self.affected_people = people;
        self
    }

    pub fn with_listed_people(mut self, people: Vec<Person>) -> Self {
        self.listed_people = people;
        self
    }

    /// True when the command produced an error-level message.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
