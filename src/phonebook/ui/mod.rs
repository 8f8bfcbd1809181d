//! # Operator Interface
//!
//! The [`Ui`] trait is everything the menu session needs from whoever is on
//! the other end: a way to read a choice, a name or a whole person, and a way
//! to show messages and records. The session never touches a terminal
//! directly, so it can be driven by [`console::ConsoleUi`] over stdin/stdout
//! or over in-memory buffers in tests.
//!
//! Table layout lives in [`render`] and is shared by every implementation
//! that prints text.

use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Person;

pub mod console;
pub mod render;

pub trait Ui {
    /// Show the numbered list of actions.
    fn display_menu(&mut self) -> Result<()>;

    /// Read the operator's menu choice. `None` means the input is exhausted.
    fn read_choice(&mut self) -> Result<Option<String>>;

    /// Prompt for a name.
    fn read_name(&mut self) -> Result<String>;

    /// Prompt for a name and then a phone number.
    fn read_person(&mut self) -> Result<Person>;

    fn display_msg(&mut self, message: &CmdMessage) -> Result<()>;

    fn display_error_msg(&mut self, msg: &str) -> Result<()> {
        self.display_msg(&CmdMessage::error(msg))
    }

    /// Show a single person under the table header.
    fn display(&mut self, person: &Person) -> Result<()>;

    /// Show the table header followed by one row per person.
    fn display_all(&mut self, people: &[Person]) -> Result<()>;

    fn display_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            self.display_msg(message)?;
        }
        Ok(())
    }
}
