use super::render::{render_table, TableLayout};
use super::Ui;
use crate::commands::{CmdMessage, MessageLevel};
use crate::config::PhonebookConfig;
use crate::error::Result;
use crate::model::Person;
use colored::Colorize;
use std::io::{BufRead, Write};

pub const MENU: &str = "1) Add\n2) Delete\n3) Find\n4) Display All\n5) Exit\n";
pub const CHOICE_PROMPT: &str = "Your choice: ";
pub const NAME_PROMPT: &str = "Enter the person's name: ";
pub const PHONE_PROMPT: &str = "Enter the person's phone number: ";

/// Line-oriented text UI over any reader and writer.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    layout: TableLayout,
    color: bool,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, &PhonebookConfig::default().with_color(false))
    }

    pub fn with_config(input: R, output: W, config: &PhonebookConfig) -> Self {
        Self {
            input,
            output,
            layout: TableLayout::from(config),
            color: config.color,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn styled(&self, message: &CmdMessage) -> String {
        if !self.color {
            return message.content.clone();
        }
        match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        }
    }
}

impl<R: BufRead, W: Write> Ui for ConsoleUi<R, W> {
    fn display_menu(&mut self) -> Result<()> {
        write!(self.output, "{}", MENU)?;
        Ok(())
    }

    fn read_choice(&mut self) -> Result<Option<String>> {
        self.prompt(CHOICE_PROMPT)?;
        // First token wins; blank lines are skipped without re-prompting.
        while let Some(line) = self.read_line()? {
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(None)
    }

    fn read_name(&mut self) -> Result<String> {
        self.prompt(NAME_PROMPT)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn read_person(&mut self) -> Result<Person> {
        let name = self.read_name()?;
        self.prompt(PHONE_PROMPT)?;
        let phone = self.read_line()?.unwrap_or_default();
        Ok(Person::new(name, phone))
    }

    fn display_msg(&mut self, message: &CmdMessage) -> Result<()> {
        let text = self.styled(message);
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn display(&mut self, person: &Person) -> Result<()> {
        let table = render_table(std::slice::from_ref(person), &self.layout);
        write!(self.output, "{}", table)?;
        Ok(())
    }

    fn display_all(&mut self, people: &[Person]) -> Result<()> {
        write!(self.output, "{}", render_table(people, &self.layout))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::render_row;
    use std::io::Cursor;

    fn ui(input: &str) -> ConsoleUi<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleUi::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(ui: ConsoleUi<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(ui.into_output()).unwrap()
    }

    #[test]
    fn choice_is_first_token() {
        let mut ui = ui("3 and the rest\n");
        assert_eq!(ui.read_choice().unwrap(), Some("3".to_string()));
        assert_eq!(output_of(ui), CHOICE_PROMPT);
    }

    #[test]
    fn choice_skips_blank_lines() {
        let mut ui = ui("\n   \n4\n");
        assert_eq!(ui.read_choice().unwrap(), Some("4".to_string()));
    }

    #[test]
    fn choice_at_end_of_input_is_none() {
        let mut ui = ui("\n");
        assert_eq!(ui.read_choice().unwrap(), None);
    }

    #[test]
    fn name_keeps_inner_spaces() {
        let mut ui = ui("Mary Jane Watson\r\n");
        assert_eq!(ui.read_name().unwrap(), "Mary Jane Watson");
        assert_eq!(output_of(ui), NAME_PROMPT);
    }

    #[test]
    fn person_prompts_name_then_phone() {
        let mut ui = ui("Alice\n555-1111\n");
        let person = ui.read_person().unwrap();
        assert_eq!(person, Person::new("Alice", "555-1111"));
        assert_eq!(output_of(ui), format!("{}{}", NAME_PROMPT, PHONE_PROMPT));
    }

    #[test]
    fn person_at_end_of_input_has_empty_fields() {
        let mut ui = ui("Alice\n");
        let person = ui.read_person().unwrap();
        assert_eq!(person, Person::new("Alice", ""));
    }

    #[test]
    fn messages_are_plain_without_color() {
        let mut ui = ui("");
        ui.display_msg(&CmdMessage::success("New entry successfully added."))
            .unwrap();
        ui.display_error_msg("Invalid input, please try again.")
            .unwrap();
        assert_eq!(
            output_of(ui),
            "New entry successfully added.\nInvalid input, please try again.\n"
        );
    }

    #[test]
    fn messages_are_colored_by_level() {
        colored::control::set_override(true);
        let mut ui = ConsoleUi::with_config(
            Cursor::new(Vec::new()),
            Vec::new(),
            &PhonebookConfig::default(),
        );
        ui.display_msg(&CmdMessage::success("ok")).unwrap();
        ui.display_error_msg("bad").unwrap();
        ui.display_msg(&CmdMessage::info("Quitting program..."))
            .unwrap();
        colored::control::unset_override();

        assert_eq!(
            output_of(ui),
            "\u{1b}[32mok\u{1b}[0m\n\u{1b}[31mbad\u{1b}[0m\n\u{1b}[2mQuitting program...\u{1b}[0m\n"
        );
    }

    #[test]
    fn display_prints_header_and_row() {
        let mut ui = ui("");
        let person = Person::new("Alice", "555-1111");
        let row = render_row(&person, &TableLayout::default());
        ui.display(&person).unwrap();
        assert_eq!(
            output_of(ui),
            format!("{:<20} {:<15}\n{}\n", "Name", "Phone", row)
        );
    }

    #[test]
    fn display_all_empty_is_header_only() {
        let mut ui = ui("");
        ui.display_all(&[]).unwrap();
        assert_eq!(output_of(ui), format!("{:<20} {:<15}\n", "Name", "Phone"));
    }

    #[test]
    fn menu_lists_five_actions() {
        let mut ui = ui("");
        ui.display_menu().unwrap();
        let out = output_of(ui);
        assert_eq!(out.lines().count(), 5);
        assert!(out.starts_with("1) Add\n"));
        assert!(out.ends_with("5) Exit\n"));
    }
}
