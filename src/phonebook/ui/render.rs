//! Fixed-width table rendering for contact listings.
//!
//! Columns are padded by display width, not byte or char count, so names with
//! wide characters still line up. Values longer than their column are printed
//! in full and push the rest of the row to the right.

use crate::config::PhonebookConfig;
use crate::model::Person;
use unicode_width::UnicodeWidthStr;

pub const NAME_HEADING: &str = "Name";
pub const PHONE_HEADING: &str = "Phone";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub name_width: usize,
    pub phone_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::from(&PhonebookConfig::default())
    }
}

impl From<&PhonebookConfig> for TableLayout {
    fn from(config: &PhonebookConfig) -> Self {
        Self {
            name_width: config.name_width,
            phone_width: config.phone_width,
        }
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// The header line, without a newline.
pub fn render_header(layout: &TableLayout) -> String {
    format!(
        "{} {}",
        pad_to_width(NAME_HEADING, layout.name_width),
        pad_to_width(PHONE_HEADING, layout.phone_width)
    )
}

/// One row, without a newline. Rows carry a trailing space after the phone column.
pub fn render_row(person: &Person, layout: &TableLayout) -> String {
    format!(
        "{} {} ",
        pad_to_width(person.name(), layout.name_width),
        pad_to_width(person.phone_number(), layout.phone_width)
    )
}

/// Header plus one line per person, each terminated by a newline.
pub fn render_table(people: &[Person], layout: &TableLayout) -> String {
    let mut output = render_header(layout);
    output.push('\n');
    for person in people {
        output.push_str(&render_row(person, layout));
        output.push('\n');
    }
    output
}
