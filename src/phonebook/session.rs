//! The interactive menu loop.
//!
//! [`run`] shows the menu, reads a choice, gathers whatever fields the choice
//! needs through the [`Ui`], dispatches to the API and renders the outcome.
//! It repeats until the operator picks Exit or the input runs out.

use crate::api::{CmdMessage, PhonebookApi};
use crate::error::Result;
use crate::store::ContactStore;
use crate::ui::Ui;
use std::str::FromStr;
use tracing::{debug, info};

pub const QUIT_MESSAGE: &str = "Quitting program...";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid input, please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Find,
    DisplayAll,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Delete),
            "3" => Ok(MenuChoice::Find),
            "4" => Ok(MenuChoice::DisplayAll),
            "5" => Ok(MenuChoice::Exit),
            other => Err(format!("Unknown menu choice: {}", other)),
        }
    }
}

pub fn run<S: ContactStore, U: Ui>(api: &mut PhonebookApi<S>, ui: &mut U) -> Result<()> {
    info!("session started");

    loop {
        ui.display_menu()?;
        let Some(raw) = ui.read_choice()? else {
            debug!("input exhausted");
            ui.display_msg(&CmdMessage::info(QUIT_MESSAGE))?;
            break;
        };

        match raw.parse::<MenuChoice>() {
            Ok(MenuChoice::Add) => handle_add(api, ui)?,
            Ok(MenuChoice::Delete) => handle_delete(api, ui)?,
            Ok(MenuChoice::Find) => handle_find(api, ui)?,
            Ok(MenuChoice::DisplayAll) => handle_display_all(api, ui)?,
            Ok(MenuChoice::Exit) => {
                ui.display_msg(&CmdMessage::info(QUIT_MESSAGE))?;
                break;
            }
            Err(e) => {
                debug!("{}", e);
                ui.display_error_msg(INVALID_CHOICE_MESSAGE)?;
            }
        }
    }

    info!(remaining = api.store().len(), "session ended");
    Ok(())
}

fn handle_add<S: ContactStore, U: Ui>(api: &mut PhonebookApi<S>, ui: &mut U) -> Result<()> {
    let person = ui.read_person()?;
    let result = api.add_person(person);
    ui.display_messages(&result.messages)
}

fn handle_delete<S: ContactStore, U: Ui>(api: &mut PhonebookApi<S>, ui: &mut U) -> Result<()> {
    let name = ui.read_name()?;
    let result = api.delete_person(&name);
    ui.display_messages(&result.messages)
}

fn handle_find<S: ContactStore, U: Ui>(api: &PhonebookApi<S>, ui: &mut U) -> Result<()> {
    let name = ui.read_name()?;
    let result = api.find_person(&name);
    if let Some(person) = result.listed_people.first() {
        ui.display(person)?;
    }
    ui.display_messages(&result.messages)
}

fn handle_display_all<S: ContactStore, U: Ui>(
    api: &PhonebookApi<S>,
    ui: &mut U,
) -> Result<()> {
    let result = api.list_people();
    ui.display_all(&result.listed_people)?;
    ui.display_messages(&result.messages)
}
