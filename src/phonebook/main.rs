use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::PhonebookApi;
use phonebook::config::PhonebookConfig;
use phonebook::error::Result;
use phonebook::session;
use phonebook::store::memory::InMemoryStore;
use phonebook::ui::console::ConsoleUi;
use std::io;
use std::path::PathBuf;
use tracing::debug;

mod args;
mod logging;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(&cli)?;
    debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut ui = ConsoleUi::with_config(stdin.lock(), stdout.lock(), &config);
    let mut api = PhonebookApi::new(InMemoryStore::new());

    session::run(&mut api, &mut ui)
}

fn load_config(cli: &Cli) -> Result<PhonebookConfig> {
    let config_dir = cli.config_dir.clone().or_else(default_config_dir);
    let config = PhonebookConfig::load_or_default(config_dir.as_deref())?;
    Ok(if cli.no_color {
        config.with_color(false)
    } else {
        config
    })
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "phonebook", "phonebook").map(|dirs| dirs.config_dir().to_path_buf())
}
