use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version)]
#[command(about = "In-memory contact directory with an interactive menu", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored messages
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
