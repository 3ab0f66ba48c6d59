mod validation;

use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;

pub use validation::validate_options;

#[derive(Parser)]
#[command(
    name = "selpg",
    version,
    about = "Select a range of pages from a text stream.",
    after_help = "If no file is given, selpg reads from standard input (Control-D to end).",
    disable_help_subcommand = true
)]
pub struct Options {
    /// Start from page NUMBER (0-based)
    #[arg(short = 's', value_name = "NUMBER", allow_negative_numbers = true)]
    pub start_page: Option<i64>,

    /// End at page NUMBER (0-based, inclusive)
    #[arg(short = 'e', value_name = "NUMBER", allow_negative_numbers = true)]
    pub end_page: Option<i64>,

    /// Number of lines per page
    #[arg(
        short = 'l',
        value_name = "NUMBER",
        default_value_t = 72,
        allow_negative_numbers = true
    )]
    pub page_length: i64,

    /// Pages are separated by form feeds (\f) instead of line counts
    #[arg(short = 'f')]
    pub form_feed: bool,

    /// Pipe selected pages into COMMAND instead of printing them
    #[arg(short = 'd', value_name = "COMMAND")]
    pub destination: Option<String>,

    /// Input file; read from standard input when absent
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Renders the full help text to stderr. Validation failures print this after
/// their diagnostic, matching the classic selpg behaviour.
pub fn print_usage() {
    let mut command = Options::command();
    let help = command.render_help();
    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "{help}");
}
