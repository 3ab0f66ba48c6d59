use std::path::PathBuf;

/// How page boundaries are detected in the input stream.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum PageBounds {
    /// A page is a fixed number of lines.
    Lines(usize),
    /// Pages are separated by form-feed control characters.
    FormFeed,
}

/// Validated configuration, built once by the CLI layer and read-only during
/// selection. Page indices are 0-based and inclusive on both ends.
pub struct Config {
    pub start_page: usize,
    pub end_page: usize,
    pub bounds: PageBounds,
    pub input: Option<PathBuf>,
    pub consumer: Option<String>,
}

/// A validation failure, carrying the exit code the process must report.
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
}

impl CliError {
    pub fn new(message: &str, exit_code: i32) -> Self {
        CliError {
            message: message.to_string(),
            exit_code,
        }
    }
}
