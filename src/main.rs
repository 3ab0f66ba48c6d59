mod cli;
mod input;
mod output;
mod select;
mod types;

use clap::Parser;

use cli::{Options, print_usage, validate_options};
use select::select_pages;

fn main() {
    let options = Options::parse();
    let config = match validate_options(options) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error.message);
            print_usage();
            std::process::exit(error.exit_code);
        }
    };

    if let Err(error) = select_pages(&config) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
