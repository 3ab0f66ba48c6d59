use crate::cli::Options;
use crate::types::{CliError, Config, PageBounds};

// Same ceiling the classic selpg enforces on page numbers and lengths.
const MAX_PAGE_VALUE: i64 = i32::MAX as i64 - 1;

/// Turns raw options into a validated `Config`.
///
/// Rules are checked in a fixed order and each failure carries its own exit
/// code: missing or invalid start page is 1, invalid end page is 2, invalid
/// page length is 3.
pub fn validate_options(options: Options) -> Result<Config, CliError> {
    let (Some(start_page), Some(end_page)) = (options.start_page, options.end_page) else {
        return Err(CliError::new("not enough arguments", 1));
    };

    if start_page < 0 || start_page > MAX_PAGE_VALUE {
        return Err(CliError::new("start page is not valid", 1));
    }

    if end_page < 0 || end_page > MAX_PAGE_VALUE || end_page < start_page {
        return Err(CliError::new("end page is not valid", 2));
    }

    if options.page_length < 1 || options.page_length > MAX_PAGE_VALUE {
        return Err(CliError::new("page length is out of range", 3));
    }

    let bounds = if options.form_feed {
        PageBounds::FormFeed
    } else {
        PageBounds::Lines(options.page_length as usize)
    };

    // An empty -d value means "print directly", same as leaving it off.
    let consumer = options
        .destination
        .filter(|command| !command.trim().is_empty());

    Ok(Config {
        start_page: start_page as usize,
        end_page: end_page as usize,
        bounds,
        input: options.input,
        consumer,
    })
}
