use crate::input::PagedReader;
use crate::output::open_sink;
use crate::types::Config;

/// Copies every unit whose page falls within `[start_page, end_page]` from
/// the input source to the output sink, in order. Reading stops as soon as
/// the range is behind us, for files and standard input alike.
pub fn select_pages(config: &Config) -> Result<(), String> {
    let mut sink = open_sink(config)?;
    let mut reader = PagedReader::open(config)?;

    while let Some((page, unit)) = reader.next_unit()? {
        if page > config.end_page {
            break;
        }
        if page >= config.start_page {
            sink.write_unit(&unit)?;
        }
    }

    sink.finish()
}
