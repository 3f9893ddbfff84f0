pub mod config;
pub mod error;
pub mod normalize;
pub mod present;
pub mod source;

use std::io::Write;

use config::Config;
use error::Result;

pub use error::Error;
pub use source::Row;

/// Reads the configured input file, normalizes each row and writes the
/// configured display fields to `out`, one line per row. Rows are pulled
/// lazily; memory is bounded to one row at a time.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let delimiter = config.delimiter_byte()?;
    let rows = source::read_rows(&config.input, delimiter)?;
    let cleaned = rows.map(|row| row.map(normalize::clean_row));
    present::present(cleaned, &config.display_headers, out)
}
