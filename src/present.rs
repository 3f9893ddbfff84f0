use std::io::Write;

use crate::error::Result;
use crate::source::Row;

/// Formats one row as `"h1: v1, h2: v2, ..."` in display-header order.
/// A header absent from the row renders with an empty value. The trim here
/// is defensive and idempotent with the normalizer's.
pub fn format_row(row: &Row, headers: &[String]) -> String {
    headers
        .iter()
        .map(|header| {
            let value = row.get(header).map(|v| v.trim()).unwrap_or("");
            format!("{}: {}", header, value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pulls rows one at a time and writes one formatted line per row. Each row
/// is written before the next is requested; a row error aborts the pass,
/// leaving earlier lines already written.
pub fn present<I, W>(rows: I, headers: &[String], out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = Result<Row>>,
    W: Write,
{
    for row in rows {
        let row = row?;
        writeln!(out, "{}", format_row(&row, headers))?;
    }
    Ok(())
}
