use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use indexmap::IndexMap;

use crate::error::{Error, Result};

/// One row of the input file, keyed by trimmed header name in header order.
pub type Row = IndexMap<String, String>;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

fn open_skip_bom(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| Error::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    // fill_buf on a fresh BufReader issues one read; a File-backed read
    // returns the first 3 bytes in full unless the file itself is shorter.
    let skip = {
        let buf = reader.fill_buf()?;
        if buf.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        }
    };
    reader.consume(skip);
    Ok(reader)
}

/// Opens `path` and returns a lazy, single-pass iterator over its data rows.
/// The first record is consumed as the header line; header names are trimmed
/// before use. The file handle is owned by the returned iterator and released
/// when it is dropped, consumed fully or not.
pub fn read_rows(path: &Path, delimiter: u8) -> Result<RowReader> {
    let reader = open_skip_bom(path)?;
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    Ok(RowReader {
        headers,
        records: csv_reader.into_records(),
    })
}

pub struct RowReader {
    headers: Vec<String>,
    records: StringRecordsIntoIter<BufReader<File>>,
}

impl std::fmt::Debug for RowReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowReader")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl RowReader {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for RowReader {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(r) => r,
            Err(e) => return Some(Err(e.into())),
        };
        Some(Ok(zip_record(&self.headers, &record)))
    }
}

// Records shorter than the header row are padded with empty values for the
// missing trailing fields; fields past the header count are dropped.
fn zip_record(headers: &[String], record: &StringRecord) -> Row {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.clone(), record.get(i).unwrap_or("").to_string()))
        .collect()
}
