use crate::source::Row;

/// Trims leading/trailing whitespace from every key and every non-empty
/// value. Pure and idempotent; interior whitespace is left alone.
pub fn clean_row(row: Row) -> Row {
    row.into_iter()
        .map(|(key, value)| {
            let value = if value.is_empty() {
                value
            } else {
                value.trim().to_string()
            };
            (key.trim().to_string(), value)
        })
        .collect()
}
