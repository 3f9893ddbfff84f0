use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the file '{}' was not found or could not be opened: {}", .path.display(), .source)]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
