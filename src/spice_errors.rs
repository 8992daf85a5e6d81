use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpiceError {
    #[error("Unable to open SPICE file {path}: {source}")]
    UnableToOpenFile {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to read the file record of {path}: {source}")]
    UnableToReadFile {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to read the file record: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error during the nom parsing: {0}")]
    NomParsingError(String),
}

impl<E: std::fmt::Debug> From<nom::Err<E>> for SpiceError {
    fn from(err: nom::Err<E>) -> Self {
        SpiceError::NomParsingError(format!("{err:?}"))
    }
}

impl PartialEq for SpiceError {
    fn eq(&self, other: &Self) -> bool {
        use SpiceError::*;
        match (self, other) {
            // io::Error is not comparable: same variant and same path is enough
            (UnableToOpenFile { path: a, .. }, UnableToOpenFile { path: b, .. }) => a == b,
            (UnableToReadFile { path: a, .. }, UnableToReadFile { path: b, .. }) => a == b,
            (IoError(a), IoError(b)) => a.kind() == b.kind(),
            (NomParsingError(a), NomParsingError(b)) => a == b,
            _ => false,
        }
    }
}
