use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to pull a capture time out of a file's embedded metadata.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("cannot decode EXIF metadata: {0}")]
    Decode(#[from] exif::Error),

    #[error("EXIF metadata has no capture time")]
    MissingCaptureTime,

    #[error("invalid capture time: {0}")]
    InvalidCaptureTime(String),

    /// Rewinding the stream after decoding failed.
    #[error("cannot rewind stream: {0}")]
    Stream(#[source] io::Error),
}

/// Any error that aborts a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },

    #[error("cannot walk source directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("cannot write preview: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
