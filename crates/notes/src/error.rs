use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NoteError>;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("The home directory could not be accessed. Please make sure it can be accessed as the default notes directory lies there.")]
    HomeUnavailable,

    #[error("The default notes directory ('{}') does not exist. Please create it first.", .0.display())]
    DefaultDirMissing(PathBuf),

    #[error("The specified notes directory ('{}') does not exist.", .0.display())]
    CustomDirMissing(PathBuf),

    #[error("'{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Notes directory path is empty")]
    EmptyPath,

    #[error("Notes directory path '{}' is not valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Could not find note '{0}'.")]
    NotFound(String),

    #[error("Invalid note pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read note {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to inspect {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
