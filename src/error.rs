use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Could not find folder: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Per-entry problems the renamer reports and then walks past.
#[derive(Error, Debug)]
pub enum RenameFailureCause {
    #[error("target {} already exists", .0.display())]
    TargetExists(PathBuf),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read directory: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("year folder {} is not a number: {source}", path.display())]
    InvalidYear {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },

    #[error("year folder {} is not valid UTF-8", .0.display())]
    NonUtf8Year(PathBuf),

    #[error("number in {} is out of range: {source}", path.display())]
    NumberOutOfRange {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot serialize index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
