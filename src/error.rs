use std::path::PathBuf;

use thiserror::Error;

use crate::types::LabelId;

/// Errors surfaced by map construction, lookup, and CSV import/export.
///
/// Underlying CSV and I/O failures propagate unwrapped; nothing is
/// caught or retried internally.
#[derive(Debug, Error)]
pub enum LabelMapError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown label: {0:?}")]
    UnknownLabel(String),

    #[error("no label mapped to id {0}")]
    UnknownId(LabelId),

    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LabelMapError>;
