use std::path::PathBuf;

use thiserror::Error;

/// Per-file extraction failures. These are recovered in the convert loop:
/// the file is skipped with a warning and the run continues.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No level-1 heading, so the file has no recipe title.
    #[error("no title heading in {0}")]
    MissingTitle(PathBuf),
}
