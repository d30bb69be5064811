use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures reading or writing the high-score file.
#[derive(Debug)]
pub enum ScoreError {
    /// The file could not be read. A missing file lands here too: the game
    /// expects a seed file to exist.
    Read { path: PathBuf, source: io::Error },
    /// The file was read but does not hold a single non-negative number.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Read { path, .. } => {
                write!(f, "cannot read high score file '{}'", path.display())
            }
            ScoreError::Parse { path, .. } => {
                write!(f, "high score file '{}' is not a JSON number", path.display())
            }
            ScoreError::Write { path, .. } => {
                write!(f, "cannot write high score file '{}'", path.display())
            }
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreError::Read { source, .. } | ScoreError::Write { source, .. } => Some(source),
            ScoreError::Parse { source, .. } => Some(source),
        }
    }
}

pub type ScoreResult<T> = Result<T, ScoreError>;
