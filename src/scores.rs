use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScoreError, ScoreResult};

pub const HIGH_SCORE_FILE: &str = "high_score.json";

/// The high score lives in a file holding one JSON number. It is read once at
/// startup and written once at shutdown.
#[derive(Clone, Debug)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> ScoreResult<u32> {
        let data = fs::read_to_string(&self.path).map_err(|source| ScoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ScoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, high_score: u32) -> ScoreResult<()> {
        let buf = serde_json::to_string(&high_score).map_err(|source| ScoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, buf).map_err(|source| ScoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for HighScoreFile {
    fn default() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}
