use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{HandHistory, Historian, HistorianError};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct HandRecord<'a> {
    session_id: &'a uuid::Uuid,
    hand: &'a HandHistory,
}

/// Appends a hand history to a file in JSON Lines format.
pub fn append_hand(
    path: &Path,
    session_id: &uuid::Uuid,
    hand: &HandHistory,
) -> Result<(), HistorianError> {
    // Create file if it doesn't exist, append if it does
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, &HandRecord { session_id, hand })?;
    writeln!(file)?;
    Ok(())
}

/// A historian that appends every finished hand to one JSON Lines file.
#[derive(Debug, Clone)]
pub struct FileHistorian {
    path: PathBuf,
}

impl FileHistorian {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Historian for FileHistorian {
    fn record_hand(
        &mut self,
        session_id: &uuid::Uuid,
        hand: &HandHistory,
    ) -> Result<(), HistorianError> {
        append_hand(&self.path, session_id, hand)
    }
}
