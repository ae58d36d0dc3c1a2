//! File-based Assessment History Adapter
//!
//! Stores each session's history as a JSON-lines file under a base
//! directory, one record per line, appended in order.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::ports::{AssessmentHistory, AssessmentRecord, HistoryError};

/// File-based assessment history
#[derive(Debug, Clone)]
pub struct FileAssessmentHistory {
    base_path: PathBuf,
}

impl FileAssessmentHistory {
    /// Create a history rooted at `base_path`. The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let history = FileAssessmentHistory::new("./data/history");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn session_file_path(&self, session_id: SessionId) -> PathBuf {
        self.base_path.join(format!("{}.jsonl", session_id))
    }
}

#[async_trait]
impl AssessmentHistory for FileAssessmentHistory {
    async fn append(&self, record: &AssessmentRecord) -> Result<(), HistoryError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| HistoryError::IoError(e.to_string()))?;

        let mut line = serde_json::to_string(record)
            .map_err(|e| HistoryError::SerializationFailed(e.to_string()))?;
        line.push('\n');

        let path = self.session_file_path(record.session_id);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| HistoryError::IoError(e.to_string()))?;

        // one write per record keeps lines whole
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| HistoryError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| HistoryError::IoError(e.to_string()))?;

        debug!(
            session_id = %record.session_id,
            report_id = %record.report_id,
            path = %path.display(),
            "assessment record appended"
        );
        Ok(())
    }

    async fn list_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<AssessmentRecord>, HistoryError> {
        let path = self.session_file_path(session_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .await
            .map_err(|e| HistoryError::IoError(e.to_string()))?;

        // a line without its newline is an append still in flight
        let complete = match contents.rfind('\n') {
            Some(end) => &contents[..=end],
            None => "",
        };
        if complete.len() < contents.len() {
            debug!(
                session_id = %session_id,
                path = %path.display(),
                "skipping unterminated trailing record"
            );
        }

        complete
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .map_err(|e| HistoryError::DeserializationFailed(e.to_string()))
            })
            .collect()
    }
}
