use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::error::SenseiError;
use crate::models::{AnalysisReport, Conversation};

/// Most recent analyses kept on disk.
const HISTORY_CAP: usize = 50;

/// One saved analysis: the snippet, the report, and any follow-up
/// conversation that happened in the same session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub code: String,
    pub report: AnalysisReport,
    pub conversation: Conversation,
    pub created_at_ms: u64,
}

impl HistoryEntry {
    pub fn new(code: String, report: AnalysisReport, conversation: Conversation) -> Self {
        let created_at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            id: Uuid::new_v4().to_string(),
            code,
            report,
            conversation,
            created_at_ms,
        }
    }

    pub fn title(&self) -> String {
        self.report.headline()
    }
}

/// Repository interface for past analyses. Injected into the CLI layer; the
/// orchestrator never touches it.
pub trait HistoryStore {
    fn append(&mut self, entry: HistoryEntry) -> Result<(), SenseiError>;
    fn list(&self) -> Result<Vec<HistoryEntry>, SenseiError>;
    fn clear(&mut self) -> Result<(), SenseiError>;
}

/// JSON-file-backed store, newest entry first, capped at [`HISTORY_CAP`].
/// A missing or corrupt file starts the history over instead of failing the
/// session.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform data dir, e.g. `~/.local/share/sensei/history.json`.
    pub fn at_default_location() -> Result<Self, SenseiError> {
        let base = dirs::data_dir()
            .ok_or_else(|| SenseiError::HistoryError("no data directory available".to_string()))?;
        Ok(Self::new(base.join("sensei").join("history.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Vec<HistoryEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!(
                    "⚠️ History file {} is unreadable ({}); starting over",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), SenseiError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SenseiError::HistoryError(format!("cannot create {}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)
            .map_err(|e| SenseiError::HistoryError(format!("cannot write {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

impl HistoryStore for FileHistoryStore {
    fn append(&mut self, entry: HistoryEntry) -> Result<(), SenseiError> {
        let mut entries = self.load();
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAP);
        self.save(&entries)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, SenseiError> {
        Ok(self.load())
    }

    fn clear(&mut self) -> Result<(), SenseiError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                SenseiError::HistoryError(format!("cannot remove {}: {}", self.path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// In-memory store for tests and `--no-history` runs.
#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&mut self, entry: HistoryEntry) -> Result<(), SenseiError> {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, SenseiError> {
        Ok(self.entries.clone())
    }

    fn clear(&mut self) -> Result<(), SenseiError> {
        self.entries.clear();
        Ok(())
    }
}
