use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use chrono::{DateTime, Utc};
use crate::config::constants::{CONFIG_DIR_NAME, HISTORY_DIR_NAME};
use crate::errors::{RadarError, RadarResult};
use crate::structs::history_record::HistoryRecord;

/// Durable dedup memory: one JSON document per repository. Reads never
/// fail (absence and corruption both mean "never scanned"); writes go to
/// a sibling tmp file and are renamed into place so an interrupted commit
/// can never shrink a previously persisted set.
#[derive(Debug)]
pub struct HistoryStore {
    state_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl HistoryStore {

    pub fn new(state_dir: PathBuf) -> RadarResult<Self> {
        fs::create_dir_all(&state_dir).map_err(|e| {
            RadarError::history_error(&state_dir.display().to_string(), "init", &e.to_string())
        })?;

        Ok(Self {
            state_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn default_state_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(HISTORY_DIR_NAME)
    }

    fn record_path(&self, repository: &str) -> PathBuf {
        let file_name = repository.replace(['/', ':'], "__");
        self.state_dir.join(format!("{}.json", file_name))
    }

    pub fn load(&self, repository: &str) -> HistoryRecord {
        let path = self.record_path(repository);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return HistoryRecord::empty(repository),
        };

        match serde_json::from_str::<HistoryRecord>(&content) {
            Ok(record) => record,
            Err(e) => {
                log::warn!(
                    "⚠️ Corrupt history record at {} ({}) - treating {} as never scanned",
                    path.display(),
                    e,
                    repository
                );
                HistoryRecord::empty(repository)
            }
        }
    }

    pub fn commit(
        &self,
        repository: &str,
        newly_seen_keys: &HashSet<String>,
        scanned_at: DateTime<Utc>,
    ) -> RadarResult<()> {
        let path = self.record_path(repository);

        let _guard = self.write_lock.lock().map_err(|_| {
            RadarError::history_error(&path.display().to_string(), "commit", "write lock poisoned")
        })?;

        let mut record = self.load(repository);
        record
            .seen_issue_keys
            .extend(newly_seen_keys.iter().cloned());
        if scanned_at > record.last_scanned_at {
            record.last_scanned_at = scanned_at;
        }

        let payload = serde_json::to_string_pretty(&record).map_err(|e| {
            RadarError::history_error(&path.display().to_string(), "serialize", &e.to_string())
        })?;

        let tmp_path = self.state_dir.join(format!(
            "{}.tmp",
            path.file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "record.json".to_string())
        ));

        fs::write(&tmp_path, payload).map_err(|e| {
            RadarError::history_error(&tmp_path.display().to_string(), "write", &e.to_string())
        })?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            RadarError::history_error(&path.display().to_string(), "swap", &e.to_string())
        })?;

        Ok(())
    }

    pub fn all_records(&self) -> RadarResult<Vec<HistoryRecord>> {
        let entries = fs::read_dir(&self.state_dir).map_err(|e| {
            RadarError::history_error(&self.state_dir.display().to_string(), "list", &e.to_string())
        })?;

        let mut records = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            match serde_json::from_str::<HistoryRecord>(&content) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("⚠️ Skipping corrupt record {}: {}", path.display(), e),
            }
        }

        records.sort_by(|a, b| a.repository.cmp(&b.repository));
        Ok(records)
    }
}
