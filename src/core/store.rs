//! State persistence
//!
//! Sessions and the milestone watermark live in one versioned JSON file.
//! Loading falls back to an empty state on any error and saving is
//! best-effort; in-memory state stays authoritative for the process
//! lifetime.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::core::history::Session;

const STATE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct StateFile {
    #[serde(default)]
    pub(crate) version: u32,
    #[serde(default)]
    pub(crate) sessions: Vec<Session>,
    #[serde(default)]
    pub(crate) watermark: i64,
}

pub(crate) struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        StateStore { path }
    }

    /// A store that never touches disk, for tests and dry runs.
    pub(crate) fn ephemeral() -> Self {
        StateStore {
            path: PathBuf::new(),
        }
    }

    pub(crate) fn at_default_path() -> Self {
        StateStore::new(default_state_path())
    }

    pub(crate) fn load(&self) -> StateFile {
        Self::load_from(&self.path)
    }

    fn load_from(path: &Path) -> StateFile {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => return StateFile::default(),
        };
        match serde_json::from_reader::<_, StateFile>(file) {
            Ok(state) if state.version == STATE_VERSION => state,
            _ => StateFile::default(),
        }
    }

    pub(crate) fn save(&self, sessions: &[Session], watermark: i64) {
        if self.path.as_os_str().is_empty() {
            return;
        }

        let state = StateFile {
            version: STATE_VERSION,
            sessions: sessions.to_vec(),
            watermark,
        };

        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(mut file) = File::create(&self.path) {
            let _ = serde_json::to_writer(&mut file, &state);
        }
    }
}

/// State file location: `UPTRACK_DATA_DIR` when set, otherwise
/// `~/.local/share/uptrack/state.json`.
fn default_state_path() -> PathBuf {
    if let Ok(dir) = std::env::var("UPTRACK_DATA_DIR") {
        return PathBuf::from(dir).join("state.json");
    }
    match dirs::home_dir() {
        Some(home) => home
            .join(".local")
            .join("share")
            .join("uptrack")
            .join("state.json"),
        None => PathBuf::from("uptrack-state.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            id: Uuid::new_v4(),
            boot_time: "2026-02-01T08:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            end_time: None,
            duration: 3600.0,
            is_current: true,
        }
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        let state = store.load();
        assert!(state.sessions.is_empty());
        assert_eq!(state.watermark, 0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        let s = session();
        store.save(&[s.clone()], 86_400);

        let state = store.load();
        assert_eq!(state.version, STATE_VERSION);
        assert_eq!(state.sessions.len(), 1);
        assert_eq!(state.sessions[0].id, s.id);
        assert_eq!(state.watermark, 86_400);
    }

    #[test]
    fn version_mismatch_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"version":99,"sessions":[],"watermark":5}"#).unwrap();
        let state = StateStore::new(path).load();
        assert_eq!(state.watermark, 0);
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();
        let state = StateStore::new(path).load();
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn ephemeral_store_never_writes() {
        let store = StateStore::ephemeral();
        store.save(&[session()], 1);
        assert!(store.load().sessions.is_empty());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("state.json");
        let store = StateStore::new(path.clone());
        store.save(&[], 0);
        assert!(path.exists());
    }
}
