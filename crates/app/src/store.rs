//! JSON-file profile store.
//!
//! Best effort, last write wins: `load` tolerates a missing file by
//! returning the default snapshot, `save` rewrites the whole file. The
//! engine stays correct in memory even when a save fails.

use std::{fs, path::Path};

use engine::ProfileSnapshot;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: String,
}

impl ProfileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn load(&self) -> Result<ProfileSnapshot> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ProfileSnapshot::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, snapshot: &ProfileSnapshot) -> Result<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ProfileStore {
        ProfileStore::new(
            dir.path()
                .join("state/profile.json")
                .to_string_lossy()
                .as_ref(),
        )
    }

    #[test]
    fn missing_file_loads_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = store_in(&dir).load().unwrap();

        assert_eq!(snapshot, ProfileSnapshot::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut engine = engine::Engine::builder().build().unwrap();
        engine.add_xp(120, "logged a transaction").unwrap();
        store.save(&engine.snapshot()).unwrap();

        let snapshot = store.load().unwrap();
        assert_eq!(snapshot.total_xp, 120);
        assert_eq!(snapshot.history.len(), 1);
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(dir.path().join("state")).unwrap();
        fs::write(dir.path().join("state/profile.json"), "not json").unwrap();

        assert!(store.load().is_err());
    }
}
