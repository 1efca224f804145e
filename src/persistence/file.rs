use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// Stores each key as `<base_dir>/<key>.json`
#[derive(Clone, Debug)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Per-user data directory for the current OS
    pub fn default_base_dir() -> PathBuf {
        #[cfg(target_os = "macos")]
        {
            if let Some(home) = std::env::var_os("HOME") {
                return PathBuf::from(home).join("Library/Application Support/SpaceJumper");
            }
        }
        #[cfg(target_os = "linux")]
        {
            if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
                return PathBuf::from(xdg).join("space-jumper");
            }
            if let Some(home) = std::env::var_os("HOME") {
                return PathBuf::from(home).join(".local/share/space-jumper");
            }
        }
        #[cfg(target_os = "windows")]
        {
            if let Some(local) = std::env::var_os("LOCALAPPDATA") {
                return PathBuf::from(local).join("SpaceJumper");
            }
        }
        PathBuf::from("./space-jumper-data")
    }

    pub fn default_dir() -> Self {
        Self::new(Self::default_base_dir())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.base_dir)?;
        // Write-then-rename so readers never see a partial snapshot
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir().join(format!(
            "space-jumper-{name}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = FileStore::new(scratch_dir("missing"));
        assert!(store.get("leaderboard").unwrap().is_none());
    }

    #[test]
    fn test_set_overwrites_whole_value() {
        let dir = scratch_dir("overwrite");
        let mut store = FileStore::new(&dir);
        store.set("leaderboard", "[{\"name\":\"Amy\",\"score\":5}]").unwrap();
        store.set("leaderboard", "[]").unwrap();

        let reopened = FileStore::new(&dir);
        assert_eq!(reopened.get("leaderboard").unwrap().as_deref(), Some("[]"));
        assert!(!dir.join("leaderboard.tmp").exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let mut store = FileStore::new(scratch_dir("keys"));
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
    }
}
