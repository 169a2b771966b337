//! # Filesystem-backed key/value store
//!
//! [`FileStore`] keeps each key in its own file under a base directory. It is
//! used when the app runs natively (e.g. `dx serve` without the web target)
//! so a login survives restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # file containing the value
//! ```
//!
//! Use `dirs::data_dir()` joined with `examhub` for a platform-appropriate base.

use std::path::PathBuf;

use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(safe)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.key_path(key);
        let written = std::fs::create_dir_all(&self.base).and_then(|_| std::fs::write(&path, value));
        if let Err(e) = written {
            tracing::warn!("Could not write {}: {}", path.display(), e);
        }
    }

    fn remove(&self, key: &str) {
        let path = self.key_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Could not remove {}: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("examhub_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let session = Session::new(FileStore::new(dir.clone()));
        session.remember("12345");

        // Re-open from same directory
        let reopened = Session::new(FileStore::new(dir.clone()));
        assert_eq!(reopened.login_key().as_deref(), Some("12345"));

        reopened.forget();
        assert!(Session::new(FileStore::new(dir.clone())).login_key().is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_base_keeps_session_empty() {
        // A regular file where the directory should be makes every write fail
        let blocker = std::env::temp_dir().join(format!("examhub_blocker_{}", std::process::id()));
        std::fs::write(&blocker, "not a directory").unwrap();

        let session = Session::new(FileStore::new(blocker.join("nested")));
        session.remember("12345");
        assert!(session.login_key().is_none());
        session.forget();

        let _ = std::fs::remove_file(&blocker);
    }

    #[test]
    fn test_key_is_sanitised() {
        let store = FileStore::new(PathBuf::from("/tmp/base"));
        assert_eq!(store.key_path("../etc"), PathBuf::from("/tmp/base/___etc"));
    }
}
