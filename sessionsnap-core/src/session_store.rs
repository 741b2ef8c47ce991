//! Saves and loads sessions, one JSON file per profile.
use std::env;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::Config;
use crate::errors::{Result, SnapError};
use crate::models::dto::StoredSession;
use crate::models::{Profile, SessionSnapshot};

const BASE_DIR_NAME: &str = ".sessionsnap";
const DEFAULT_SESSION_FILE: &str = "session.json";
const PROFILES_DIR_NAME: &str = "sessions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    base_dir: PathBuf,
}

impl SessionStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Uses the configured session directory, or `~/.sessionsnap`.
    pub fn from_config(config: &impl Config) -> Self {
        Self::new(config.session_dir().unwrap_or_else(Self::default_base_dir))
    }

    /// `~/.sessionsnap`, under the temporary directory if there is no home.
    pub fn default_base_dir() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(BASE_DIR_NAME)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The default profile always lives at `<base>/session.json`, every other
    /// profile at `<base>/sessions/<name>.json`.
    pub fn path_for(&self, profile: &Profile) -> PathBuf {
        if profile.is_default() {
            self.base_dir.join(DEFAULT_SESSION_FILE)
        } else {
            self.base_dir
                .join(PROFILES_DIR_NAME)
                .join(format!("{}.json", profile.name()))
        }
    }

    /// True if `profile` has a readable session file.
    pub fn exists(&self, profile: &Profile) -> bool {
        let path = self.path_for(profile);
        path.is_file() && File::open(path).is_ok()
    }

    /// Writes `snapshot` over whatever `profile` held before.
    ///
    /// The file is replaced atomically, a failed save leaves the previous
    /// session untouched.
    ///
    /// # Errors
    ///
    /// Will error if the directories cannot be created or the file cannot be
    /// written.
    pub fn save(&self, snapshot: &SessionSnapshot, profile: &Profile) -> Result<PathBuf> {
        let path = self.path_for(profile);
        let dir = path.parent().unwrap_or(&self.base_dir);
        fs::create_dir_all(dir).map_err(|e| SnapError::storage(dir, e))?;

        let json = serde_json::to_vec(&StoredSession::from(snapshot))?;
        let mut file = NamedTempFile::new_in(dir).map_err(|e| SnapError::storage(dir, e))?;
        file.write_all(&json)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| SnapError::storage(file.path(), e))?;
        file.persist(&path)
            .map_err(|e| SnapError::storage(&path, e.error))?;

        tracing::debug!(path = %path.display(), windows = snapshot.len(), "Session saved.");
        Ok(path)
    }

    /// # Errors
    ///
    /// Will error if the profile was never saved or its file is unreadable or
    /// malformed.
    pub fn load(&self, profile: &Profile) -> Result<SessionSnapshot> {
        let path = self.path_for(profile);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(SnapError::SessionMissing { path });
            }
            Err(err) => return Err(SnapError::storage(path, err)),
        };
        let stored: StoredSession = match serde_json::from_reader(BufReader::new(file)) {
            Ok(stored) => stored,
            Err(source) if source.is_io() => {
                return Err(SnapError::storage(path, source.into()));
            }
            Err(source) => return Err(SnapError::SessionUnparseable { path, source }),
        };
        Ok(SessionSnapshot::from(stored))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::test::TestConfig;
    use crate::models::{WindowSnapshot, Xyhw};

    fn sample() -> SessionSnapshot {
        [
            WindowSnapshot {
                pid: 4242,
                xyhw: Xyhw::new(10, 20, 640, 480),
                desktop: 1,
                maximized: true,
                title: "notes.txt - gedit".to_owned(),
                command: vec!["gedit".to_owned(), "notes.txt".to_owned()],
                exe_path: "/usr/bin/gedit".to_owned(),
                ..WindowSnapshot::default()
            },
            WindowSnapshot {
                pid: 7,
                desktop: -1,
                minimized: true,
                command: vec!["xterm".to_owned()],
                ..WindowSnapshot::default()
            },
        ]
        .into_iter()
        .collect()
    }

    fn store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn profiles_map_to_distinct_files() {
        let store = SessionStore::new("/base");
        assert_eq!(
            store.path_for(&Profile::default()),
            PathBuf::from("/base/session.json")
        );
        assert_eq!(
            store.path_for(&Profile::new("work").unwrap()),
            PathBuf::from("/base/sessions/work.json")
        );
        assert_eq!(
            store.path_for(&Profile::new("session").unwrap()),
            PathBuf::from("/base/sessions/session.json")
        );
    }

    #[test]
    fn configured_dir_overrides_home() {
        let config = TestConfig {
            session_dir: Some(PathBuf::from("/somewhere")),
            ..TestConfig::default()
        };
        assert_eq!(SessionStore::from_config(&config).base_dir(), Path::new("/somewhere"));
        assert!(SessionStore::from_config(&TestConfig::default())
            .base_dir()
            .ends_with(BASE_DIR_NAME));
    }

    #[test]
    fn saved_sessions_load_back_unchanged() {
        let (_dir, store) = store();
        let profile = Profile::default();
        let snapshot = sample();
        store.save(&snapshot, &profile).unwrap();
        assert!(store.exists(&profile));
        assert_eq!(store.load(&profile).unwrap(), snapshot);
    }

    #[test]
    fn saving_twice_overwrites() {
        let (_dir, store) = store();
        let profile = Profile::new("work").unwrap();
        let path = store.save(&sample(), &profile).unwrap();
        let first = fs::read(&path).unwrap();
        store.save(&sample(), &profile).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
        assert_eq!(store.load(&profile).unwrap(), sample());
    }

    #[test]
    fn profiles_do_not_see_each_other() {
        let (_dir, store) = store();
        store.save(&sample(), &Profile::new("work").unwrap()).unwrap();
        assert!(!store.exists(&Profile::default()));
        assert!(matches!(
            store.load(&Profile::default()),
            Err(SnapError::SessionMissing { .. })
        ));
        store
            .save(&SessionSnapshot::new(), &Profile::default())
            .unwrap();
        assert!(store.load(&Profile::default()).unwrap().is_empty());
        assert_eq!(store.load(&Profile::new("work").unwrap()).unwrap(), sample());
    }

    #[test]
    fn stored_format_uses_flat_fields() {
        let (_dir, store) = store();
        let path = store.save(&sample(), &Profile::default()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(json["count"], 2);
        let first = &json["windows"][0];
        assert_eq!(first["pid"], 4242);
        assert_eq!(first["width"], 640);
        assert_eq!(first["is_maximized"], 1);
        assert_eq!(first["cmd"][1], "notes.txt");
        assert_eq!(json["windows"][1]["desktop"], -1);
    }

    #[test]
    fn garbage_is_reported_not_panicked_on() {
        let (_dir, store) = store();
        let profile = Profile::default();
        fs::create_dir_all(store.base_dir()).unwrap();
        fs::write(store.path_for(&profile), "{ not json").unwrap();
        assert!(matches!(
            store.load(&profile),
            Err(SnapError::SessionUnparseable { .. })
        ));
    }

    #[test]
    fn unwritable_base_is_a_storage_error() {
        let (dir, _) = store();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let store = SessionStore::new(&blocker);
        assert!(matches!(
            store.save(&sample(), &Profile::default()),
            Err(SnapError::StorageUnavailable { .. })
        ));
    }

    #[test]
    fn directories_are_not_sessions() {
        let (_dir, store) = store();
        let profile = Profile::new("work").unwrap();
        fs::create_dir_all(store.path_for(&profile)).unwrap();
        assert!(!store.exists(&profile));
        assert!(!store.exists(&Profile::default()));
    }
}
