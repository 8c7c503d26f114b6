use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppResult;

/// A record type persisted as one JSON array document.
pub trait Record: Serialize + DeserializeOwned {
    /// File name inside the data directory.
    const FILE: &'static str;
}

/// Flat-file store: one pretty-printed JSON array per collection.
///
/// Every write is a full read-modify-write of the collection with no locking,
/// so only one process may use a data directory at a time.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

pub fn init_store(data_dir: &Path) -> AppResult<JsonStore> {
    fs::create_dir_all(data_dir).map_err(|e| {
        tracing::error!(error = %e, dir = %data_dir.display(), "Failed to create data directory");
        e
    })?;

    Ok(JsonStore {
        dir: data_dir.to_path_buf(),
    })
}

impl JsonStore {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of<T: Record>(&self) -> PathBuf {
        self.dir.join(T::FILE)
    }

    /// Loads a collection; a missing file is an empty collection.
    pub fn load<T: Record>(&self) -> AppResult<Vec<T>> {
        let path = self.path_of::<T>();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                tracing::error!(error = %e, file = T::FILE, "Failed to read collection");
                return Err(e.into());
            }
        };

        if raw.trim().is_empty() || raw.trim() == "null" {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(error = %e, file = T::FILE, "Failed to parse collection");
            e.into()
        })
    }

    /// Replaces a collection on disk. Written to a sibling temp file first
    /// and renamed into place.
    pub fn save<T: Record>(&self, records: &[T]) -> AppResult<()> {
        let path = self.path_of::<T>();
        let tmp = path.with_extension("json.tmp");

        let body = serde_json::to_string_pretty(records)?;

        let result = fs::write(&tmp, body).and_then(|_| fs::rename(&tmp, &path));
        if let Err(e) = result {
            tracing::error!(error = %e, file = T::FILE, "Failed to save collection");
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(file = T::FILE, count = records.len(), "Collection saved");
        Ok(())
    }

    /// Loads, mutates and saves a collection. Nothing is written when `f`
    /// returns an error.
    pub fn update<T, R, F>(&self, f: F) -> AppResult<R>
    where
        T: Record,
        F: FnOnce(&mut Vec<T>) -> AppResult<R>,
    {
        let mut records = self.load::<T>()?;
        let out = f(&mut records)?;
        self.save(&records)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Note {
        text: String,
    }

    impl Record for Note {
        const FILE: &'static str = "notes.json";
    }

    fn note(text: &str) -> Note {
        Note {
            text: text.to_string(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = init_store(dir.path()).unwrap();
        assert!(store.load::<Note>().unwrap().is_empty());
    }

    #[test]
    fn saved_collection_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = init_store(dir.path()).unwrap();
        store.save(&[note("a"), note("b")]).unwrap();

        let raw = fs::read_to_string(dir.path().join("notes.json")).unwrap();
        assert!(raw.starts_with("[\n"));
        assert_eq!(store.load::<Note>().unwrap(), vec![note("a"), note("b")]);
        assert!(!dir.path().join("notes.json.tmp").exists());
    }

    #[test]
    fn failed_update_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = init_store(dir.path()).unwrap();
        store.save(&[note("keep")]).unwrap();

        let result = store.update::<Note, (), _>(|notes| {
            notes.clear();
            Err(AppError::validation("nope"))
        });

        assert!(result.is_err());
        assert_eq!(store.load::<Note>().unwrap(), vec![note("keep")]);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = init_store(dir.path()).unwrap();
        fs::write(dir.path().join("notes.json"), "[{").unwrap();

        assert!(matches!(store.load::<Note>(), Err(AppError::Json(_))));
    }

    #[test]
    fn creates_nested_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = init_store(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }
}
