//! Crash-safe file replacement.
//!
//! Every write goes to a hidden sibling (`.<name>.tmp`), is fsynced and then
//! renamed over the target while `<name>.lock` is held exclusively. Readers
//! therefore see either the old file or the new one.

use journey_core::JourneyError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot render TOML: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("cannot lock {}: {source}", .path.display())]
    Lock {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} has no file name", .0.display())]
    NoFileName(PathBuf),
}

impl From<StorageError> for JourneyError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Io(err) => err.into(),
            StorageError::Parse { source, .. } => source.into(),
            StorageError::Render(err) => err.into(),
            other => JourneyError::io(other.to_string()),
        }
    }
}

/// Replaces `path` with `contents`, creating parent directories as needed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StorageError::NoFileName(path.to_path_buf()))?;
    let staging = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
        _ => {}
    }

    let _guard = LockGuard::exclusive(path)?;

    let mut staged = File::create(&staging)?;
    staged.write_all(contents)?;
    staged.sync_all()?;
    drop(staged);

    fs::rename(&staging, path)?;
    Ok(())
}

/// A TOML document on disk, rewritten atomically.
pub struct TomlStore<T> {
    path: PathBuf,
    _doc: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> TomlStore<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file is absent or blank.
    pub fn read(&self) -> Result<Option<T>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        toml::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    pub fn write(&self, doc: &T) -> Result<(), StorageError> {
        let text = toml::to_string_pretty(doc)?;
        write_atomic(&self.path, text.as_bytes())
    }
}

/// Holds `<target>.lock` until dropped, then removes it.
struct LockGuard {
    _handle: File,
    path: PathBuf,
}

impl LockGuard {
    fn exclusive(target: &Path) -> Result<Self, StorageError> {
        let path = target.with_extension("lock");
        let handle = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            if let Err(source) = handle.lock_exclusive() {
                return Err(StorageError::Lock { path, source });
            }
        }

        Ok(Self {
            _handle: handle,
            path,
        })
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Thresholds {
        marker: String,
        top: usize,
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = TomlStore::<Thresholds>::new(dir.path().join("t.toml"));
        let doc = Thresholds {
            marker: "Auftrag".to_string(),
            top: 5,
        };

        store.write(&doc).unwrap();

        assert_eq!(store.read().unwrap(), Some(doc));
    }

    #[test]
    fn test_absent_and_blank_files_read_as_none() {
        let dir = TempDir::new().unwrap();
        let store = TomlStore::<Thresholds>::new(dir.path().join("t.toml"));
        assert!(store.read().unwrap().is_none());

        fs::write(store.path(), "  \n").unwrap();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_write_atomic_creates_parents_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.csv");

        write_atomic(&path, b"a,b\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
        assert!(!path.with_extension("lock").exists());
        assert!(!dir.path().join("nested").join(".out.csv.tmp").exists());
    }

    #[test]
    fn test_broken_toml_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "marker = ").unwrap();

        let err = TomlStore::<Thresholds>::new(path).read().unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
