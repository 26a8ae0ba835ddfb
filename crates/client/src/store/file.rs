//! File-backed store: one file per key inside a cache directory.
//!
//! Keys are percent-encoded into file names, so any key maps to exactly one
//! file and decoding the directory listing yields the original keys. Writes
//! go to a uniquely named temporary file first and are renamed into place, so
//! a reader never observes a half-written value.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::fs;

use folio_core::cache::{Result, Store, StoreError};

const EXTENSION: &str = "json";

/// Store that keeps each value in its own file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{EXTENSION}", urlencoding::encode(key)))
    }
}

fn map_io_error(err: std::io::Error) -> StoreError {
    match err.kind() {
        ErrorKind::StorageFull => StoreError::QuotaExceeded(err.to_string()),
        ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => {
            StoreError::Unavailable(err.to_string())
        }
        _ => StoreError::OperationFailed(err.to_string()),
    }
}

#[async_trait]
impl Store for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(map_io_error(err)),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir).await.map_err(map_io_error)?;

        let dir = self.dir.clone();
        let path = self.path_for(key);
        let value = value.to_vec();

        // Each writer gets its own temp file, so concurrent sets of one key
        // never share an inode and the last rename wins.
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir).map_err(map_io_error)?;
            tmp.write_all(&value).map_err(map_io_error)?;
            tmp.persist(&path).map_err(|err| map_io_error(err.error))?;
            Ok(())
        })
        .await
        .map_err(|err| StoreError::OperationFailed(err.to_string()))?
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(map_io_error(err)),
        }
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(map_io_error(err)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(map_io_error)? {
            let name = entry.file_name();
            let Some(stem) = name
                .to_str()
                .and_then(|n| n.strip_suffix(&format!(".{EXTENSION}")))
            else {
                continue;
            };
            if let Ok(key) = urlencoding::decode(stem) {
                keys.push(key.into_owned());
            }
        }
        Ok(keys)
    }
}
