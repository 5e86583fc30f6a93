//! Persisted blobs that survive process restarts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Opaque key/value blob store.
pub trait BlobStore: Send + Sync {
    /// Fetch the blob stored under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob.
    fn put(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Blob store backed by one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        // Opaque bytes; invalid UTF-8 is replaced rather than rejected
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn put(&self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());

        assert_eq!(store.get("region_cache.txt").unwrap(), None);
        store.put("region_cache.txt", "Paris, France").unwrap();
        assert_eq!(
            store.get("region_cache.txt").unwrap().as_deref(),
            Some("Paris, France")
        );
        // Stored verbatim, no trailing newline or framing
        assert_eq!(
            fs::read(dir.path().join("region_cache.txt")).unwrap(),
            b"Paris, France"
        );
    }

    #[test]
    fn test_non_utf8_blob_is_read_lossily() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("region_cache.txt"), b"Z\xFCrich, Switzerland").unwrap();

        let store = FileBlobStore::new(dir.path());
        assert_eq!(
            store.get("region_cache.txt").unwrap().as_deref(),
            Some("Z\u{FFFD}rich, Switzerland")
        );
    }

    #[test]
    fn test_put_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().join("missing"));
        assert!(store.put("region_cache.txt", "x").is_err());
    }
}
