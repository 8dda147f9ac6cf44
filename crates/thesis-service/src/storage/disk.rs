//! Disk-based payment proof storage
//!
//! Stores uploaded payment proofs on the local filesystem. Keys are
//! server-generated, so no path sanitization of client input is needed.

use async_trait::async_trait;
use std::path::PathBuf;
use thesis_common::AppError;
use tokio::fs;

/// Storage backend for uploaded payment proofs
#[async_trait]
pub trait ProofStore: Send + Sync {
    /// Store a proof under the given key, overwriting any previous version
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), AppError>;

    /// Fetch a proof by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;

    /// Remove a proof; missing files are not an error
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Filesystem implementation of [`ProofStore`]
#[derive(Clone)]
pub struct DiskProofStore {
    base_path: PathBuf,
}

impl DiskProofStore {
    /// Create a new disk store rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn proof_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

#[async_trait]
impl ProofStore for DiskProofStore {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), AppError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create upload directory: {e}")))?;

        fs::write(self.proof_path(key), data)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write proof {key}: {e}")))?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        match fs::read(self.proof_path(key)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!("Failed to read proof {key}: {e}"))),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.proof_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to delete proof {key}: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_put_and_get() {
        let dir = tempdir().unwrap();
        let store = DiskProofStore::new(dir.path());

        store.put("abc.png", b"fake png".to_vec()).await.unwrap();
        let data = store.get("abc.png").await.unwrap();
        assert_eq!(data, Some(b"fake png".to_vec()));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let dir = tempdir().unwrap();
        let store = DiskProofStore::new(dir.path());

        assert_eq!(store.get("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let dir = tempdir().unwrap();
        let store = DiskProofStore::new(dir.path());

        store.put("proof.pdf", b"v1".to_vec()).await.unwrap();
        store.put("proof.pdf", b"v2".to_vec()).await.unwrap();
        assert_eq!(store.get("proof.pdf").await.unwrap(), Some(b"v2".to_vec()));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = DiskProofStore::new(dir.path());

        store.put("gone.jpg", b"x".to_vec()).await.unwrap();
        store.delete("gone.jpg").await.unwrap();
        store.delete("gone.jpg").await.unwrap();
        assert_eq!(store.get("gone.jpg").await.unwrap(), None);
    }
}
