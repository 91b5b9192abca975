// src/services/photo_storage.rs
// DOCUMENTATION: Filesystem storage for uploaded item photos
// PURPOSE: Generated-filename derivation and file read/write/delete,
// independent of the web framework

use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Handle to the configured upload directory
/// DOCUMENTATION: Stored filenames are flat (no subdirectories); the database
/// keeps only the generated filename, never an absolute path
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    upload_dir: PathBuf,
}

impl PhotoStorage {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        PhotoStorage {
            upload_dir: upload_dir.into(),
        }
    }

    /// Derive a stored filename: a fresh uuid plus the original file's
    /// extension (including the dot), if any.
    /// DOCUMENTATION: The original filename is otherwise discarded, which
    /// prevents collisions and path traversal via client-supplied names.
    pub fn generate_filename(original_filename: Option<&str>) -> String {
        let extension = original_filename
            .and_then(|name| name.rfind('.').map(|idx| &name[idx..]))
            .unwrap_or("");

        format!("{}{}", Uuid::new_v4(), extension)
    }

    /// Absolute (or config-relative) path of a stored filename
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Create the upload directory if it does not exist (idempotent)
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.upload_dir).await
    }

    /// Write file bytes under the upload directory, creating it if needed.
    /// Returns the path the file was written to.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        self.ensure_dir().await?;

        let path = self.path_for(filename);
        tokio::fs::write(&path, bytes).await?;

        log::info!("Stored photo file at {}", path.display());
        Ok(path)
    }

    /// Delete a stored file, treating an already-absent file as success
    pub async fn remove(&self, filename: &str) -> io::Result<()> {
        let path = self.path_for(filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("Photo file already absent: {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    #[allow(dead_code)]
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> PhotoStorage {
        let dir = std::env::temp_dir().join(format!("photo-storage-test-{}", Uuid::new_v4()));
        PhotoStorage::new(dir)
    }

    #[test]
    fn test_generate_filename_keeps_extension() {
        let name = PhotoStorage::generate_filename(Some("photo.png"));
        assert!(name.ends_with(".png"));
        assert_ne!(name, "photo.png");
    }

    #[test]
    fn test_generate_filename_keeps_last_extension_only() {
        let name = PhotoStorage::generate_filename(Some("archive.tar.gz"));
        assert!(name.ends_with(".gz"));
        assert!(!name.contains("archive"));
    }

    #[test]
    fn test_generate_filename_without_extension() {
        let name = PhotoStorage::generate_filename(Some("README"));
        assert!(!name.contains('.'));

        let name = PhotoStorage::generate_filename(None);
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_generate_filename_is_unique() {
        let a = PhotoStorage::generate_filename(Some("photo.png"));
        let b = PhotoStorage::generate_filename(Some("photo.png"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_filename_discards_path_components() {
        let name = PhotoStorage::generate_filename(Some("../../etc/passwd.png"));
        assert!(name.ends_with(".png"));
        assert!(!name.contains(".."));
        assert!(!name.contains('/'));
    }

    #[tokio::test]
    async fn test_save_and_remove_round_trip() {
        let storage = temp_storage();
        let filename = PhotoStorage::generate_filename(Some("photo.jpg"));

        let path = storage.save(&filename, b"image-bytes").await.unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"image-bytes");

        storage.remove(&filename).await.unwrap();
        assert!(!path.exists());

        std::fs::remove_dir_all(storage.upload_dir()).ok();
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let storage = temp_storage();
        assert!(!storage.upload_dir().exists());

        storage.save("a.png", b"x").await.unwrap();
        assert!(storage.upload_dir().exists());

        // Second save with the directory already present is fine
        storage.save("b.png", b"y").await.unwrap();

        std::fs::remove_dir_all(storage.upload_dir()).ok();
    }

    #[tokio::test]
    async fn test_remove_absent_file_is_ok() {
        let storage = temp_storage();
        storage.ensure_dir().await.unwrap();

        assert!(storage.remove("never-written.png").await.is_ok());

        std::fs::remove_dir_all(storage.upload_dir()).ok();
    }
}
