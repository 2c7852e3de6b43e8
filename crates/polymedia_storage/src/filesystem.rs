//! Filesystem facade on top of `tokio::fs`.

use polymedia_core::{ByteSize, PlatformFileFacade};
use polymedia_error::{PolymediaResult, StorageError, StorageErrorKind};
use std::io;
use std::path::Path;

/// File operations backed by the local filesystem.
///
/// Writes create missing parent directories, so saving into a fresh folder
/// needs no separate `ensure_directory` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileFacade;

impl TokioFileFacade {
    /// Create a filesystem facade.
    pub fn new() -> Self {
        Self
    }

    fn read_error(path: &Path, e: io::Error) -> StorageError {
        if e.kind() == io::ErrorKind::NotFound {
            StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
        } else {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        }
    }

    async fn ensure_parent(&self, path: &Path) -> PolymediaResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.ensure_directory(parent).await
            }
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl PlatformFileFacade for TokioFileFacade {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn delete(&self, path: &Path) -> bool {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                tracing::debug!("Deleted file");
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "File not deleted");
                false
            }
        }
    }

    async fn ensure_directory(&self, path: &Path) -> PolymediaResult<()> {
        tokio::fs::create_dir_all(path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn read(&self, path: &Path) -> PolymediaResult<Vec<u8>> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| Self::read_error(path, e))?;

        tracing::debug!(size = data.len(), "Read file");
        Ok(data)
    }

    #[tracing::instrument(skip(self, bytes), fields(path = %path.display(), size = bytes.len()))]
    async fn write(&self, path: &Path, bytes: &[u8]) -> PolymediaResult<()> {
        self.ensure_parent(path).await?;

        tokio::fs::write(path, bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        tracing::debug!("Wrote file");
        Ok(())
    }

    async fn file_size(&self, path: &Path) -> PolymediaResult<ByteSize> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| Self::read_error(path, e))?;
        Ok(ByteSize::b(metadata.len()))
    }

    async fn same_file(&self, a: &Path, b: &Path) -> bool {
        let (a_real, b_real) = tokio::join!(tokio::fs::canonicalize(a), tokio::fs::canonicalize(b));
        match (a_real, b_real) {
            (Ok(a_real), Ok(b_real)) => a_real == b_real,
            // A path that does not resolve names no existing file.
            _ => a == b,
        }
    }

    #[tracing::instrument(skip(self), fields(from = %from.display(), to = %to.display()))]
    async fn copy(&self, from: &Path, to: &Path) -> PolymediaResult<()> {
        self.ensure_parent(to).await?;

        let copied = tokio::fs::copy(from, to).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(from.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileCopy(format!(
                    "{} to {}: {}",
                    from.display(),
                    to.display(),
                    e
                )))
            }
        })?;

        tracing::debug!(size = copied, "Copied file");
        Ok(())
    }
}
