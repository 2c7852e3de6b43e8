//! File facade that counts the operations passed through it.

use polymedia_core::{ByteSize, PlatformFileFacade};
use polymedia_error::PolymediaResult;
use polymedia_storage::TokioFileFacade;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps [`TokioFileFacade`] and counts every call.
#[derive(Debug, Clone, Default)]
pub struct CountingFiles {
    inner: TokioFileFacade,
    calls: Arc<AtomicUsize>,
}

impl CountingFiles {
    /// Create a counting facade.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl PlatformFileFacade for CountingFiles {
    async fn exists(&self, path: &Path) -> bool {
        self.count();
        self.inner.exists(path).await
    }

    async fn delete(&self, path: &Path) -> bool {
        self.count();
        self.inner.delete(path).await
    }

    async fn ensure_directory(&self, path: &Path) -> PolymediaResult<()> {
        self.count();
        self.inner.ensure_directory(path).await
    }

    async fn read(&self, path: &Path) -> PolymediaResult<Vec<u8>> {
        self.count();
        self.inner.read(path).await
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> PolymediaResult<()> {
        self.count();
        self.inner.write(path, bytes).await
    }

    async fn file_size(&self, path: &Path) -> PolymediaResult<ByteSize> {
        self.count();
        self.inner.file_size(path).await
    }

    async fn same_file(&self, a: &Path, b: &Path) -> bool {
        self.count();
        self.inner.same_file(a, b).await
    }

    async fn copy(&self, from: &Path, to: &Path) -> PolymediaResult<()> {
        self.count();
        self.inner.copy(from, to).await
    }
}
