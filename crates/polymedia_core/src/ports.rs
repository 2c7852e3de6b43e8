//! Traits through which media sources reach the platform.
//!
//! Backends never touch the filesystem, MIME tables, codec parsers or asset
//! bundles directly. They call these traits, and the application picks the
//! implementations once at startup.

use crate::ByteSize;
use polymedia_error::{PolymediaResult, StorageError, StorageErrorKind};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Which platform the application runs on.
///
/// On the web there is no real path to inspect, so file factories classify
/// by reading the content instead of by extension.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display,
)]
pub enum Platform {
    /// Desktop or mobile with a real filesystem.
    #[default]
    #[display("native")]
    Native,
    /// Browser sandbox.
    #[display("web")]
    Web,
}

/// Low-level file operations.
///
/// `exists` and `delete` report absence as `false`; the remaining operations
/// return storage errors.
#[async_trait::async_trait]
pub trait PlatformFileFacade: fmt::Debug + Send + Sync {
    /// Whether a file exists at `path`.
    async fn exists(&self, path: &Path) -> bool;

    /// Delete the file at `path`. Returns `false` if nothing was deleted.
    async fn delete(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents.
    async fn ensure_directory(&self, path: &Path) -> PolymediaResult<()>;

    /// Read the whole file.
    async fn read(&self, path: &Path) -> PolymediaResult<Vec<u8>>;

    /// Replace the file contents with `bytes`.
    async fn write(&self, path: &Path, bytes: &[u8]) -> PolymediaResult<()>;

    /// Size of the file without reading it.
    async fn file_size(&self, path: &Path) -> PolymediaResult<ByteSize>;

    /// Whether `a` and `b` refer to the same file.
    ///
    /// The default compares the paths as written. Facades over a real
    /// filesystem should resolve `..` segments and links first.
    async fn same_file(&self, a: &Path, b: &Path) -> bool {
        a == b
    }

    /// Copy the file at `from` to `to`, replacing any file already there.
    async fn copy(&self, from: &Path, to: &Path) -> PolymediaResult<()> {
        let bytes = self.read(from).await?;
        self.write(to, &bytes).await
    }
}

/// Lookup from paths and byte prefixes to MIME types.
///
/// Implementations own the extension and signature tables; the core only
/// applies its substring rules to whatever MIME string comes back.
pub trait TypeClassifier: fmt::Debug + Send + Sync {
    /// MIME type for a path or URL, judged by its extension.
    fn mime_from_path(&self, path: &str, mime_hint: Option<&str>) -> Option<String>;

    /// MIME type for a buffer, judged by its leading bytes.
    fn mime_from_bytes(&self, bytes: &[u8], mime_hint: Option<&str>) -> Option<String>;
}

/// Input handed to a [`MetadataExtractor`].
#[derive(Debug, Clone, Copy)]
pub enum ExtractSource<'a> {
    /// In-memory content.
    Bytes(&'a [u8]),
    /// Content of a file on disk.
    File(&'a Path),
}

/// What a metadata extractor found.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option, into)]
pub struct ExtractedMetadata {
    /// Container MIME type, if recognised.
    mime_type: Option<String>,
    /// Playback duration, if the container declares one.
    duration: Option<Duration>,
}

/// Codec-level metadata extraction for audio and video.
///
/// Extraction is best effort: implementations return `None` on any failure.
/// Callers additionally bound each call by `timeout`.
#[async_trait::async_trait]
pub trait MetadataExtractor: fmt::Debug + Send + Sync {
    /// Inspect `source` and report its MIME type and duration.
    async fn extract(
        &self,
        source: ExtractSource<'_>,
        timeout: Duration,
    ) -> Option<ExtractedMetadata>;
}

/// Extractor that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetadata;

#[async_trait::async_trait]
impl MetadataExtractor for NoMetadata {
    async fn extract(&self, _: ExtractSource<'_>, _: Duration) -> Option<ExtractedMetadata> {
        None
    }
}

/// Source of application assets.
#[async_trait::async_trait]
pub trait BundleLoader: fmt::Debug + Send + Sync {
    /// Load the full content of the asset at `asset_path`.
    async fn load(&self, asset_path: &str) -> PolymediaResult<Vec<u8>>;
}

/// Bundle with no assets in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBundle;

#[async_trait::async_trait]
impl BundleLoader for EmptyBundle {
    async fn load(&self, asset_path: &str) -> PolymediaResult<Vec<u8>> {
        Err(StorageError::new(StorageErrorKind::NotFound(asset_path.to_string())).into())
    }
}
