//! File-backed media.

use crate::extract::fill_timed_gaps;
use crate::info::{MediaInfo, content_kind, file_name};
use crate::source::impl_media_source;
use crate::{MediaEnv, MemoryMedia, ToFileConvertible, ToMemoryConvertible};
use polymedia_core::{
    Classification, ConcreteVariant, ExtractSource, FileType, MediaKind, MediaOptions,
    MediaVariant, Platform, PlatformFileFacade, classify_bytes, classify_path,
};
use polymedia_error::PolymediaResult;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Handle to a platform file: its path and the MIME type the platform
/// reported for it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct PlatformFile {
    /// Location on the platform filesystem
    path: PathBuf,
    /// MIME type reported alongside the file
    mime_type: Option<String>,
}

impl PlatformFile {
    /// Handle for `path` with no MIME type.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mime_type: None,
        }
    }

    /// Attach the MIME type the platform reported.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Media stored in a file.
///
/// The source keeps the file facade it was created with, so it can copy,
/// move, read and delete its file without being handed an environment.
#[derive(Clone)]
pub struct FileMedia<K> {
    info: MediaInfo<K>,
    file: PlatformFile,
    files: Arc<dyn PlatformFileFacade>,
}

impl<K: fmt::Debug> fmt::Debug for FileMedia<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileMedia")
            .field("name", &self.info.name)
            .field("mime_type", &self.info.mime_type)
            .field("size", &self.info.size)
            .field("metadata", &self.info.metadata)
            .field("path", &self.file.path)
            .finish()
    }
}

impl<K: PartialEq> PartialEq for FileMedia<K> {
    fn eq(&self, other: &Self) -> bool {
        self.info == other.info && self.file == other.file
    }
}

impl_media_source!(FileMedia, File);

impl<K: ConcreteVariant> FileMedia<K> {
    /// Media of kind `K` for the file at `path`.
    ///
    /// Unknown values are filled in: the name from the file name, the MIME
    /// type from the extension, the size from the filesystem and, for audio
    /// and video, the rest from the metadata extractor. None of these
    /// lookups can fail the call.
    pub async fn from_path(
        env: &MediaEnv,
        path: impl Into<PathBuf>,
        options: MediaOptions,
    ) -> Self {
        Self::from_file(env, PlatformFile::new(path), options).await
    }

    /// Media of kind `K` for a platform file handle.
    #[tracing::instrument(skip(env, options), fields(path = %file.path.display()))]
    pub async fn from_file(env: &MediaEnv, file: PlatformFile, options: MediaOptions) -> Self {
        let mime_type = options
            .mime_type()
            .clone()
            .or_else(|| file.mime_type.clone())
            .or_else(|| {
                env.classifier()
                    .mime_from_path(&file.path.to_string_lossy(), None)
            });

        build(env, file, &options, K::KIND, mime_type, K::with_duration).await
    }
}

impl FileMedia<FileType> {
    /// Classify the file at `path` and wrap it as media of that kind.
    ///
    /// On the web the content is read and classified by signature; natively
    /// the path decides. A kind in `options` skips classification.
    pub async fn detect_path(
        env: &MediaEnv,
        path: impl Into<PathBuf>,
        options: MediaOptions,
    ) -> Self {
        Self::detect_file(env, PlatformFile::new(path), options).await
    }

    /// Classify a platform file handle and wrap it as media of that kind.
    #[tracing::instrument(
        skip(env, options),
        fields(path = %file.path.display(), platform = %env.platform())
    )]
    pub async fn detect_file(env: &MediaEnv, file: PlatformFile, options: MediaOptions) -> Self {
        let hint = options.mime_type().as_deref().or(file.mime_type.as_deref());
        let (kind, mime_type) = classify_file(env, &file, hint).await.into_parts();
        let kind = content_kind(*options.kind(), kind);

        build(env, file, &options, kind, mime_type, |duration| {
            FileType::new(kind, duration)
        })
        .await
    }
}

async fn classify_file(env: &MediaEnv, file: &PlatformFile, hint: Option<&str>) -> Classification {
    let classifier = env.classifier().as_ref();
    let path = file.path.to_string_lossy();

    match env.platform() {
        Platform::Web => match env.files().read(&file.path).await {
            Ok(bytes) => classify_bytes(&bytes, hint, classifier),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Could not read file for classification, using its path"
                );
                classify_path(&path, hint, classifier)
            }
        },
        Platform::Native => classify_path(&path, hint, classifier),
    }
}

async fn build<K>(
    env: &MediaEnv,
    file: PlatformFile,
    options: &MediaOptions,
    kind: MediaKind,
    mime_type: Option<String>,
    metadata: impl FnOnce(Option<Duration>) -> K,
) -> FileMedia<K> {
    let size = match options.size() {
        Some(size) => Some(*size),
        None => match env.files().file_size(&file.path).await {
            Ok(size) => Some(size),
            Err(e) => {
                tracing::warn!(error = %e, "Could not determine file size");
                None
            }
        },
    };

    let (mime_type, duration) = fill_timed_gaps(
        env,
        kind,
        ExtractSource::File(&file.path),
        mime_type,
        *options.duration(),
    )
    .await;

    let info = MediaInfo {
        name: options
            .name()
            .clone()
            .unwrap_or_else(|| file_name(&file.path)),
        mime_type,
        size,
        metadata: metadata(duration),
    };

    FileMedia {
        info,
        file,
        files: Arc::clone(env.files()),
    }
}

impl<K: MediaVariant> FileMedia<K> {
    pub(crate) fn from_parts(
        info: MediaInfo<K>,
        file: PlatformFile,
        files: Arc<dyn PlatformFileFacade>,
    ) -> Self {
        Self { info, file, files }
    }

    /// The backing file handle.
    pub fn file(&self) -> &PlatformFile {
        &self.file
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.file.path
    }

    /// This source with kind `T`, or `None` if the metadata is of another kind.
    pub fn narrow<T: MediaVariant>(self) -> Option<FileMedia<T>> {
        let Self { info, file, files } = self;
        info.narrow().map(|info| FileMedia { info, file, files })
    }

    /// This source with its kind decided at runtime.
    pub fn erase(self) -> FileMedia<FileType> {
        let Self { info, file, files } = self;
        FileMedia {
            info: info.erase(),
            file,
            files,
        }
    }

    /// Copy the file to `path` and return a source for the copy.
    ///
    /// Missing directories are created and an existing file at `path` is
    /// replaced. Name, MIME type, size and metadata carry over.
    #[tracing::instrument(skip(self), fields(from = %self.file.path.display()))]
    pub async fn save_to(&self, path: &Path) -> PolymediaResult<Self> {
        if self.is_at(path).await {
            return Ok(self.clone());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.files.ensure_directory(parent).await?;
        }
        self.files.copy(self.path(), path).await?;

        tracing::debug!("Saved file media");
        Ok(self.relocated(path))
    }

    /// Move the file to `path` and return a source for it.
    ///
    /// Moving to the current path, or to another path for the same file,
    /// leaves the file untouched. Otherwise any file at `path` is deleted, the content
    /// is copied, and only then is the original deleted; a failed copy
    /// leaves the original in place.
    #[tracing::instrument(skip(self), fields(from = %self.file.path.display()))]
    pub async fn move_to(&self, path: &Path) -> PolymediaResult<Self> {
        if self.is_at(path).await {
            return Ok(self.clone());
        }

        if self.files.exists(path).await && !self.files.delete(path).await {
            tracing::warn!("Could not delete existing destination, overwriting");
        }

        let moved = self.save_to(path).await?;

        if !self.files.delete(self.path()).await {
            tracing::warn!("Original file was not deleted after move");
        }
        Ok(moved)
    }

    /// Delete the backing file. Returns `false` if nothing was deleted.
    pub async fn delete(&self) -> bool {
        let deleted = self.files.delete(self.path()).await;
        if !deleted {
            tracing::debug!(path = %self.file.path.display(), "File media not deleted");
        }
        deleted
    }

    /// Whether the backing file currently exists.
    pub async fn exists(&self) -> bool {
        self.files.exists(self.path()).await
    }

    /// Whether `path` names the backing file, either as written or once
    /// resolved by the facade.
    async fn is_at(&self, path: &Path) -> bool {
        path == self.path() || self.files.same_file(self.path(), path).await
    }

    fn relocated(&self, path: &Path) -> Self {
        Self {
            info: self.info.clone(),
            file: PlatformFile {
                path: path.to_path_buf(),
                mime_type: self.file.mime_type.clone(),
            },
            files: Arc::clone(&self.files),
        }
    }
}

#[async_trait::async_trait]
impl<K: MediaVariant> ToFileConvertible for FileMedia<K> {
    async fn save_to_file(&self, _env: &MediaEnv, path: &Path) -> PolymediaResult<FileMedia<K>> {
        self.save_to(path).await
    }
}

#[async_trait::async_trait]
impl<K: MediaVariant> ToMemoryConvertible for FileMedia<K> {
    #[tracing::instrument(skip(self), fields(path = %self.file.path.display()))]
    async fn convert_to_memory(&self) -> PolymediaResult<MemoryMedia<K>> {
        let bytes = self.files.read(self.path()).await?;
        Ok(MemoryMedia::from_parts(self.info.clone(), bytes))
    }
}
