//! Media held in memory.

use crate::extract::fill_timed_gaps;
use crate::info::{MediaInfo, content_kind};
use crate::source::impl_media_source;
use crate::{FileMedia, MediaEnv, PlatformFile, ToFileConvertible};
use polymedia_core::{
    ByteSize, ConcreteVariant, ExtractSource, FileType, MediaOptions, MediaVariant, classify_bytes,
};
use polymedia_error::PolymediaResult;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Media whose content is an owned byte buffer.
///
/// The size always equals the buffer length. Two memory sources are equal
/// when their properties and their bytes are equal. The bytes never appear
/// in `Debug` output, only their length.
#[derive(Clone, PartialEq)]
pub struct MemoryMedia<K> {
    info: MediaInfo<K>,
    bytes: Vec<u8>,
}

impl<K: fmt::Debug> fmt::Debug for MemoryMedia<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryMedia")
            .field("name", &self.info.name)
            .field("mime_type", &self.info.mime_type)
            .field("size", &self.info.size)
            .field("metadata", &self.info.metadata)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .finish()
    }
}

impl_media_source!(MemoryMedia, Memory);

impl<K: ConcreteVariant> MemoryMedia<K> {
    /// Media of kind `K` over `bytes`.
    ///
    /// Only name, MIME type and duration are taken from `options`; the size
    /// is the buffer length and nothing is classified.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymedia_core::{ByteSize, MediaOptions};
    /// use polymedia_source::{AudioMemoryMedia, MediaSource};
    /// use std::time::Duration;
    ///
    /// let media = AudioMemoryMedia::new(
    ///     vec![0; 16],
    ///     MediaOptions::default()
    ///         .with_name("beep.wav")
    ///         .with_duration(Duration::from_millis(250)),
    /// );
    ///
    /// assert_eq!(media.size(), Some(ByteSize::b(16)));
    /// assert_eq!(media.metadata().duration, Some(Duration::from_millis(250)));
    /// ```
    pub fn new(bytes: Vec<u8>, options: MediaOptions) -> Self {
        let info = MediaInfo {
            name: options.name().clone().unwrap_or_default(),
            mime_type: options.mime_type().clone(),
            size: None,
            metadata: K::with_duration(*options.duration()),
        };
        Self::from_parts(info, bytes)
    }
}

impl MemoryMedia<FileType> {
    /// Classify `bytes` by signature and wrap them as media of that kind.
    ///
    /// A MIME type in `options` steers classification and a kind skips it.
    /// Audio and video missing a duration or MIME type are passed to the
    /// metadata extractor; if it fails or runs past the timeout the source
    /// is built from what was already known.
    #[tracing::instrument(skip(env, bytes, options), fields(size = bytes.len()))]
    pub async fn from_bytes(env: &MediaEnv, bytes: Vec<u8>, options: MediaOptions) -> Self {
        let (kind, mime_type) =
            classify_bytes(&bytes, options.mime_type().as_deref(), env.classifier().as_ref())
                .into_parts();
        let kind = content_kind(*options.kind(), kind);

        let (mime_type, duration) = fill_timed_gaps(
            env,
            kind,
            ExtractSource::Bytes(&bytes),
            mime_type,
            *options.duration(),
        )
        .await;

        let info = MediaInfo {
            name: options.name().clone().unwrap_or_default(),
            mime_type,
            size: None,
            metadata: FileType::new(kind, duration),
        };
        Self::from_parts(info, bytes)
    }
}

impl<K: MediaVariant> MemoryMedia<K> {
    pub(crate) fn from_parts(info: MediaInfo<K>, bytes: Vec<u8>) -> Self {
        let size = Some(ByteSize::b(bytes.len() as u64));
        Self {
            info: info.with_size(size),
            bytes,
        }
    }

    /// The content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the content out of the source.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// This source with kind `T`, or `None` if the metadata is of another kind.
    pub fn narrow<T: MediaVariant>(self) -> Option<MemoryMedia<T>> {
        let Self { info, bytes } = self;
        info.narrow().map(|info| MemoryMedia { info, bytes })
    }

    /// This source with its kind decided at runtime.
    pub fn erase(self) -> MemoryMedia<FileType> {
        MemoryMedia {
            info: self.info.erase(),
            bytes: self.bytes,
        }
    }
}

#[async_trait::async_trait]
impl<K: MediaVariant> ToFileConvertible for MemoryMedia<K> {
    #[tracing::instrument(skip(self, env), fields(name = %self.info.name, size = self.bytes.len()))]
    async fn save_to_file(&self, env: &MediaEnv, path: &Path) -> PolymediaResult<FileMedia<K>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            env.files().ensure_directory(parent).await?;
        }
        env.files().write(path, &self.bytes).await?;

        let mut file = PlatformFile::new(path);
        if let Some(mime_type) = &self.info.mime_type {
            file = file.with_mime_type(mime_type.clone());
        }

        tracing::debug!("Saved memory media to file");
        Ok(FileMedia::from_parts(
            self.info.clone(),
            file,
            Arc::clone(env.files()),
        ))
    }
}
