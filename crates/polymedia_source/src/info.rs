//! Properties common to every backend.

use polymedia_core::{ByteSize, FileType, MediaKind, MediaVariant};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MediaInfo<K> {
    pub(crate) name: String,
    pub(crate) mime_type: Option<String>,
    pub(crate) size: Option<ByteSize>,
    pub(crate) metadata: K,
}

impl<K: MediaVariant> MediaInfo<K> {
    /// Re-type the metadata; `None` when the kinds disagree.
    pub(crate) fn narrow<T: MediaVariant>(self) -> Option<MediaInfo<T>> {
        let metadata = T::from_file_type(self.metadata.into_file_type())?;
        Some(MediaInfo {
            name: self.name,
            mime_type: self.mime_type,
            size: self.size,
            metadata,
        })
    }

    pub(crate) fn erase(self) -> MediaInfo<FileType> {
        MediaInfo {
            name: self.name,
            mime_type: self.mime_type,
            size: self.size,
            metadata: self.metadata.into_file_type(),
        }
    }

    pub(crate) fn with_size(self, size: Option<ByteSize>) -> Self {
        Self { size, ..self }
    }
}

/// Kind of content held in a file or buffer: the caller's hint if given,
/// else the classified kind. Only network sources can be links, so a link
/// hint becomes `Other`.
pub(crate) fn content_kind(hint: Option<MediaKind>, classified: MediaKind) -> MediaKind {
    match hint {
        Some(MediaKind::Url) => MediaKind::Other,
        Some(kind) => kind,
        None => classified,
    }
}

/// Last component of a path, or an empty string.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
