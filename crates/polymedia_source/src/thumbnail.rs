//! Media paired with a preview image.

use crate::{BackendRef, MediaSource};
use polymedia_core::ByteSize;

/// A source together with an optional thumbnail source.
///
/// All properties come from the original. The pair is not itself on any
/// backend, so folding over it always reaches the fallback; fold over
/// [`original`](Self::original) instead.
///
/// # Examples
///
/// ```
/// use polymedia_core::MediaOptions;
/// use polymedia_source::{ImageMemoryMedia, MediaSource, ThumbnailMedia, VideoMemoryMedia};
///
/// let video = VideoMemoryMedia::new(vec![0; 64], MediaOptions::default().with_name("clip.mp4"));
/// let poster = ImageMemoryMedia::new(vec![0; 8], MediaOptions::default());
///
/// let media = ThumbnailMedia::new(video, Some(poster));
/// assert_eq!(media.name(), "clip.mp4");
/// assert!(media.has_thumbnail());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailMedia<M, T> {
    original: M,
    thumbnail: Option<T>,
}

impl<M: MediaSource, T: MediaSource> ThumbnailMedia<M, T> {
    /// Pair `original` with `thumbnail`.
    pub fn new(original: M, thumbnail: Option<T>) -> Self {
        Self {
            original,
            thumbnail,
        }
    }

    /// The media itself.
    pub fn original(&self) -> &M {
        &self.original
    }

    /// The preview, if there is one.
    pub fn thumbnail(&self) -> Option<&T> {
        self.thumbnail.as_ref()
    }

    /// Whether a preview is attached.
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }

    /// Split into original and thumbnail.
    pub fn into_parts(self) -> (M, Option<T>) {
        (self.original, self.thumbnail)
    }
}

impl<M: MediaSource, T: MediaSource> MediaSource for ThumbnailMedia<M, T> {
    type Kind = M::Kind;

    fn name(&self) -> &str {
        self.original.name()
    }

    fn mime_type(&self) -> Option<&str> {
        self.original.mime_type()
    }

    fn size(&self) -> Option<ByteSize> {
        self.original.size()
    }

    fn metadata(&self) -> &M::Kind {
        self.original.metadata()
    }

    fn as_backend(&self) -> Option<BackendRef<'_, M::Kind>> {
        None
    }
}
