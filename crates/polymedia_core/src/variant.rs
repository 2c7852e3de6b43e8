//! Kind-specific metadata values.
//!
//! Each media kind has a value type (`ImageType`, `AudioType`, ...). Audio
//! and video carry an optional duration; the others carry nothing. The
//! [`FileType`] enum erases the kind so a source classified at runtime can be
//! held before it is narrowed to a concrete kind.

use crate::MediaKind;
use std::fmt;
use std::time::Duration;

/// Metadata value fixed on a media source at construction.
///
/// Implemented by the six concrete kind types and by the erased
/// [`FileType`]. Conversions through `FileType` are how a source of one
/// metadata type is narrowed to another: narrowing succeeds only when the
/// kinds agree.
pub trait MediaVariant: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The kind this value represents.
    fn kind(&self) -> MediaKind;

    /// Erase into the runtime-tagged form.
    fn into_file_type(self) -> FileType;

    /// Recover this type from the runtime-tagged form, if the kinds agree.
    fn from_file_type(file_type: FileType) -> Option<Self>;
}

/// A variant whose kind is known at compile time.
pub trait ConcreteVariant: MediaVariant {
    /// The kind of every value of this type.
    const KIND: MediaKind;

    /// Build the value, keeping `duration` only for timed kinds.
    fn with_duration(duration: Option<Duration>) -> Self;
}

/// A variant that carries a playback duration.
pub trait TimedVariant: MediaVariant {
    /// Playback duration, if known.
    fn duration(&self) -> Option<Duration>;
}

/// Image metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ImageType;

/// Audio metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AudioType {
    /// Playback duration, if known
    pub duration: Option<Duration>,
}

/// Video metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VideoType {
    /// Playback duration, if known
    pub duration: Option<Duration>,
}

/// Document metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocumentType;

/// Hyperlink metadata for network sources that point at a page rather than media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UrlType;

/// Metadata for content of no recognised kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OtherType;

impl AudioType {
    /// Audio metadata with the given duration.
    pub fn new(duration: Option<Duration>) -> Self {
        Self { duration }
    }
}

impl VideoType {
    /// Video metadata with the given duration.
    pub fn new(duration: Option<Duration>) -> Self {
        Self { duration }
    }
}

/// Runtime-tagged metadata of any kind.
///
/// # Examples
///
/// ```
/// use polymedia_core::{FileType, MediaKind, MediaVariant, VideoType};
/// use std::time::Duration;
///
/// let erased = FileType::new(MediaKind::Video, Some(Duration::from_secs(90)));
/// assert_eq!(erased.kind(), MediaKind::Video);
/// assert_eq!(erased.duration(), Some(Duration::from_secs(90)));
///
/// let video = VideoType::from_file_type(erased).unwrap();
/// assert_eq!(video.duration, Some(Duration::from_secs(90)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Image metadata
    Image(ImageType),
    /// Audio metadata
    Audio(AudioType),
    /// Video metadata
    Video(VideoType),
    /// Document metadata
    Document(DocumentType),
    /// Hyperlink metadata
    Url(UrlType),
    /// Unclassified metadata
    Other(OtherType),
}

impl FileType {
    /// Build metadata for `kind`. The duration is dropped for untimed kinds.
    pub fn new(kind: MediaKind, duration: Option<Duration>) -> Self {
        match kind {
            MediaKind::Image => FileType::Image(ImageType),
            MediaKind::Audio => FileType::Audio(AudioType::new(duration)),
            MediaKind::Video => FileType::Video(VideoType::new(duration)),
            MediaKind::Document => FileType::Document(DocumentType),
            MediaKind::Url => FileType::Url(UrlType),
            MediaKind::Other => FileType::Other(OtherType),
        }
    }

    /// Playback duration for audio and video, `None` for everything else.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            FileType::Audio(audio) => audio.duration,
            FileType::Video(video) => video.duration,
            _ => None,
        }
    }
}

impl MediaVariant for FileType {
    fn kind(&self) -> MediaKind {
        match self {
            FileType::Image(_) => MediaKind::Image,
            FileType::Audio(_) => MediaKind::Audio,
            FileType::Video(_) => MediaKind::Video,
            FileType::Document(_) => MediaKind::Document,
            FileType::Url(_) => MediaKind::Url,
            FileType::Other(_) => MediaKind::Other,
        }
    }

    fn into_file_type(self) -> FileType {
        self
    }

    fn from_file_type(file_type: FileType) -> Option<Self> {
        Some(file_type)
    }
}

macro_rules! concrete_variant {
    ($ty:ident, $kind:ident, |$duration:ident| $build:expr) => {
        impl MediaVariant for $ty {
            fn kind(&self) -> MediaKind {
                MediaKind::$kind
            }

            fn into_file_type(self) -> FileType {
                FileType::$kind(self)
            }

            fn from_file_type(file_type: FileType) -> Option<Self> {
                match file_type {
                    FileType::$kind(value) => Some(value),
                    _ => None,
                }
            }
        }

        impl ConcreteVariant for $ty {
            const KIND: MediaKind = MediaKind::$kind;

            fn with_duration($duration: Option<Duration>) -> Self {
                $build
            }
        }

        impl From<$ty> for FileType {
            fn from(value: $ty) -> Self {
                FileType::$kind(value)
            }
        }
    };
}

concrete_variant!(ImageType, Image, |_duration| ImageType);
concrete_variant!(AudioType, Audio, |duration| AudioType::new(duration));
concrete_variant!(VideoType, Video, |duration| VideoType::new(duration));
concrete_variant!(DocumentType, Document, |_duration| DocumentType);
concrete_variant!(UrlType, Url, |_duration| UrlType);
concrete_variant!(OtherType, Other, |_duration| OtherType);

impl TimedVariant for AudioType {
    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

impl TimedVariant for VideoType {
    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untimed_kinds_drop_duration() {
        let secs = Some(Duration::from_secs(5));
        assert_eq!(FileType::new(MediaKind::Image, secs), FileType::Image(ImageType));
        assert_eq!(FileType::new(MediaKind::Image, secs).duration(), None);
        assert_eq!(FileType::new(MediaKind::Document, secs).duration(), None);
        assert_eq!(FileType::new(MediaKind::Audio, secs).duration(), secs);
    }

    #[test]
    fn narrowing_requires_matching_kind() {
        let video = FileType::new(MediaKind::Video, None);
        assert!(AudioType::from_file_type(video).is_none());
        assert_eq!(VideoType::from_file_type(video), Some(VideoType::new(None)));
        assert_eq!(FileType::from_file_type(video), Some(video));
    }

    #[test]
    fn timed_equality_includes_duration() {
        assert_ne!(
            AudioType::new(Some(Duration::from_secs(1))),
            AudioType::new(Some(Duration::from_secs(2)))
        );
        assert_eq!(AudioType::new(None), AudioType::default());
    }

    #[test]
    fn concrete_kind_constant_matches_value() {
        assert_eq!(VideoType::KIND, VideoType::with_duration(None).kind());
        assert_eq!(UrlType::KIND, MediaKind::Url);
    }
}
