//! Optional construction parameters shared by every factory.

use crate::{ByteSize, MediaKind};
use std::time::Duration;

/// Optional values a caller may already know when constructing a source.
///
/// Anything left unset is derived: the name from the path or URL, the MIME
/// type and kind by classification, the size from the backing store.
///
/// # Examples
///
/// ```
/// use polymedia_core::{ByteSize, MediaKind, MediaOptions};
/// use std::time::Duration;
///
/// let options = MediaOptions::default()
///     .with_name("intro.mp4")
///     .with_size(ByteSize::kib(512))
///     .with_duration(Duration::from_secs(30));
///
/// assert_eq!(options.name().as_deref(), Some("intro.mp4"));
/// assert_eq!(*options.kind(), None::<MediaKind>);
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option, into)]
pub struct MediaOptions {
    /// Display or file name.
    name: Option<String>,
    /// Known size.
    size: Option<ByteSize>,
    /// Known MIME type; also steers classification.
    mime_type: Option<String>,
    /// Known playback duration (audio and video only).
    duration: Option<Duration>,
    /// Kind to use instead of classifying.
    kind: Option<MediaKind>,
}
