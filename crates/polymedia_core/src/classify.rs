//! Kind classification for paths, URLs and byte buffers.

use crate::{MediaKind, TypeClassifier};
use std::time::Duration;

/// Upper bound on a single metadata extraction.
///
/// Extraction that runs longer is abandoned and treated as "no metadata".
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(3);

/// Outcome of classifying a path or a buffer.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Classification {
    /// The kind the input was classified as.
    kind: MediaKind,
    /// The explicit MIME type, or the one derived from the input.
    mime_type: Option<String>,
}

impl Classification {
    /// Create a classification result.
    pub fn new(kind: MediaKind, mime_type: Option<String>) -> Self {
        Self { kind, mime_type }
    }

    /// Split into kind and MIME type.
    pub fn into_parts(self) -> (MediaKind, Option<String>) {
        (self.kind, self.mime_type)
    }
}

/// Classify a path or URL.
///
/// Any path containing `ism` is taken for a smooth-streaming manifest and
/// classified as video before anything else is considered; note this also
/// matches names like `charisma.mp3`. Otherwise an explicit MIME type wins,
/// then the MIME type the classifier derives from the extension. Without
/// either the result is [`MediaKind::Other`].
///
/// # Examples
///
/// ```
/// use polymedia_core::{MediaKind, TypeClassifier, classify_path};
///
/// #[derive(Debug)]
/// struct NoLookup;
///
/// impl TypeClassifier for NoLookup {
///     fn mime_from_path(&self, _: &str, _: Option<&str>) -> Option<String> { None }
///     fn mime_from_bytes(&self, _: &[u8], _: Option<&str>) -> Option<String> { None }
/// }
///
/// let manifest = classify_path("live/Manifest.ism", None, &NoLookup);
/// assert_eq!(*manifest.kind(), MediaKind::Video);
///
/// let hinted = classify_path("clip", Some("audio/ogg"), &NoLookup);
/// assert_eq!(*hinted.kind(), MediaKind::Audio);
///
/// let unknown = classify_path("clip", None, &NoLookup);
/// assert_eq!(*unknown.kind(), MediaKind::Other);
/// ```
pub fn classify_path(
    path: &str,
    mime_type: Option<&str>,
    classifier: &dyn TypeClassifier,
) -> Classification {
    if path.contains("ism") {
        let mime_type = mime_type
            .map(str::to_owned)
            .or_else(|| classifier.mime_from_path(path, None));
        return Classification::new(MediaKind::Video, mime_type);
    }

    let classification = classify_with(mime_type, || classifier.mime_from_path(path, mime_type));
    tracing::trace!(path, kind = %classification.kind, "Classified path");
    classification
}

/// Classify a byte buffer by explicit MIME type or by content signature.
pub fn classify_bytes(
    bytes: &[u8],
    mime_type: Option<&str>,
    classifier: &dyn TypeClassifier,
) -> Classification {
    let classification =
        classify_with(mime_type, || classifier.mime_from_bytes(bytes, mime_type));
    tracing::trace!(size = bytes.len(), kind = %classification.kind, "Classified bytes");
    classification
}

fn classify_with(
    mime_type: Option<&str>,
    derive: impl FnOnce() -> Option<String>,
) -> Classification {
    match mime_type {
        Some(mime_type) => {
            Classification::new(MediaKind::from_mime(mime_type), Some(mime_type.to_owned()))
        }
        None => match derive() {
            Some(derived) => Classification::new(MediaKind::from_mime(&derived), Some(derived)),
            None => Classification::new(MediaKind::Other, None),
        },
    }
}
