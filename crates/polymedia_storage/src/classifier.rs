//! MIME lookup by file extension and content signature.

use crate::signature;
use polymedia_core::TypeClassifier;

/// Extensions whose registered MIME type does not say what the content is.
///
/// `mime_guess` files HLS playlists under `audio/x-mpegurl`; they are video
/// playlists in practice.
const OVERRIDES: &[(&str, &str)] = &[
    ("m3u8", "application/vnd.apple.mpegurl"),
    ("m3u", "application/vnd.apple.mpegurl"),
    ("ism", "application/vnd.ms-sstr+xml"),
    ("isml", "application/vnd.ms-sstr+xml"),
];

/// [`TypeClassifier`] backed by `mime_guess` and a magic-byte table.
///
/// Returned MIME strings are always lowercase. When nothing matches, the
/// caller's hint is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeClassifier;

impl MimeClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self
    }

    /// Lowercased extension of the last path segment, ignoring any URL query or fragment.
    fn extension(path: &str) -> Option<String> {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or(path);
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let (_, extension) = file_name.rsplit_once('.')?;
        (!extension.is_empty()).then(|| extension.to_ascii_lowercase())
    }
}

impl TypeClassifier for MimeClassifier {
    fn mime_from_path(&self, path: &str, mime_hint: Option<&str>) -> Option<String> {
        let guessed = Self::extension(path).and_then(|extension| {
            OVERRIDES
                .iter()
                .find(|(ext, _)| *ext == extension)
                .map(|(_, mime)| (*mime).to_string())
                .or_else(|| {
                    mime_guess::from_ext(&extension)
                        .first_raw()
                        .map(str::to_ascii_lowercase)
                })
        });

        if guessed.is_none() {
            tracing::trace!(path, "No MIME type for extension");
        }
        guessed.or_else(|| mime_hint.map(str::to_owned))
    }

    fn mime_from_bytes(&self, bytes: &[u8], mime_hint: Option<&str>) -> Option<String> {
        signature::sniff(bytes)
            .map(str::to_owned)
            .or_else(|| mime_hint.map(str::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_ignores_query_and_case() {
        assert_eq!(
            MimeClassifier::extension("https://x/a/Clip.MP4?token=1#t=3").as_deref(),
            Some("mp4")
        );
        assert_eq!(MimeClassifier::extension("/music/no_extension"), None);
        assert_eq!(MimeClassifier::extension("/music.d/trailing."), None);
    }

    #[test]
    fn hls_playlist_maps_to_mpegurl() {
        let mime = MimeClassifier.mime_from_path("stream.m3u8", None);
        assert_eq!(mime.as_deref(), Some("application/vnd.apple.mpegurl"));
    }

    #[test]
    fn common_extensions() {
        let c = MimeClassifier::new();
        assert_eq!(c.mime_from_path("a.mp4", None).as_deref(), Some("video/mp4"));
        assert_eq!(c.mime_from_path("a.png", None).as_deref(), Some("image/png"));
        assert_eq!(c.mime_from_path("a.pdf", None).as_deref(), Some("application/pdf"));
    }

    #[test]
    fn hint_is_the_fallback() {
        let c = MimeClassifier::new();
        assert_eq!(
            c.mime_from_path("blob", Some("audio/ogg")).as_deref(),
            Some("audio/ogg")
        );
        assert_eq!(
            c.mime_from_bytes(b"????", Some("video/mp4")).as_deref(),
            Some("video/mp4")
        );
        assert_eq!(c.mime_from_bytes(b"????", None), None);
    }
}
