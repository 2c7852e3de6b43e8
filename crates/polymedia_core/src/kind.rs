//! Media kind enumeration.

use serde::{Deserialize, Serialize};

/// Classification tag of a piece of media.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Image content (PNG, JPEG, WebP, etc.)
    #[display("image")]
    Image,
    /// Audio content (MP3, WAV, OGG, etc.)
    #[display("audio")]
    Audio,
    /// Video content (MP4, WebM, HLS playlists, etc.)
    #[display("video")]
    Video,
    /// Document content (PDF)
    #[display("document")]
    Document,
    /// Plain hyperlink that is not itself playable media
    #[display("url")]
    Url,
    /// Anything else
    #[display("other")]
    Other,
}

impl MediaKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
            MediaKind::Url => "url",
            MediaKind::Other => "other",
        }
    }

    /// Classify a MIME string by substring.
    ///
    /// Checks run in order: `image`, `audio`, `video` or `mpegurl` (HLS
    /// playlists), `application/pdf`. Anything else is [`MediaKind::Other`].
    /// Matching is case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use polymedia_core::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_mime("application/vnd.apple.mpegurl"), MediaKind::Video);
    /// assert_eq!(MediaKind::from_mime("text/plain"), MediaKind::Other);
    /// ```
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.contains("image") {
            MediaKind::Image
        } else if mime_type.contains("audio") {
            MediaKind::Audio
        } else if mime_type.contains("video") || mime_type.contains("mpegurl") {
            MediaKind::Video
        } else if mime_type.contains("application/pdf") {
            MediaKind::Document
        } else {
            MediaKind::Other
        }
    }

    /// Whether variants of this kind carry a duration.
    pub fn is_timed(&self) -> bool {
        matches!(self, MediaKind::Audio | MediaKind::Video)
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaKind::Image),
            "audio" => Ok(MediaKind::Audio),
            "video" => Ok(MediaKind::Video),
            "document" => Ok(MediaKind::Document),
            "url" => Ok(MediaKind::Url),
            "other" => Ok(MediaKind::Other),
            _ => Err(format!("Unknown media kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn mime_substring_order() {
        assert_eq!(MediaKind::from_mime("audio/mpeg"), MediaKind::Audio);
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("application/x-mpegurl"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Document);
        assert_eq!(MediaKind::from_mime("application/zip"), MediaKind::Other);
        // "audio" is checked before "mpegurl"
        assert_eq!(MediaKind::from_mime("audio/x-mpegurl"), MediaKind::Audio);
    }

    #[test]
    fn string_round_trip() {
        for kind in MediaKind::iter() {
            assert_eq!(kind.as_str().parse::<MediaKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert!("podcast".parse::<MediaKind>().is_err());
    }

    #[test]
    fn only_audio_and_video_are_timed() {
        let timed: Vec<_> = MediaKind::iter().filter(MediaKind::is_timed).collect();
        assert_eq!(timed, vec![MediaKind::Audio, MediaKind::Video]);
    }
}
