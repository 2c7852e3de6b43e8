//! Container metadata extraction on top of `lofty`.

use lofty::error::LoftyError;
use lofty::file::{FileType, TaggedFile};
use lofty::prelude::*;
use lofty::probe::Probe;
use polymedia_core::{ExtractSource, ExtractedMetadata, MetadataExtractor};
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

/// Reads the container type and playback duration of audio files.
///
/// Parsing is blocking, so it runs on tokio's blocking pool. The format is
/// sniffed from the content, with the file extension as a fallback.
/// Formats `lofty` does not know yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyExtractor;

impl LoftyExtractor {
    /// Create an extractor.
    pub fn new() -> Self {
        Self
    }
}

fn read_file(path: &Path) -> Result<TaggedFile, LoftyError> {
    Probe::open(path)?.guess_file_type()?.read()
}

fn read_bytes(bytes: Vec<u8>) -> Result<TaggedFile, LoftyError> {
    Probe::new(Cursor::new(bytes)).guess_file_type()?.read()
}

// MP4 can hold video, so no MIME type is claimed for it.
fn mime_type(file_type: &FileType) -> Option<&'static str> {
    match file_type {
        FileType::Aac => Some("audio/aac"),
        FileType::Aiff => Some("audio/aiff"),
        FileType::Ape => Some("audio/x-ape"),
        FileType::Flac => Some("audio/flac"),
        FileType::Mpeg => Some("audio/mpeg"),
        FileType::Mpc => Some("audio/x-musepack"),
        FileType::Opus => Some("audio/opus"),
        FileType::Vorbis | FileType::Speex => Some("audio/ogg"),
        FileType::Wav => Some("audio/wav"),
        FileType::WavPack => Some("audio/x-wavpack"),
        _ => None,
    }
}

fn describe(tagged: &TaggedFile) -> Option<ExtractedMetadata> {
    let mut found = ExtractedMetadata::default();
    if let Some(mime) = mime_type(&tagged.file_type()) {
        found = found.with_mime_type(mime);
    }

    let duration = tagged.properties().duration();
    if !duration.is_zero() {
        found = found.with_duration(duration);
    }

    (found != ExtractedMetadata::default()).then_some(found)
}

#[async_trait::async_trait]
impl MetadataExtractor for LoftyExtractor {
    #[tracing::instrument(skip_all)]
    async fn extract(
        &self,
        source: ExtractSource<'_>,
        timeout: Duration,
    ) -> Option<ExtractedMetadata> {
        let task = match source {
            ExtractSource::File(path) => {
                let path = path.to_path_buf();
                tokio::task::spawn_blocking(move || read_file(&path))
            }
            ExtractSource::Bytes(bytes) => {
                let bytes = bytes.to_vec();
                tokio::task::spawn_blocking(move || read_bytes(bytes))
            }
        };

        match tokio::time::timeout(timeout, task).await {
            Ok(Ok(Ok(tagged))) => {
                let found = describe(&tagged);
                tracing::debug!(found = ?found, "Probed container");
                found
            }
            Ok(Ok(Err(e))) => {
                tracing::debug!(error = %e, "Container not recognised");
                None
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Metadata probe did not finish");
                None
            }
            Err(_) => {
                tracing::debug!(?timeout, "Metadata probe timed out");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mp4_claims_no_mime_type() {
        assert_eq!(mime_type(&FileType::Mp4), None);
        assert_eq!(mime_type(&FileType::Flac), Some("audio/flac"));
    }
}
