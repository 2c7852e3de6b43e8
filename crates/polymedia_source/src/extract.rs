//! Bounded metadata extraction.

use crate::MediaEnv;
use polymedia_core::{ExtractSource, METADATA_TIMEOUT, MediaKind};
use std::time::Duration;

/// Ask the extractor for whatever is still unknown about audio or video.
///
/// Nothing is asked for other kinds, or when both values are already known.
/// A failed or timed-out extraction leaves the inputs as they were.
pub(crate) async fn fill_timed_gaps(
    env: &MediaEnv,
    kind: MediaKind,
    source: ExtractSource<'_>,
    mime_type: Option<String>,
    duration: Option<Duration>,
) -> (Option<String>, Option<Duration>) {
    if !kind.is_timed() || (mime_type.is_some() && duration.is_some()) {
        return (mime_type, duration);
    }

    let extraction = env.extractor().extract(source, METADATA_TIMEOUT);
    match tokio::time::timeout(METADATA_TIMEOUT, extraction).await {
        Ok(Some(found)) => {
            tracing::debug!(?found, "Extracted media metadata");
            (
                mime_type.or_else(|| found.mime_type().clone()),
                duration.or(*found.duration()),
            )
        }
        Ok(None) => {
            tracing::debug!(%kind, "No metadata extracted");
            (mime_type, duration)
        }
        Err(_) => {
            tracing::warn!(%kind, timeout = ?METADATA_TIMEOUT, "Metadata extraction timed out");
            (mime_type, duration)
        }
    }
}
