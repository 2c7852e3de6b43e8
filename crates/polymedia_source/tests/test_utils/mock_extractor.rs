//! Mock metadata extractor for testing.

use polymedia_core::{ExtractSource, ExtractedMetadata, MetadataExtractor};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Behavior configuration for mock extraction.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Report the given metadata
    Found(ExtractedMetadata),
    /// Report nothing
    Nothing,
    /// Sleep for the given time, then report the metadata
    Slow(Duration, ExtractedMetadata),
}

/// Mock extractor that counts how often it is asked.
#[derive(Debug, Clone)]
pub struct MockExtractor {
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
}

impl MockExtractor {
    /// Create a mock with the given behavior.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of extraction calls so far.
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MetadataExtractor for MockExtractor {
    async fn extract(
        &self,
        _source: ExtractSource<'_>,
        _timeout: Duration,
    ) -> Option<ExtractedMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Found(metadata) => Some(metadata.clone()),
            MockBehavior::Nothing => None,
            MockBehavior::Slow(delay, metadata) => {
                tokio::time::sleep(*delay).await;
                Some(metadata.clone())
            }
        }
    }
}
