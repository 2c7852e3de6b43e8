//! Collaborators shared by every media source.

use polymedia_core::{
    BundleLoader, EmptyBundle, MetadataExtractor, NoMetadata, Platform, PlatformFileFacade,
    TypeClassifier,
};
use std::sync::Arc;

/// The platform services media sources are built against.
///
/// An application creates one environment at startup and passes it to the
/// factories. Sources that need a service after construction keep their own
/// handle to it, so the environment can be dropped or replaced at any time.
///
/// # Examples
///
/// ```
/// use polymedia_core::Platform;
/// use polymedia_source::MediaEnv;
/// use polymedia_storage::{InMemoryBundle, MimeClassifier, TokioFileFacade};
/// use std::sync::Arc;
///
/// let env = MediaEnv::new(Arc::new(TokioFileFacade::new()), Arc::new(MimeClassifier::new()))
///     .with_bundle(Arc::new(InMemoryBundle::new()))
///     .with_platform(Platform::Web);
///
/// assert_eq!(*env.platform(), Platform::Web);
/// ```
#[derive(Debug, Clone, derive_getters::Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct MediaEnv {
    /// File operations
    files: Arc<dyn PlatformFileFacade>,
    /// MIME lookup for paths and byte prefixes
    classifier: Arc<dyn TypeClassifier>,
    /// Duration and container probing for audio and video
    extractor: Arc<dyn MetadataExtractor>,
    /// Default asset bundle
    bundle: Arc<dyn BundleLoader>,
    /// Platform the file factories classify for
    platform: Platform,
}

impl MediaEnv {
    /// Create an environment for the native platform with no metadata
    /// extraction and an empty asset bundle.
    pub fn new(files: Arc<dyn PlatformFileFacade>, classifier: Arc<dyn TypeClassifier>) -> Self {
        Self {
            files,
            classifier,
            extractor: Arc::new(NoMetadata),
            bundle: Arc::new(EmptyBundle),
            platform: Platform::default(),
        }
    }
}
