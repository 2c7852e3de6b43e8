//! Test utilities for polymedia_source tests.
//!
//! This module provides mock collaborators and environment helpers.

pub mod counting_files;
pub mod mock_extractor;

#[allow(unused_imports)]
pub use counting_files::CountingFiles;
#[allow(unused_imports)]
pub use mock_extractor::{MockBehavior, MockExtractor};

use polymedia_source::MediaEnv;
use polymedia_storage::{MimeClassifier, TokioFileFacade};
use std::sync::Arc;

/// Native environment over the real filesystem.
#[allow(dead_code)]
pub fn native_env() -> MediaEnv {
    MediaEnv::new(Arc::new(TokioFileFacade::new()), Arc::new(MimeClassifier::new()))
}

/// First bytes of a PNG file.
#[allow(dead_code)]
pub const PNG_HEADER: [u8; 16] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];
